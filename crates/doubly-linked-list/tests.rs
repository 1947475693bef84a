use doubly_linked_list::{list, DoublyLinkedList};

#[test]
fn new_list_is_empty() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn push_front_increases_len() {
    let mut list = DoublyLinkedList::new();
    list.push_front(1);
    assert_eq!(list.len(), 1);
    list.push_front(2);
    assert_eq!(list.len(), 2);
}

#[test]
fn push_back_increases_len() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    assert_eq!(list.len(), 1);
    list.push_back(2);
    assert_eq!(list.len(), 2);
}

#[test]
fn pop_front_returns_front() {
    let mut list = DoublyLinkedList::new();
    list.push_front(1);
    list.push_front(2);
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), None);
}

#[test]
fn pop_back_returns_back() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None);
}

#[test]
fn peek_front_returns_front_value() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.peek_front(), None);
    list.push_front(1);
    assert_eq!(list.peek_front(), Some(&1));
    list.push_front(2);
    assert_eq!(list.peek_front(), Some(&2));
    assert_eq!(list.len(), 2);
}

#[test]
fn peek_back_returns_back_value() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.peek_back(), None);
    list.push_back(1);
    assert_eq!(list.peek_back(), Some(&1));
    list.push_back(2);
    assert_eq!(list.peek_back(), Some(&2));
    assert_eq!(list.len(), 2);
}

#[test]
fn peek_mut_edits_in_place() {
    let mut list = list![1, 2, 3];
    if let Some(front) = list.peek_front_mut() {
        *front = 10;
    }
    if let Some(back) = list.peek_back_mut() {
        *back = 30;
    }
    assert_eq!(list, list![10, 2, 30]);
}

#[test]
fn mixed_operations() {
    let mut list = DoublyLinkedList::new();
    list.push_front(1);
    list.push_back(2);
    list.push_front(0);
    // List: 0 <-> 1 <-> 2
    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_front(), Some(1));
    assert!(list.is_empty());
}

#[test]
fn single_element_operations() {
    let mut list = DoublyLinkedList::new();
    list.push_front(1);
    assert_eq!(list.peek_front(), Some(&1));
    assert_eq!(list.peek_back(), Some(&1));
    assert_eq!(list.pop_back(), Some(1));
    assert!(list.is_empty());
}

#[test]
fn push_back_then_pop_front_is_fifo() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);
    assert_eq!(list.len(), 3);
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert!(list.is_empty());
}

#[test]
fn push_front_then_pop_back_is_fifo() {
    let mut list = DoublyLinkedList::new();
    for i in 0..5 {
        list.push_front(i);
    }
    let popped: Vec<_> = std::iter::from_fn(|| list.pop_back()).collect();
    assert_eq!(popped, vec![0, 1, 2, 3, 4]);
}

#[test]
fn push_back_then_pop_back_is_lifo() {
    let mut list = DoublyLinkedList::new();
    for i in 0..5 {
        list.push_back(i);
    }
    let popped: Vec<_> = std::iter::from_fn(|| list.pop_back()).collect();
    assert_eq!(popped, vec![4, 3, 2, 1, 0]);
}

#[test]
fn empty_pops_return_default_and_leave_list_empty() {
    let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert_eq!(list.pop_front_or_default(), 0);
    assert_eq!(list.pop_back_or_default(), 0);
    assert!(list.is_empty());

    let mut words: DoublyLinkedList<String> = DoublyLinkedList::new();
    assert_eq!(words.pop_front_or_default(), String::new());
    assert_eq!(words.pop_back_or_default(), String::new());
    assert!(words.is_empty());
}

#[test]
fn empty_peeks_return_default() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert_eq!(list.peek_front_or_default(), 0);
    assert_eq!(list.peek_back_or_default(), 0);

    let list = list![7, 8];
    assert_eq!(list.peek_front_or_default(), 7);
    assert_eq!(list.peek_back_or_default(), 8);
}

#[test]
fn clear_empties_the_list() {
    let mut list: DoublyLinkedList<_> = (0..100).collect();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.peek_front(), None);
    assert_eq!(list.peek_back(), None);

    list.push_back(1);
    assert_eq!(list.len(), 1);
}

#[test]
fn forward_and_reverse_iteration() {
    let mut list = DoublyLinkedList::new();
    for i in 1..=4 {
        list.push_back(i);
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);

    let mut list = DoublyLinkedList::new();
    for i in 1..=4 {
        list.push_front(i);
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
}

#[test]
fn iter_mut_writes_through() {
    let mut list = list![1, 2, 3];
    for value in list.iter_mut() {
        *value *= 2;
    }
    for value in &mut list {
        *value += 1;
    }
    assert_eq!(list, list![3, 5, 7]);
}

#[test]
fn into_iter_consumes_from_both_ends() {
    let list = list!['a', 'b', 'c', 'd'];
    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some('a'));
    assert_eq!(iter.next_back(), Some('d'));
    assert_eq!(iter.next(), Some('b'));
    assert_eq!(iter.next_back(), Some('c'));
    assert_eq!(iter.next(), None);
}

#[test]
fn clone_is_equal_and_independent() {
    let original = list![1, 2, 3];
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.push_back(4);
    if let Some(front) = copy.peek_front_mut() {
        *front = 100;
    }
    assert_eq!(original, list![1, 2, 3]);
    assert_ne!(copy, original);
}

#[test]
fn take_moves_contents_and_leaves_source_empty() {
    let mut source = list![1, 2, 3];
    let expected = source.clone();

    let moved = source.take();
    assert!(source.is_empty());
    assert_eq!(moved, expected);
}

#[test]
fn equality_depends_on_length_and_order() {
    assert_eq!(list![1, 2, 3], list![1, 2, 3]);
    assert_ne!(list![1, 2, 3], list![3, 2, 1]);
    assert_ne!(list![1, 2], list![1, 2, 3]);

    let empty: DoublyLinkedList<i32> = list![];
    assert_eq!(empty, DoublyLinkedList::new());
}

#[test]
fn concatenation_appends_copies_in_order() {
    let left = list![1, 2];
    let right = list![3, 4];

    let joined = &left + &right;
    assert_eq!(joined, list![1, 2, 3, 4]);
    assert_eq!(left, list![1, 2]);
    assert_eq!(right, list![3, 4]);

    let mut accumulated = left.clone();
    accumulated += &right;
    accumulated += &right;
    assert_eq!(accumulated, list![1, 2, 3, 4, 3, 4]);

    let owned = left + &right;
    assert_eq!(owned, list![1, 2, 3, 4]);
}

#[test]
fn len_tracks_pushes_minus_pops() {
    let mut list = DoublyLinkedList::new();
    for i in 0..10 {
        list.push_back(i);
    }
    for _ in 0..4 {
        list.pop_front();
    }
    assert_eq!(list.len(), 6);
    assert!(!list.is_empty());
    for _ in 0..6 {
        list.pop_back();
    }
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
}

#[test]
fn list_macro_forms() {
    let empty: DoublyLinkedList<u8> = list![];
    assert!(empty.is_empty());

    let repeated = list!["x"; 3];
    assert_eq!(repeated.iter().copied().collect::<Vec<_>>(), vec!["x", "x", "x"]);

    let trailing = list![1, 2, 3,];
    assert_eq!(trailing.len(), 3);
}

#[test]
fn debug_prints_as_a_list() {
    assert_eq!(format!("{:?}", list![1, 2, 3]), "[1, 2, 3]");
}
