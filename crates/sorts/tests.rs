use std::cmp::Ordering;

use sorts::*;

type Sort = fn(&mut [i32]);

const SORTS: [(&str, Sort); 4] = [
    ("quicksort", quicksort::<i32>),
    ("par_quicksort", par_quicksort::<i32>),
    ("insertion_sort", insertion_sort::<i32>),
    ("bubble_sort", bubble_sort::<i32>),
];

fn check_all(input: &[i32]) {
    let mut expected = input.to_vec();
    expected.sort();

    for (name, sort) in SORTS {
        let mut data = input.to_vec();
        sort(&mut data);
        assert_eq!(data, expected, "{} on {:?}", name, input);
    }
}

#[test]
fn empty_and_single_element_slices_are_untouched() {
    check_all(&[]);
    check_all(&[42]);
}

#[test]
fn two_elements() {
    check_all(&[2, 1]);
    check_all(&[1, 2]);
}

#[test]
fn already_sorted_input() {
    check_all(&[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn reverse_sorted_input() {
    check_all(&[8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn duplicates_and_negatives() {
    check_all(&[3, -1, 3, 0, -7, 3, 2, -1, 0]);
}

#[test]
fn all_equal_input() {
    check_all(&[5; 32]);
}

#[test]
fn comparator_variants_sort_descending() {
    let input = [4, 1, 3, 5, 2];
    let descending = |a: &i32, b: &i32| b.cmp(a);

    let mut data = input;
    quicksort_by(&mut data, descending);
    assert_eq!(data, [5, 4, 3, 2, 1]);

    let mut data = input;
    par_quicksort_by(&mut data, descending);
    assert_eq!(data, [5, 4, 3, 2, 1]);

    let mut data = input;
    insertion_sort_by(&mut data, descending);
    assert_eq!(data, [5, 4, 3, 2, 1]);

    let mut data = input;
    bubble_sort_by(&mut data, descending);
    assert_eq!(data, [5, 4, 3, 2, 1]);
    assert!(is_sorted_by(&data, descending));
}

#[test]
fn sorts_non_copy_elements() {
    let words = ["pear", "apple", "fig", "banana", "cherry"];
    let expected = vec!["apple", "banana", "cherry", "fig", "pear"];

    let mut data: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    quicksort(&mut data);
    assert_eq!(data, expected);

    let mut data: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    insertion_sort(&mut data);
    assert_eq!(data, expected);

    let mut data: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    bubble_sort(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn is_sorted_reports_order() {
    assert!(is_sorted::<i32>(&[]));
    assert!(is_sorted(&[1, 1, 2, 3]));
    assert!(!is_sorted(&[1, 3, 2]));
    assert!(is_sorted_by(&[3, 2, 1], |a: &i32, b: &i32| b.cmp(a)));
}

#[test]
fn floats_sort_with_partial_ord() {
    let mut data = [2.5, -1.0, 0.0, 3.25, -7.5];
    quicksort(&mut data);
    assert_eq!(data, [-7.5, -1.0, 0.0, 2.5, 3.25]);

    let mut data = [2.5f64, -1.0, 0.0];
    bubble_sort_by(&mut data, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    assert_eq!(data, [-1.0, 0.0, 2.5]);
}
