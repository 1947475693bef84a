use std::mem;

use log::debug;

/// Slices shorter than this are not worth splitting across threads.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Moves the middle element to the front and partitions the rest around it.
///
/// Returns the pivot's final index `mid`: everything before it is less than
/// the pivot, everything after it is not.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let middle = v.len() / 2;
    v.swap(0, middle);

    let (head, rest) = v.split_at_mut(1);
    let pivot = &head[0];
    let (mut l, mut r) = (0, rest.len());
    loop {
        while l < r && is_less(&rest[l], pivot) {
            l += 1;
        }
        while l < r && !is_less(&rest[r - 1], pivot) {
            r -= 1;
        }
        if l >= r {
            break;
        }
        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    v.swap(0, l);
    l
}

/// Called when the pivot at `v[0]` is the minimum: gathers every element
/// equal to it at the front and returns how many there are, pivot included.
fn partition_equal<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (head, rest) = v.split_at_mut(1);
    let pivot = &head[0];
    let (mut l, mut r) = (0, rest.len());
    loop {
        while l < r && !is_less(pivot, &rest[l]) {
            l += 1;
        }
        while l < r && is_less(pivot, &rest[r - 1]) {
            r -= 1;
        }
        if l >= r {
            break;
        }
        r -= 1;
        rest.swap(l, r);
        l += 1;
    }
    l + 1
}

/// Splits `v` around a fresh pivot. Returns the sub-slices still to sort.
fn split<'a, T, F>(v: &'a mut [T], is_less: &mut F) -> (&'a mut [T], &'a mut [T])
where
    F: FnMut(&T, &T) -> bool,
{
    let mid = partition(v, is_less);
    if mid == 0 {
        // Runs of keys equal to the minimum would otherwise cost a pass each.
        let equal = partition_equal(v, is_less);
        return (&mut [], &mut v[equal..]);
    }
    let (left, right) = v.split_at_mut(mid);
    (left, &mut right[1..])
}

pub(crate) fn sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Recurse into the smaller side and loop on the larger one so the stack
    // stays logarithmic.
    while v.len() > 1 {
        let (left, right) = split(mem::take(&mut v), is_less);
        if left.len() < right.len() {
            sort(left, is_less);
            v = right;
        } else {
            sort(right, is_less);
            v = left;
        }
    }
}

pub(crate) fn par_sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    debug!(
        "par_quicksort: {} elements across {} threads",
        v.len(),
        rayon::current_num_threads()
    );
    par_sort_recursive(v, is_less);
}

fn par_sort_recursive<T, F>(v: &mut [T], is_less: &F)
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < PARALLEL_THRESHOLD {
        sort(v, &mut |a: &T, b: &T| is_less(a, b));
        return;
    }

    let (left, right) = split(v, &mut |a: &T, b: &T| is_less(a, b));
    rayon::join(
        || par_sort_recursive(left, is_less),
        || par_sort_recursive(right, is_less),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn less(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn partition_places_pivot_between_halves() {
        let mut v = vec![9, 3, 7, 5, 1, 8, 2];
        let pivot = v[v.len() / 2];
        let mid = partition(&mut v, &mut less);

        assert_eq!(v[mid], pivot);
        assert!(v[..mid].iter().all(|x| *x < pivot));
        assert!(v[mid + 1..].iter().all(|x| *x >= pivot));
    }

    #[test]
    fn partition_equal_collects_duplicates_of_the_minimum() {
        let mut v = vec![1, 4, 1, 3, 1, 1, 2];
        let equal = partition_equal(&mut v, &mut less);

        assert_eq!(equal, 4);
        assert!(v[..equal].iter().all(|x| *x == 1));
        assert!(v[equal..].iter().all(|x| *x > 1));
    }

    #[test]
    fn split_skips_runs_equal_to_the_minimum() {
        let mut v = vec![5; 64];
        let (left, right) = split(&mut v, &mut less);
        assert!(left.is_empty());
        assert!(right.is_empty());
    }
}
