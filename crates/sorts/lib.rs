//! Classic comparison sorts over mutable slices.
//!
//! Every routine sorts in place in ascending order and comes in two forms:
//! one for `PartialOrd` elements and a `_by` form taking a comparator.
//! Incomparable pairs (such as `NaN` against anything) are treated as equal.

use std::cmp::Ordering;

mod bubble;
mod insertion;
mod quick;

pub use quick::PARALLEL_THRESHOLD;

/// Sorts `data` with quicksort (middle-element pivot). Not stable.
pub fn quicksort<T: PartialOrd>(data: &mut [T]) {
    quick::sort(data, &mut |a: &T, b: &T| a < b);
}

pub fn quicksort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick::sort(data, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Quicksort that sorts the two halves of each partition on rayon's pool.
pub fn par_quicksort<T: PartialOrd + Send>(data: &mut [T]) {
    quick::par_sort(data, &|a: &T, b: &T| a < b);
}

pub fn par_quicksort_by<T, F>(data: &mut [T], compare: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    quick::par_sort(data, &|a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts `data` with insertion sort. Stable.
pub fn insertion_sort<T: PartialOrd>(data: &mut [T]) {
    insertion::sort(data, &mut |a: &T, b: &T| a < b);
}

pub fn insertion_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion::sort(data, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts `data` with bubble sort. Stable; stops after a pass with no swaps.
pub fn bubble_sort<T: PartialOrd>(data: &mut [T]) {
    bubble::sort(data, &mut |a: &T, b: &T| a < b);
}

pub fn bubble_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble::sort(data, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// True when no element is less than the one before it.
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|pair| !(pair[1] < pair[0]))
}

pub fn is_sorted_by<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2)
        .all(|pair| compare(&pair[1], &pair[0]) != Ordering::Less)
}
