/// Shifts each element left past every larger predecessor.
pub(crate) fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut insert_at = i;
        while insert_at > 0 && is_less(&v[i], &v[insert_at - 1]) {
            insert_at -= 1;
        }
        v[insert_at..=i].rotate_right(1);
    }
}
