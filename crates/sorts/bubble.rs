pub(crate) fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Everything at or past `end` is already in its final place.
    let mut end = v.len();
    while end > 1 {
        let mut last_swap = 0;
        for i in 1..end {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }
        end = last_swap;
    }
}
