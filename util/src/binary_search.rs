/// Binary search over a sorted slice that reports how many iterations the
/// midpoint loop took.
///
/// On a hit the returned value is the element *after* the match, clamped to
/// the last element when the match is the final item. On a miss the value is
/// `None`; the iteration count is returned either way.
pub fn binary_search<T: PartialOrd + Copy>(q: T, items: &[T]) -> (usize, Option<T>) {
    let mut left: isize = 0;
    let mut right: isize = items.len() as isize - 1;

    let mut iterations = 0;

    while left <= right {
        iterations += 1;

        let mid = ((left + right) / 2) as usize;
        let mid_val = items[mid];

        if q < mid_val {
            right = mid as isize - 1;
            continue;
        }

        if q > mid_val {
            left = mid as isize + 1;
            continue;
        }

        let ceil_idx = if mid + 1 > items.len() - 1 {
            items.len() - 1
        } else {
            mid + 1
        };

        return (iterations, Some(items[ceil_idx]));
    }

    (iterations, None)
}
