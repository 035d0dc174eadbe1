use std::cmp::Ordering;


/// Merges two sorted runs into `result`. On ties the element from `left` goes first,
/// which is what keeps `sort_with_buffer` stable.
pub fn merge<T, F>(left: &[T], right: &[T], result: &mut Vec<T>, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut index_left: usize = 0; // maximum = left.len()
    let mut index_right: usize = 0; // maximum = right.len()

    loop {
        if index_left == left.len() || index_right == right.len() {
            break;
        }

        if compare(&left[index_left], &right[index_right]) != Ordering::Greater {
            result.push(left[index_left].clone());
            index_left += 1;
        } else {
            result.push(right[index_right].clone());
            index_right += 1;
        }
    }

    result.extend_from_slice(&left[index_left..]);
    result.extend_from_slice(&right[index_right..]);
}

/// Stable merge sort of `items`. `buffer` is the auxiliary merge space; it is owned by
/// the caller so one allocation can serve several sorts.
pub fn sort_with_buffer<T, F>(items: &mut [T], buffer: &mut Vec<T>, compare: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    buffer.clear();
    buffer.reserve(items.len());
    let right = items.len() - 1;
    sort_range(items, 0, right, buffer, &compare);
    buffer.clear();
}

// [left, right] is inclusive on both ends
fn sort_range<T, F>(items: &mut [T], left: usize, right: usize, buffer: &mut Vec<T>, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    debug_assert!(left <= right && right < items.len());

    if left >= right {
        return;
    }

    let mid = (left + right) / 2;
    sort_range(items, left, mid, buffer, compare);
    sort_range(items, mid + 1, right, buffer, compare);

    buffer.clear();
    merge(&items[left..=mid], &items[mid + 1..=right], buffer, compare);
    debug_assert_eq!(buffer.len(), right - left + 1);
    items[left..=right].clone_from_slice(buffer);
}
