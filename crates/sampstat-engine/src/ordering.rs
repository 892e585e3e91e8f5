//! In-place ordering primitives.
//!
//! Both sorts use [`f64::total_cmp`] so that every value, including NaN and
//! signed zeros, has a defined position. Empty and single-value slices are
//! valid and left unchanged.

/// Sorts `data` in ascending order and returns the same slice.
///
/// # Examples
///
/// ```
/// use sampstat_engine::sort_ascending;
///
/// let mut values = [69.0, 12.0, 3.0];
/// assert_eq!(sort_ascending(&mut values), &[3.0, 12.0, 69.0]);
/// ```
pub fn sort_ascending(data: &mut [f64]) -> &mut [f64] {
    data.sort_unstable_by(f64::total_cmp);
    data
}

/// Sorts `data` in descending order and returns the same slice.
///
/// The slice is sorted ascending first and then reversed by swapping
/// symmetric positions.
///
/// # Examples
///
/// ```
/// use sampstat_engine::sort_descending;
///
/// let mut values = [69.0, 169.0];
/// assert_eq!(sort_descending(&mut values), &[169.0, 69.0]);
/// ```
pub fn sort_descending(data: &mut [f64]) -> &mut [f64] {
    sort_ascending(data);
    let len = data.len();
    for i in 0..len / 2 {
        data.swap(i, len - i - 1);
    }
    data
}
