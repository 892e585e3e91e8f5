use crate::{
    StatsResult,
    ordering::sort_ascending,
    validation::{MIN_SINGLE_PASS, ensure_len},
};

/// Returns the arithmetic mean of `data`.
///
/// Does not reorder the slice.
///
/// # Examples
///
/// ```
/// use sampstat_engine::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_SINGLE_PASS)?;
    let sum = data.iter().sum::<f64>();
    Ok(sum / data.len() as f64)
}

/// Returns the median of `data`, sorting it in place first.
///
/// For an odd number of values this is the middle value. For an even number
/// it is the mean of the two central values.
///
/// # Examples
///
/// ```
/// use sampstat_engine::median;
///
/// let mut values = [5.0, 1.0, 3.0];
/// assert_eq!(median(&mut values).unwrap(), 3.0);
/// assert_eq!(values, [1.0, 3.0, 5.0]);
///
/// let mut values = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(median(&mut values).unwrap(), 2.5);
/// ```
pub fn median(data: &mut [f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_SINGLE_PASS)?;
    Ok(median_of_sorted(sort_ascending(data)))
}

/// Median of an ascending, non-empty slice.
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!(sorted.is_sorted_by(|a, b| a.total_cmp(b).is_le()));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    }
}
