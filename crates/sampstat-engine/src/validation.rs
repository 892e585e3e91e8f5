use crate::{StatsError, StatsResult};

/// Minimum length for single-pass statistics (min, max, mean, median, mode).
pub const MIN_SINGLE_PASS: usize = 1;

/// Minimum length for quartile and variance derived statistics.
pub const MIN_QUARTILE: usize = 2;

/// Checks that a sample collection is present and long enough.
///
/// Returns the collection back on success so callers can chain on it.
///
/// # Errors
///
/// * [`StatsError::InvalidInput`] - if `data` is `None`
/// * [`StatsError::NotEnoughData`] - if `data` has fewer than `min_len` values
///
/// # Examples
///
/// ```
/// use sampstat_engine::{StatsError, validate};
///
/// assert!(validate(Some(&[1.0, 2.0]), 2).is_ok());
/// assert_eq!(validate(None, 1), Err(StatsError::InvalidInput));
/// assert_eq!(
///     validate(Some(&[1.0]), 2),
///     Err(StatsError::NotEnoughData { required: 2, actual: 1 }),
/// );
/// ```
pub fn validate(data: Option<&[f64]>, min_len: usize) -> StatsResult<&[f64]> {
    let data = data.ok_or(StatsError::InvalidInput)?;
    if data.len() < min_len {
        return Err(StatsError::NotEnoughData {
            required: min_len,
            actual: data.len(),
        });
    }
    Ok(data)
}

/// Length check for operations that already hold a slice.
pub(crate) fn ensure_len(data: &[f64], min_len: usize) -> StatsResult<()> {
    validate(Some(data), min_len).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_collection() {
        assert_eq!(validate(None, 0), Err(StatsError::InvalidInput));
    }

    #[test]
    fn test_zero_minimum_accepts_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(validate(Some(&empty), 0).map(<[f64]>::len), Ok(0));
    }

    #[test]
    fn test_reports_required_and_actual() {
        let err = validate(Some(&[1.0, 2.0]), 3).unwrap_err();
        assert_eq!(
            err,
            StatsError::NotEnoughData {
                required: 3,
                actual: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "not enough data: at least 3 value(s) needed, got 2"
        );
    }

    #[test]
    fn test_exact_minimum() {
        assert!(ensure_len(&[1.0, 2.0], MIN_QUARTILE).is_ok());
        assert!(ensure_len(&[1.0], MIN_SINGLE_PASS).is_ok());
    }
}
