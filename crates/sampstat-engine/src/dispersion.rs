//! Quartile-based spread, variance and outlier fences.
//!
//! Quartiles are medians of the two halves of the sorted data:
//!
//! - The first quartile uses indices `[0, n / 2)`.
//! - The third quartile uses `[n / 2 + 1, n)` when `n` is odd and
//!   `[n / 2, n)` when `n` is even.
//!
//! For odd `n` the central value belongs to neither half.

use serde::Serialize;

use crate::{
    StatsResult,
    central::{mean, median_of_sorted},
    ordering::sort_ascending,
    validation::{MIN_QUARTILE, ensure_len},
};

/// Multiplier applied to the interquartile range for outlier fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Returns the first quartile of `data`, sorting it in place first.
///
/// # Examples
///
/// ```
/// use sampstat_engine::first_quartile;
///
/// assert_eq!(first_quartile(&mut [1.0, 2.0, 2.0, 3.0]).unwrap(), 1.5);
/// assert_eq!(first_quartile(&mut [1.0, 2.0, 3.0]).unwrap(), 1.0);
/// ```
pub fn first_quartile(data: &mut [f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_QUARTILE)?;
    let sorted = sort_ascending(data);
    let half = sorted.len() / 2;
    Ok(median_of_sorted(&sorted[..half]))
}

/// Returns the third quartile of `data`, sorting it in place first.
///
/// # Examples
///
/// ```
/// use sampstat_engine::third_quartile;
///
/// assert_eq!(third_quartile(&mut [1.0, 2.0, 2.0, 3.0]).unwrap(), 2.5);
/// assert_eq!(third_quartile(&mut [12.0, 17.0, 18.0]).unwrap(), 18.0);
/// ```
pub fn third_quartile(data: &mut [f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_QUARTILE)?;
    let sorted = sort_ascending(data);
    let len = sorted.len();
    let start = if len % 2 == 1 { len / 2 + 1 } else { len / 2 };
    Ok(median_of_sorted(&sorted[start..]))
}

/// Returns the interquartile range, `Q3 - Q1`.
pub fn iqr(data: &mut [f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_QUARTILE)?;
    Ok(third_quartile(data)? - first_quartile(data)?)
}

/// Returns `1.5 * IQR`, the usual outlier-fence distance.
pub fn three_over_two_iqr(data: &mut [f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_QUARTILE)?;
    Ok(FENCE_FACTOR * iqr(data)?)
}

/// Returns the sample (Bessel-corrected) variance of `data`.
///
/// Does not reorder the slice.
///
/// # Examples
///
/// ```
/// use sampstat_engine::variance;
///
/// let v = variance(&[3.71, 3.76, 3.7, 3.69, 3.64]).unwrap();
/// assert!((v - 0.00185).abs() < 1e-5);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_QUARTILE)?;
    let mean = mean(data)?;
    let sum_sq = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Ok(sum_sq / (data.len() - 1) as f64)
}

/// Returns the sample standard deviation, the square root of [`variance`].
pub fn standard_deviation(data: &[f64]) -> StatsResult<f64> {
    Ok(variance(data)?.sqrt())
}

/// Tukey fences derived from the quartiles.
///
/// Values strictly outside `[lower, upper]` are conventionally treated as
/// outliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fences {
    /// `Q1 - 1.5 * IQR`
    pub lower: f64,
    /// `Q3 + 1.5 * IQR`
    pub upper: f64,
}

impl Fences {
    /// Returns `true` if `value` lies outside the fences.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Computes outlier fences for `data`, sorting it in place first.
///
/// # Examples
///
/// ```
/// use sampstat_engine::fences;
///
/// let f = fences(&mut [1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert_eq!(f.lower, 0.0);
/// assert_eq!(f.upper, 4.0);
/// assert!(f.is_outlier(4.5));
/// ```
pub fn fences(data: &mut [f64]) -> StatsResult<Fences> {
    ensure_len(data, MIN_QUARTILE)?;
    let q1 = first_quartile(data)?;
    let q3 = third_quartile(data)?;
    let reach = three_over_two_iqr(data)?;
    Ok(Fences {
        lower: q1 - reach,
        upper: q3 + reach,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatsError;

    const FIXTURE: [f64; 13] = [
        5.5, 6.5, 8.0, 9.0, 10.0, 9.4, 8.6, 9.5, 7.5, 7.6, 10.4, 10.5, 8.5,
    ];

    fn fixture() -> [f64; 13] {
        FIXTURE
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_first_quartile() {
        assert_close(first_quartile(&mut fixture()).unwrap(), 7.55);
        assert_eq!(first_quartile(&mut [1.0, 2.0, 2.0, 3.0]), Ok(1.5));
        assert_eq!(first_quartile(&mut [1.0, 2.0, 3.0]), Ok(1.0));
        assert_eq!(first_quartile(&mut [1.0, 1.0]), Ok(1.0));
    }

    #[test]
    fn test_third_quartile() {
        assert_close(third_quartile(&mut fixture()).unwrap(), 9.75);
        assert_eq!(third_quartile(&mut [1.0, 2.0, 2.0, 3.0]), Ok(2.5));
        assert_eq!(third_quartile(&mut [19.0, 69.0]), Ok(69.0));
        assert_eq!(third_quartile(&mut [12.0, 17.0, 18.0]), Ok(18.0));
    }

    #[test]
    fn test_quartiles_of_unsorted_input() {
        let mut values = [3.0, 2.0, 1.0, 2.0];
        assert_eq!(first_quartile(&mut values), Ok(1.5));
        let mut values = [3.0, 2.0, 1.0, 2.0];
        assert_eq!(third_quartile(&mut values), Ok(2.5));
    }

    #[test]
    fn test_iqr() {
        assert_close(iqr(&mut fixture()).unwrap(), 2.2);
        assert_close(
            three_over_two_iqr(&mut fixture()).unwrap(),
            1.5 * 2.2,
        );
    }

    #[test]
    fn test_variance() {
        let v = variance(&[3.71, 3.76, 3.7, 3.69, 3.64]).unwrap();
        assert!((v - 0.00185).abs() < 1e-5);
        assert_eq!(variance(&[1.0, 1.0]), Ok(0.0));
        assert_eq!(variance(&[1.0, 3.0]), Ok(2.0));
    }

    #[test]
    fn test_standard_deviation() {
        assert_eq!(standard_deviation(&[1.0, 3.0, 5.0]), Ok(2.0));
    }

    #[test]
    fn test_fences() {
        let mut values = FIXTURE;
        let f = fences(&mut values).unwrap();
        assert_close(f.lower, 7.55 - 3.3);
        assert_close(f.upper, 9.75 + 3.3);
        assert!(!f.is_outlier(5.5));
        assert!(f.is_outlier(14.0));
    }

    #[test]
    fn test_requires_two_values() {
        let expected = Err(StatsError::NotEnoughData {
            required: 2,
            actual: 1,
        });
        assert_eq!(first_quartile(&mut [5.0]), expected);
        assert_eq!(third_quartile(&mut [5.0]), expected);
        assert_eq!(iqr(&mut [5.0]), expected);
        assert_eq!(three_over_two_iqr(&mut [5.0]), expected);
        assert_eq!(variance(&[5.0]), expected);
        assert_eq!(standard_deviation(&[5.0]), expected);
        assert_eq!(fences(&mut [5.0]).map(|f| f.lower), expected);
    }
}
