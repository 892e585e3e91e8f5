use crate::{
    StatsResult,
    validation::{MIN_SINGLE_PASS, ensure_len},
};

/// Returns the smallest value in `data`.
///
/// Does not reorder the slice.
///
/// # Examples
///
/// ```
/// use sampstat_engine::min;
///
/// assert_eq!(min(&[4.5, -1.0, 12.0]).unwrap(), -1.0);
/// ```
pub fn min(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_SINGLE_PASS)?;
    let mut current = data[0];
    for &value in &data[1..] {
        if value < current {
            current = value;
        }
    }
    Ok(current)
}

/// Returns the largest value in `data`.
///
/// Does not reorder the slice.
///
/// # Examples
///
/// ```
/// use sampstat_engine::max;
///
/// assert_eq!(max(&[-10.0, -9.0, -8.0]).unwrap(), -8.0);
/// ```
pub fn max(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, MIN_SINGLE_PASS)?;
    let mut current = data[0];
    for &value in &data[1..] {
        if value > current {
            current = value;
        }
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatsError;

    #[test]
    fn test_min() {
        assert_eq!(min(&[4.5, -1.0, 12.0]), Ok(-1.0));
        assert_eq!(min(&[1.0]), Ok(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(max(&[-10.0, -9.0, -8.0]), Ok(-8.0));
        assert_eq!(max(&[19.0]), Ok(19.0));
    }

    #[test]
    fn test_empty() {
        let expected = Err(StatsError::NotEnoughData {
            required: 1,
            actual: 0,
        });
        assert_eq!(min(&[]), expected);
        assert_eq!(max(&[]), expected);
    }

    #[test]
    fn test_keeps_order() {
        let values = [3.0, 1.0, 2.0];
        min(&values).unwrap();
        max(&values).unwrap();
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }
}
