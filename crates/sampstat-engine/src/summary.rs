use std::fmt;

use serde::Serialize;

use crate::{
    StatsResult, central, dispersion, extremes,
    mode::{self, Mode},
    validation::{MIN_QUARTILE, ensure_len},
};

/// Summary report for one sample collection.
///
/// Fields are declared in report order: minimum, maximum, mean, mode(s),
/// first quartile, median, third quartile, IQR and 1.5 × IQR.
///
/// # Examples
///
/// ```
/// use sampstat_engine::Summary;
///
/// let summary = Summary::new([1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert_eq!(summary.min, 1.0);
/// assert_eq!(summary.first_quartile, 1.5);
/// assert_eq!(summary.third_quartile, 2.5);
/// assert_eq!(summary.mode.values, vec![2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of samples the report was computed from.
    pub count: usize,
    /// The smallest value.
    pub min: f64,
    /// The largest value.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The most frequent value(s) and their shared count.
    pub mode: Mode,
    /// Median of the lower half of the sorted values.
    pub first_quartile: f64,
    /// The median value.
    pub median: f64,
    /// Median of the upper half of the sorted values.
    pub third_quartile: f64,
    /// The interquartile range, `third_quartile - first_quartile`.
    pub iqr: f64,
    /// `1.5 * iqr`, the outlier-fence distance.
    pub three_over_two_iqr: f64,
}

impl Summary {
    /// Computes a summary from owned values, leaving the caller's data
    /// untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`StatsError::NotEnoughData`](crate::StatsError::NotEnoughData)
    /// if fewer than two values are given.
    pub fn new<I>(values: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        summarize(&mut values)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum: {}", self.min)?;
        writeln!(f, "Maximum: {}", self.max)?;
        writeln!(f, "Mean: {}", self.mean)?;
        writeln!(f, "Mode(s): {}", self.mode)?;
        writeln!(f, "First quartile: {}", self.first_quartile)?;
        writeln!(f, "Median: {}", self.median)?;
        writeln!(f, "Third quartile: {}", self.third_quartile)?;
        writeln!(f, "IQR: {}", self.iqr)?;
        write!(f, "3/2 IQR: {}", self.three_over_two_iqr)
    }
}

/// Computes every statistic of `data` into one [`Summary`], sorting it in
/// place.
///
/// Each field is computed by its own call; nothing is shared between them.
pub fn summarize(data: &mut [f64]) -> StatsResult<Summary> {
    ensure_len(data, MIN_QUARTILE)?;
    Ok(Summary {
        count: data.len(),
        min: extremes::min(data)?,
        max: extremes::max(data)?,
        mean: central::mean(data)?,
        mode: mode::mode(data)?,
        first_quartile: dispersion::first_quartile(data)?,
        median: central::median(data)?,
        third_quartile: dispersion::third_quartile(data)?,
        iqr: dispersion::iqr(data)?,
        three_over_two_iqr: dispersion::three_over_two_iqr(data)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatsError;

    #[test]
    fn test_summarize() {
        let mut values = [3.0, 2.0, 1.0, 2.0];
        let summary = summarize(&mut values).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.mode.to_sequence(), vec![2.0, 2.0]);
        assert_eq!(summary.first_quartile, 1.5);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.third_quartile, 2.5);
        assert_eq!(summary.iqr, 1.0);
        assert_eq!(summary.three_over_two_iqr, 1.5);
        assert_eq!(values, [1.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_new_keeps_caller_order() {
        let values = vec![3.0, 1.0, 2.0];
        let summary = Summary::new(values.iter().copied()).unwrap();
        assert_eq!(summary.median, 2.0);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_display_field_order() {
        let summary = Summary::new([1.0, 2.0, 2.0, 3.0]).unwrap();
        let labels = summary
            .to_string()
            .lines()
            .map(|line| line.split(':').next().unwrap().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                "Minimum",
                "Maximum",
                "Mean",
                "Mode(s)",
                "First quartile",
                "Median",
                "Third quartile",
                "IQR",
                "3/2 IQR",
            ]
        );
        assert!(summary.to_string().contains("Mode(s): 2; quantity: 2"));
    }

    #[test]
    fn test_serialize() {
        let summary = Summary::new([1.0, 1.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["mode"]["values"], serde_json::json!([1.0]));
        assert_eq!(json["mode"]["count"], 2);
        assert_eq!(json["iqr"], 0.0);
    }

    #[test]
    fn test_requires_two_values() {
        assert_eq!(
            Summary::new([1.0]),
            Err(StatsError::NotEnoughData {
                required: 2,
                actual: 1
            })
        );
    }
}
