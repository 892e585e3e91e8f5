//! Copying variants of the statistics that sort their input.
//!
//! Each function here takes a shared slice, works on a private sorted copy
//! and leaves the caller's order intact. Use these when the data is shared
//! or its order matters.
//!
//! ```
//! use sampstat_engine::detached;
//!
//! let values = [9.0, 1.0, 5.0];
//! assert_eq!(detached::median(&values).unwrap(), 5.0);
//! assert_eq!(values, [9.0, 1.0, 5.0]);
//! ```

use crate::{Fences, Mode, StatsResult, Summary, central, dispersion, mode as modes, ordering};

/// Returns an ascending copy of `data`.
#[must_use]
pub fn sorted_ascending(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    ordering::sort_ascending(&mut sorted);
    sorted
}

/// Returns a descending copy of `data`.
#[must_use]
pub fn sorted_descending(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    ordering::sort_descending(&mut sorted);
    sorted
}

/// Median of `data`; see [`central::median`].
pub fn median(data: &[f64]) -> StatsResult<f64> {
    central::median(&mut data.to_vec())
}

/// First quartile of `data`; see [`dispersion::first_quartile`].
pub fn first_quartile(data: &[f64]) -> StatsResult<f64> {
    dispersion::first_quartile(&mut data.to_vec())
}

/// Third quartile of `data`; see [`dispersion::third_quartile`].
pub fn third_quartile(data: &[f64]) -> StatsResult<f64> {
    dispersion::third_quartile(&mut data.to_vec())
}

/// Interquartile range of `data`; see [`dispersion::iqr`].
pub fn iqr(data: &[f64]) -> StatsResult<f64> {
    dispersion::iqr(&mut data.to_vec())
}

/// `1.5 * IQR` of `data`; see [`dispersion::three_over_two_iqr`].
pub fn three_over_two_iqr(data: &[f64]) -> StatsResult<f64> {
    dispersion::three_over_two_iqr(&mut data.to_vec())
}

/// Outlier fences of `data`; see [`dispersion::fences`].
pub fn fences(data: &[f64]) -> StatsResult<Fences> {
    dispersion::fences(&mut data.to_vec())
}

/// Mode(s) of `data`; see [`mode`](crate::mode::mode).
pub fn mode(data: &[f64]) -> StatsResult<Mode> {
    modes::mode(&mut data.to_vec())
}

/// Summary report of `data`; see [`Summary::new`].
pub fn summarize(data: &[f64]) -> StatsResult<Summary> {
    Summary::new(data.iter().copied())
}
