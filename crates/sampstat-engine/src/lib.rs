//! Descriptive statistics over finite collections of real-valued samples.
//!
//! This crate is the statistics engine behind the `sampstat` command. Every
//! function is pure apart from one documented side effect: operations that
//! need ordered data sort the caller's slice **in place**. Callers that must
//! keep their original order use the [`detached`] entry points or
//! [`Summary::new`], which work on a private copy.
//!
//! # Modules
//!
//! - [`validation`]: Minimum-length checks shared by every operation
//! - [`ordering`]: In-place ascending and descending sorts
//! - [`extremes`]: Minimum and maximum
//! - [`central`]: Mean and median
//! - [`dispersion`]: Quartiles, interquartile range, variance and outlier fences
//! - [`mode`]: Mode detection with multi-modal ties
//! - [`summary`]: The composite summary report
//! - [`detached`]: Copying variants of the sorting statistics
//!
//! # Examples
//!
//! ```
//! use sampstat_engine::{first_quartile, median, third_quartile};
//!
//! let mut values = [3.0, 1.0, 2.0, 2.0];
//! assert_eq!(median(&mut values).unwrap(), 2.0);
//! assert_eq!(first_quartile(&mut values).unwrap(), 1.5);
//! assert_eq!(third_quartile(&mut values).unwrap(), 2.5);
//! // The slice has been sorted as a side effect.
//! assert_eq!(values, [1.0, 2.0, 2.0, 3.0]);
//! ```
//!
//! ```
//! use sampstat_engine::{StatsError, min};
//!
//! let err = min(&[]).unwrap_err();
//! assert_eq!(err, StatsError::NotEnoughData { required: 1, actual: 0 });
//! ```

pub use self::{
    central::{mean, median},
    dispersion::{
        Fences, fences, first_quartile, iqr, standard_deviation, third_quartile,
        three_over_two_iqr, variance,
    },
    extremes::{max, min},
    mode::{Mode, mode},
    ordering::{sort_ascending, sort_descending},
    summary::{Summary, summarize},
    validation::{MIN_QUARTILE, MIN_SINGLE_PASS, validate},
};

pub mod central;
pub mod detached;
pub mod dispersion;
pub mod extremes;
pub mod mode;
pub mod ordering;
pub mod summary;
pub mod validation;

/// Failure of a statistics operation.
///
/// Every public operation either returns a value or fails with exactly one
/// of these variants. Composite operations propagate the first failure of any
/// sub-computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// No sample collection was supplied at all.
    #[display("no sample collection was supplied")]
    InvalidInput,
    /// The collection is shorter than the operation requires.
    #[display("not enough data: at least {required} value(s) needed, got {actual}")]
    NotEnoughData { required: usize, actual: usize },
}

/// Result type returned by every engine operation.
pub type StatsResult<T> = Result<T, StatsError>;
