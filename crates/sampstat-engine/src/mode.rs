use std::fmt;

use serde::Serialize;

use crate::{
    StatsResult,
    ordering::sort_ascending,
    validation::{MIN_SINGLE_PASS, ensure_len},
};

/// The most frequent value(s) of a collection and their shared count.
///
/// `values` is in ascending order and never empty. When every value in the
/// collection is distinct, every value is a mode with `count == 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode {
    /// All values whose occurrence count equals `count`.
    pub values: Vec<f64>,
    /// Occurrence count shared by every mode value.
    pub count: usize,
}

impl Mode {
    /// Returns `true` if more than one value ties for the highest count.
    #[must_use]
    pub fn is_multimodal(&self) -> bool {
        self.values.len() > 1
    }

    /// Encodes the result as the mode values followed by the count.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampstat_engine::mode;
    ///
    /// let m = mode(&mut [3.0, 1.0, 3.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(m.to_sequence(), vec![1.0, 3.0, 2.0]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_sequence(&self) -> Vec<f64> {
        let mut seq = Vec::with_capacity(self.values.len() + 1);
        seq.extend_from_slice(&self.values);
        seq.push(self.count as f64);
        seq
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "; quantity: {}", self.count)
    }
}

/// Finds the mode(s) of `data`, sorting it in place first.
///
/// The sorted slice is scanned once as runs of equal values. A run longer
/// than the best so far replaces all candidates; a run of equal length is
/// added as another candidate.
///
/// # Examples
///
/// ```
/// use sampstat_engine::mode;
///
/// let m = mode(&mut [2.0, 7.0, 2.0, 5.0]).unwrap();
/// assert_eq!(m.values, vec![2.0]);
/// assert_eq!(m.count, 2);
/// ```
#[expect(clippy::float_cmp)]
pub fn mode(data: &mut [f64]) -> StatsResult<Mode> {
    ensure_len(data, MIN_SINGLE_PASS)?;
    let sorted = sort_ascending(data);

    let mut max_count = 1;
    let mut values = vec![];
    for run in sorted.chunk_by(|&a, &b| a == b) {
        let count = run.len();
        if count == max_count {
            values.push(run[0]);
        } else if count > max_count {
            max_count = count;
            values.clear();
            values.push(run[0]);
        }
    }

    Ok(Mode {
        values,
        count: max_count,
    })
}
