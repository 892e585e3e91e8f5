use std::fmt;

use sampstat_engine::{sort_ascending, sort_descending};
use serde::Serialize;

use super::{InputArg, OutputArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SortArg {
    /// Sort from largest to smallest
    #[arg(long, short)]
    descending: bool,
    #[clap(flatten)]
    input: InputArg,
    #[clap(flatten)]
    output: OutputArg,
}

/// Sorted samples, one value per line in text form
#[derive(Debug, Serialize)]
#[serde(transparent)]
struct Sorted(Vec<f64>);

impl fmt::Display for Sorted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

pub(crate) fn run(arg: &SortArg) -> anyhow::Result<()> {
    let SortArg {
        descending,
        input,
        output,
    } = arg;

    let mut samples = input.load()?;
    if *descending {
        sort_descending(&mut samples);
    } else {
        sort_ascending(&mut samples);
    }
    tracing::info!(count = samples.len(), descending, "sorted samples");

    output.emit(&Sorted(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_display() {
        assert_eq!(Sorted(vec![1.0, 2.5, 3.0]).to_string(), "1\n2.5\n3");
        assert_eq!(Sorted(vec![]).to_string(), "");
    }

    #[test]
    fn test_sorted_json() {
        let json = serde_json::to_string(&Sorted(vec![1.0, 2.5])).unwrap();
        assert_eq!(json, "[1.0,2.5]");
    }
}
