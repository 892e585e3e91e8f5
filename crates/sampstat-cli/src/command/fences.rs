use std::fmt;

use sampstat_engine::{Fences, fences};
use serde::Serialize;

use super::{InputArg, OutputArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct FencesArg {
    #[clap(flatten)]
    input: InputArg,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct FencesReport {
    #[serde(flatten)]
    fences: Fences,
    outliers: Vec<f64>,
}

impl FencesReport {
    /// Samples must be sorted so outliers come out in ascending order.
    fn new(fences: Fences, sorted_samples: &[f64]) -> Self {
        let outliers = sorted_samples
            .iter()
            .copied()
            .filter(|&value| fences.is_outlier(value))
            .collect();
        Self { fences, outliers }
    }
}

impl fmt::Display for FencesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lower fence: {}", self.fences.lower)?;
        writeln!(f, "Upper fence: {}", self.fences.upper)?;
        write!(f, "Outliers:")?;
        for (i, value) in self.outliers.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{value}")?;
        }
        Ok(())
    }
}

pub(crate) fn run(arg: &FencesArg) -> anyhow::Result<()> {
    let FencesArg { input, output } = arg;

    let mut samples = input.load()?;
    let fences = super::compute("fences", &mut samples, fences)?;
    // `fences` sorted the samples in place.
    let report = FencesReport::new(fences, &samples);
    tracing::info!(outliers = report.outliers.len(), "computed fences");

    output.emit(&report)
}
