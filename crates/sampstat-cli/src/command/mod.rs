use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use sampstat_engine::{StatsResult, validate};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::util::{self, Output};

use self::{fences::FencesArg, sort::SortArg, stat::StatArg, summary::SummaryArg};

mod fences;
mod sort;
mod stat;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
    /// What to compute (defaults to a summary of stdin)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print every statistic as one report
    Summary(#[clap(flatten)] SummaryArg),
    /// Compute a single statistic
    Stat(#[clap(flatten)] StatArg),
    /// Print the samples in sorted order
    Sort(#[clap(flatten)] SortArg),
    /// Compute 1.5 IQR outlier fences and list the outliers
    Fences(#[clap(flatten)] FencesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);

    match args.mode.unwrap_or(Mode::Summary(SummaryArg::stdin())) {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Stat(arg) => stat::run(&arg)?,
        Mode::Sort(arg) => sort::run(&arg)?,
        Mode::Fences(arg) => fences::run(&arg)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "sampstat=debug"
    } else {
        "sampstat=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Where the sample collection comes from
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InputArg {
    /// Sample values (commas or spaces separate values)
    #[arg(
        allow_negative_numbers = true,
        value_delimiter = ',',
        value_parser = util::parse_sample
    )]
    values: Vec<f64>,
    /// Read samples from a file (`-` for stdin)
    #[arg(long, short, conflicts_with = "values")]
    input: Option<PathBuf>,
}

impl InputArg {
    /// Loads the samples.
    ///
    /// Fails with [`StatsError::InvalidInput`](sampstat_engine::StatsError::InvalidInput)
    /// if no input source was given at all.
    pub(crate) fn load(&self) -> anyhow::Result<Vec<f64>> {
        let samples = match (&self.input, self.values.is_empty()) {
            (Some(path), _) => {
                tracing::debug!(path = %path.display(), "reading samples");
                Some(util::read_samples_file(path)?)
            }
            (None, false) => Some(self.values.clone()),
            (None, true) => None,
        };
        validate(samples.as_deref(), 0)?;
        let samples = samples.unwrap_or_default();
        tracing::debug!(count = samples.len(), "loaded samples");
        Ok(samples)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub(crate) enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct OutputArg {
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: Format,
    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl OutputArg {
    pub(crate) fn emit<T>(&self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize + std::fmt::Display,
    {
        let mut output = Output::from_output_path(self.output.clone())?;
        tracing::debug!(format = %self.format, output = %output.display_path(), "writing result");
        match self.format {
            Format::Text => output.write_text(value),
            Format::Json => output.write_json(value),
        }
    }
}

/// Runs an engine operation over the loaded samples.
///
/// Engine failures are logged and then propagated unchanged.
pub(crate) fn compute<T, F>(operation: &str, samples: &mut [f64], f: F) -> anyhow::Result<T>
where
    F: FnOnce(&mut [f64]) -> StatsResult<T>,
{
    match f(samples) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::debug!(operation, %err, "statistics engine rejected input");
            Err(err.into())
        }
    }
}
