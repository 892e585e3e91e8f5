use std::path::PathBuf;

use sampstat_engine::summarize;

use super::{InputArg, OutputArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub(super) input: InputArg,
    #[clap(flatten)]
    pub(super) output: OutputArg,
}

impl SummaryArg {
    /// Summary of samples read from stdin, used when no subcommand is given.
    pub(crate) fn stdin() -> Self {
        Self {
            input: InputArg {
                values: vec![],
                input: Some(PathBuf::from("-")),
            },
            output: OutputArg::default(),
        }
    }
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let SummaryArg { input, output } = arg;

    let mut samples = input.load()?;
    let summary = super::compute("summary", &mut samples, summarize)?;
    tracing::info!(count = summary.count, "computed summary");

    output.emit(&summary)
}
