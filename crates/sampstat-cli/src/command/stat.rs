use std::fmt;

use sampstat_engine::{self as engine, Mode, StatsResult};
use serde::Serialize;

use super::{InputArg, OutputArg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Statistic {
    Min,
    Max,
    Mean,
    Median,
    Mode,
    FirstQuartile,
    ThirdQuartile,
    Iqr,
    ThreeOverTwoIqr,
    Variance,
    StdDev,
}

impl Statistic {
    fn name(self) -> &'static str {
        match self {
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Mode => "mode",
            Statistic::FirstQuartile => "first_quartile",
            Statistic::ThirdQuartile => "third_quartile",
            Statistic::Iqr => "iqr",
            Statistic::ThreeOverTwoIqr => "three_over_two_iqr",
            Statistic::Variance => "variance",
            Statistic::StdDev => "std_dev",
        }
    }

    fn compute(self, samples: &mut [f64]) -> StatsResult<StatValue> {
        let value = match self {
            Statistic::Min => engine::min(samples)?,
            Statistic::Max => engine::max(samples)?,
            Statistic::Mean => engine::mean(samples)?,
            Statistic::Median => engine::median(samples)?,
            Statistic::Mode => return Ok(StatValue::Mode(engine::mode(samples)?)),
            Statistic::FirstQuartile => engine::first_quartile(samples)?,
            Statistic::ThirdQuartile => engine::third_quartile(samples)?,
            Statistic::Iqr => engine::iqr(samples)?,
            Statistic::ThreeOverTwoIqr => engine::three_over_two_iqr(samples)?,
            Statistic::Variance => engine::variance(samples)?,
            Statistic::StdDev => engine::standard_deviation(samples)?,
        };
        Ok(StatValue::Scalar(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum StatValue {
    Scalar(f64),
    Mode(Mode),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Scalar(value) => write!(f, "{value}"),
            StatValue::Mode(mode) => write!(f, "{mode}"),
        }
    }
}

/// A named statistic; text output shows only the value
#[derive(Debug, Serialize)]
struct StatReport {
    statistic: &'static str,
    value: StatValue,
}

impl fmt::Display for StatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StatArg {
    /// Statistic to compute
    #[arg(value_enum)]
    statistic: Statistic,
    #[clap(flatten)]
    pub(super) input: InputArg,
    #[clap(flatten)]
    pub(super) output: OutputArg,
}

pub(crate) fn run(arg: &StatArg) -> anyhow::Result<()> {
    let StatArg {
        statistic,
        input,
        output,
    } = arg;

    let mut samples = input.load()?;
    let value = super::compute(statistic.name(), &mut samples, |samples| {
        statistic.compute(samples)
    })?;
    tracing::info!(statistic = statistic.name(), "computed statistic");

    output.emit(&StatReport {
        statistic: statistic.name(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use sampstat_engine::StatsError;

    use super::*;

    const FIXTURE: [f64; 13] = [
        5.5, 6.5, 8.0, 9.0, 10.0, 9.4, 8.6, 9.5, 7.5, 7.6, 10.4, 10.5, 8.5,
    ];

    #[test]
    fn test_compute_scalar() {
        let mut samples = FIXTURE;
        assert_eq!(
            Statistic::Median.compute(&mut samples),
            Ok(StatValue::Scalar(8.6))
        );
        let mut samples = [4.5, -1.0, 12.0];
        assert_eq!(
            Statistic::Min.compute(&mut samples),
            Ok(StatValue::Scalar(-1.0))
        );
    }

    #[test]
    fn test_compute_mode() {
        let mut samples = [1.0, 2.0, 2.0, 3.0];
        let value = Statistic::Mode.compute(&mut samples).unwrap();
        assert_eq!(value.to_string(), "2; quantity: 2");
    }

    #[test]
    fn test_compute_not_enough_data() {
        let mut samples = [5.0];
        assert_eq!(
            Statistic::FirstQuartile.compute(&mut samples),
            Err(StatsError::NotEnoughData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_report_json() {
        let report = StatReport {
            statistic: Statistic::ThirdQuartile.name(),
            value: StatValue::Scalar(2.5),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "statistic": "third_quartile", "value": 2.5 })
        );
        assert_eq!(report.to_string(), "2.5");
    }
}
