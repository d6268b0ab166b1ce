use clap::Args;
use serde_json::Value;

use tiered_mortgage_core::mortgage::request::{self, FloatingPeriodInput};

use super::PeriodArgs;
use crate::input;

/// Arguments for floating period derivation
#[derive(Args)]
pub struct FloatingPeriodArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub periods: PeriodArgs,
}

pub fn run_floating_period(args: FloatingPeriodArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fp_input: FloatingPeriodInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if args.periods.term_years.is_some() || args.periods.term_months.is_some() {
        let (period_unit, total_term, fixed_periods) = args.periods.resolve()?;
        FloatingPeriodInput {
            total_term,
            period_unit,
            fixed_periods,
        }
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        return Err("--input <file>, --term-years/--term-months, or stdin required".into());
    };

    let result = request::compute_floating_period(&fp_input)?;
    Ok(serde_json::to_value(result)?)
}
