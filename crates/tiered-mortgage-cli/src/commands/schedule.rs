use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use tiered_mortgage_core::mortgage::request::{LoanInput, LoanRequest};
use tiered_mortgage_core::mortgage::schedule;

use super::PeriodArgs;
use crate::input;

/// Arguments for the tiered schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Asset price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment as a percentage of price
    #[arg(long, alias = "dp", default_value = "0")]
    pub down_payment: Decimal,

    #[command(flatten)]
    pub periods: PeriodArgs,

    /// Fixed annual rate in percent; repeat (or comma-separate) per tier
    #[arg(long, value_delimiter = ',')]
    pub fixed_rate: Vec<Decimal>,

    /// Floating annual rate in percent, applied after the fixed tiers
    #[arg(long)]
    pub float_rate: Option<Decimal>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan: LoanInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if args.price.is_some() {
        LoanInput::Request(request_from_flags(&args)?)
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        return Err("--input <file>, --price with term flags, or stdin required for a schedule".into());
    };

    let config = loan.into_config()?;
    let result = schedule::compute_schedule(&config)?;
    Ok(serde_json::to_value(result)?)
}

fn request_from_flags(args: &ScheduleArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let price = args.price.ok_or("--price is required")?;
    let (period_unit, total_term, fixed_periods) = args.periods.resolve()?;

    Ok(LoanRequest {
        price,
        down_payment_pct: args.down_payment,
        total_term,
        period_unit,
        fixed_rates_pct: args.fixed_rate.clone(),
        fixed_periods,
        floating_rate_pct: args.float_rate,
    })
}
