pub mod floating_period;
pub mod schedule;

use clap::Args;
use tiered_mortgage_core::mortgage::request::PeriodUnit;

/// Term and fixed-period flags shared by the loan commands.
///
/// Periods are whole years unless `--term-months` is given, in which case
/// fixed periods are read from `--fixed-months` instead.
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Total loan term in years
    #[arg(long, conflicts_with = "term_months")]
    pub term_years: Option<u32>,

    /// Total loan term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Fixed-rate period in years; repeat (or comma-separate) per tier
    #[arg(long, value_delimiter = ',', conflicts_with = "fixed_months")]
    pub fixed_years: Vec<u32>,

    /// Fixed-rate period in months; repeat (or comma-separate) per tier
    #[arg(long, value_delimiter = ',')]
    pub fixed_months: Vec<u32>,
}

impl PeriodArgs {
    /// Resolve to (unit, total term, fixed periods) in a single unit.
    pub fn resolve(&self) -> Result<(PeriodUnit, u32, Vec<u32>), Box<dyn std::error::Error>> {
        match (self.term_years, self.term_months) {
            (Some(years), None) => {
                if !self.fixed_months.is_empty() {
                    return Err("--fixed-months requires --term-months; use --fixed-years".into());
                }
                Ok((PeriodUnit::Years, years, self.fixed_years.clone()))
            }
            (None, Some(months)) => {
                if !self.fixed_years.is_empty() {
                    return Err("--fixed-years requires --term-years; use --fixed-months".into());
                }
                Ok((PeriodUnit::Months, months, self.fixed_months.clone()))
            }
            _ => Err("one of --term-years or --term-months is required".into()),
        }
    }
}
