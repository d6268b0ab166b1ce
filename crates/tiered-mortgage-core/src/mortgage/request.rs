//! Form-level loan requests.
//!
//! A request carries periods the way a user enters them (usually years),
//! with fixed rates and fixed periods as two separate lists. Blank rows
//! arrive as zeros and are dropped before the lists are paired.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::time::Instant;

use super::schedule::{floating_tail_months, FloatingTail, LoanConfig, RateTier};
use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::MortgageResult;

const MONTHS_PER_YEAR: Months = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnit {
    #[default]
    Years,
    Months,
}

impl PeriodUnit {
    pub fn to_months(self, periods: u32, field: &str) -> MortgageResult<Months> {
        match self {
            PeriodUnit::Months => Ok(periods),
            PeriodUnit::Years => periods.checked_mul(MONTHS_PER_YEAR).ok_or_else(|| {
                MortgageError::invalid(field, format!("{periods} years overflows a month count"))
            }),
        }
    }
}

/// A loan as entered on a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub price: Money,
    /// Down payment percentage, 0–100.
    pub down_payment_pct: Rate,
    /// Total term in `period_unit`.
    pub total_term: u32,
    #[serde(default)]
    pub period_unit: PeriodUnit,
    /// Annual fixed rates in percent; zero entries are blank rows.
    #[serde(default)]
    pub fixed_rates_pct: Vec<Rate>,
    /// Fixed periods in `period_unit`; zero entries are blank rows.
    #[serde(default)]
    pub fixed_periods: Vec<u32>,
    /// Required only when the fixed periods leave part of the term uncovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_rate_pct: Option<Rate>,
}

impl LoanRequest {
    /// Pair rates with periods, convert to months and derive the floating tail.
    pub fn into_config(self) -> MortgageResult<LoanConfig> {
        let total_term_months = self.period_unit.to_months(self.total_term, "total_term")?;

        let rates: Vec<Rate> = self
            .fixed_rates_pct
            .into_iter()
            .filter(|r| !r.is_zero())
            .collect();
        let periods = self
            .fixed_periods
            .into_iter()
            .filter(|&p| p != 0)
            .map(|p| self.period_unit.to_months(p, "fixed_periods"))
            .collect::<MortgageResult<Vec<Months>>>()?;

        if rates.len() != periods.len() {
            return Err(MortgageError::invalid(
                "fixed_rates_pct",
                format!(
                    "mismatched count of fixed rates ({}) and fixed periods ({})",
                    rates.len(),
                    periods.len()
                ),
            ));
        }

        let fixed_total: u64 = periods.iter().map(|&m| u64::from(m)).sum();
        if fixed_total > u64::from(total_term_months) {
            return Err(MortgageError::Configuration(format!(
                "fixed periods cover {fixed_total} months but the total term is {total_term_months} months"
            )));
        }
        let floating_months = floating_tail_months(total_term_months, &periods);

        let floating_tail = if floating_months > 0 {
            let rate = self.floating_rate_pct.ok_or_else(|| {
                MortgageError::invalid(
                    "floating_rate_pct",
                    format!("required when {floating_months} months follow the fixed periods"),
                )
            })?;
            Some(FloatingTail {
                annual_rate_pct: rate,
                duration_months: Some(floating_months),
            })
        } else {
            None
        };

        let fixed_tiers = rates
            .into_iter()
            .zip(periods)
            .map(|(annual_rate_pct, duration_months)| RateTier {
                annual_rate_pct,
                duration_months,
            })
            .collect();

        Ok(LoanConfig {
            price: self.price,
            down_payment_pct: self.down_payment_pct,
            total_term_months,
            fixed_tiers,
            floating_tail,
        })
    }
}

/// Either an engine-level config (months, paired tiers) or a form request.
///
/// A document carrying `total_term_months` is read as a [`LoanConfig`],
/// anything else as a [`LoanRequest`], so field errors name the real field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LoanInput {
    Config(LoanConfig),
    Request(LoanRequest),
}

impl<'de> Deserialize<'de> for LoanInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.get("total_term_months").is_some() {
            serde_json::from_value(value)
                .map(LoanInput::Config)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(LoanInput::Request)
                .map_err(de::Error::custom)
        }
    }
}

impl LoanInput {
    pub fn into_config(self) -> MortgageResult<LoanConfig> {
        match self {
            LoanInput::Config(config) => Ok(config),
            LoanInput::Request(request) => request.into_config(),
        }
    }
}

/// Input for deriving the floating period from a term and fixed periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingPeriodInput {
    pub total_term: u32,
    #[serde(default)]
    pub period_unit: PeriodUnit,
    #[serde(default)]
    pub fixed_periods: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingPeriodOutput {
    pub total_term_months: Months,
    pub fixed_term_months: Months,
    /// Clamped at zero when the fixed periods overrun the term.
    pub floating_term_months: Months,
    /// Whole years of floating term, when it divides evenly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating_term_years: Option<u32>,
    pub fixed_exceeds_term: bool,
}

/// Months left for the floating rate after the fixed periods.
pub fn derive_floating_period(input: &FloatingPeriodInput) -> MortgageResult<FloatingPeriodOutput> {
    let total_term_months = input.period_unit.to_months(input.total_term, "total_term")?;
    let fixed = input
        .fixed_periods
        .iter()
        .map(|&p| input.period_unit.to_months(p, "fixed_periods"))
        .collect::<MortgageResult<Vec<Months>>>()?;

    let fixed_total: u64 = fixed.iter().map(|&m| u64::from(m)).sum();
    let fixed_term_months = Months::try_from(fixed_total)
        .map_err(|_| MortgageError::invalid("fixed_periods", "Fixed periods overflow a month count"))?;
    let floating_term_months = floating_tail_months(total_term_months, &fixed);

    Ok(FloatingPeriodOutput {
        total_term_months,
        fixed_term_months,
        floating_term_months,
        floating_term_years: (floating_term_months % MONTHS_PER_YEAR == 0)
            .then_some(floating_term_months / MONTHS_PER_YEAR),
        fixed_exceeds_term: fixed_term_months > total_term_months,
    })
}

/// Derive the floating period and wrap it in the standard output envelope.
pub fn compute_floating_period(
    input: &FloatingPeriodInput,
) -> MortgageResult<ComputationOutput<FloatingPeriodOutput>> {
    let start = Instant::now();
    let out = derive_floating_period(input)?;

    let mut warnings = Vec::new();
    if out.fixed_exceeds_term {
        warnings.push(format!(
            "Fixed periods exceed the total term by {} months; a schedule would be rejected",
            out.fixed_term_months - out.total_term_months
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Floating period = total term - sum of fixed periods, clamped at zero",
        input,
        warnings,
        elapsed,
        out,
    ))
}
