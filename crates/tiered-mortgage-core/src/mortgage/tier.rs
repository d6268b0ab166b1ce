//! Level-payment amortization of a single rate tier.
//!
//! The payment for a tier is sized as though the tier's rate held for the
//! whole remaining life of the loan, then applied only for the tier's own
//! months. The next tier re-sizes from whatever balance is left.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MortgageError;
use crate::time_value::{level_payment, monthly_rate};
use crate::types::{Money, Months, Rate};
use crate::MortgageResult;

/// One simulated month within a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationStep {
    /// 1-based position within the tier.
    pub month_index: Months,
    /// 1-based position within the whole loan.
    pub loan_month: Months,
    pub payment: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
}

/// Raw output of amortizing one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierAmortization {
    pub steps: Vec<AmortizationStep>,
    /// Balance left after the simulated months. Never rounded.
    pub principal_after: Money,
}

/// Amortize `principal` at `annual_rate_pct` for `months_to_simulate` months,
/// sizing the level payment over `remaining_term_months`.
///
/// Step `loan_month` values equal `month_index`; callers placing the tier
/// later in a loan shift them with [`TierAmortization::starting_at`].
pub fn amortize_tier(
    principal: Money,
    annual_rate_pct: Rate,
    months_to_simulate: Months,
    remaining_term_months: Months,
) -> MortgageResult<TierAmortization> {
    if months_to_simulate == 0 {
        return Ok(TierAmortization {
            steps: Vec::new(),
            principal_after: principal,
        });
    }

    if annual_rate_pct < Decimal::ZERO {
        return Err(MortgageError::invalid(
            "annual_rate_pct",
            "Rate must be non-negative",
        ));
    }
    if months_to_simulate > remaining_term_months {
        return Err(MortgageError::invalid(
            "months_to_simulate",
            format!(
                "Cannot simulate {months_to_simulate} months of a {remaining_term_months}-month remaining term"
            ),
        ));
    }

    let rate = monthly_rate(annual_rate_pct);
    let payment = level_payment(principal, rate, remaining_term_months)?;

    let mut balance = principal;
    let mut steps = Vec::with_capacity(months_to_simulate as usize);

    for month_index in 1..=months_to_simulate {
        let interest_portion = balance.checked_mul(rate).ok_or_else(|| {
            MortgageError::overflow(format!("interest for tier month {month_index}"))
        })?;
        let principal_portion = payment.checked_sub(interest_portion).ok_or_else(|| {
            MortgageError::overflow(format!("principal portion for tier month {month_index}"))
        })?;

        steps.push(AmortizationStep {
            month_index,
            loan_month: month_index,
            payment,
            interest_portion,
            principal_portion,
        });

        balance = balance.checked_sub(principal_portion).ok_or_else(|| {
            MortgageError::overflow(format!("balance after tier month {month_index}"))
        })?;
    }

    debug!(
        target: "mortgage.tier",
        %annual_rate_pct,
        months = months_to_simulate,
        remaining_term_months,
        %payment,
        principal_before = %principal,
        principal_after = %balance,
        "Tier amortized"
    );

    Ok(TierAmortization {
        steps,
        principal_after: balance,
    })
}

impl TierAmortization {
    /// Re-number `loan_month` so the tier begins at `start_month` of the loan.
    pub fn starting_at(mut self, start_month: Months) -> Self {
        for step in &mut self.steps {
            step.loan_month = start_month + step.month_index - 1;
        }
        self
    }
}
