//! Tiered fixed/floating mortgage schedule.
//!
//! Drives [`amortize_tier`] once per fixed tier and once for the floating
//! tail, threading the balance and the remaining term between them. Each
//! tier carries its own sums; grand totals are a fold over the tiers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

use super::tier::{amortize_tier, AmortizationStep, TierAmortization};
use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PERCENT: Decimal = dec!(100);
/// Ending balances smaller than this count as fully repaid.
const BALANCE_TOLERANCE: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// A fixed-rate span of the loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// Annual rate as a percentage (7 = 7% p.a.).
    pub annual_rate_pct: Rate,
    pub duration_months: Months,
}

/// Rate applied after all fixed tiers, to the end of the term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingTail {
    /// Annual rate as a percentage.
    pub annual_rate_pct: Rate,
    /// Must equal the term left after the fixed tiers. Omit to derive it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<Months>,
}

/// Input for a tiered mortgage schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Price of the financed asset.
    pub price: Money,
    /// Down payment as a percentage of price, 0–100.
    pub down_payment_pct: Rate,
    pub total_term_months: Months,
    /// Applied in order from loan origination.
    #[serde(default)]
    pub fixed_tiers: Vec<RateTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_tail: Option<FloatingTail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    Fixed,
    Floating,
}

/// Result of one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierResult {
    pub kind: TierKind,
    pub annual_rate_pct: Rate,
    pub duration_months: Months,
    /// 1-based loan month of the tier's first step.
    pub start_month: Months,
    /// Level payment for this tier.
    pub monthly_payment: Money,
    pub principal_before: Money,
    pub principal_after: Money,
    pub sum_payment: Money,
    pub sum_interest: Money,
    pub sum_principal: Money,
    pub steps: Vec<AmortizationStep>,
}

/// Full schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub price: Money,
    pub down_payment_amount: Money,
    /// Financed amount, price net of down payment.
    pub principal: Money,
    pub total_term_months: Months,
    /// Balance entering the floating tail. `None` when no tail ran.
    pub principal_before_float: Option<Money>,
    pub total_payment: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    /// Balance after the last tier.
    pub ending_balance: Money,
    /// Fixed tiers in order, then the floating tail.
    pub tiers: Vec<TierResult>,
}

impl TierResult {
    fn from_amortization(
        kind: TierKind,
        annual_rate_pct: Rate,
        start_month: Months,
        principal_before: Money,
        amortization: TierAmortization,
    ) -> MortgageResult<Self> {
        let TierAmortization {
            steps,
            principal_after,
        } = amortization;

        let context = format!("{kind:?} tier starting month {start_month}");
        let sum_payment = checked_sum(steps.iter().map(|s| s.payment), &context)?;
        let sum_interest = checked_sum(steps.iter().map(|s| s.interest_portion), &context)?;
        let sum_principal = checked_sum(steps.iter().map(|s| s.principal_portion), &context)?;

        Ok(TierResult {
            kind,
            annual_rate_pct,
            duration_months: steps.len() as Months,
            start_month,
            monthly_payment: steps.first().map(|s| s.payment).unwrap_or_default(),
            principal_before,
            principal_after,
            sum_payment,
            sum_interest,
            sum_principal,
            steps,
        })
    }
}

/// Sum money values, reporting overflow instead of panicking.
fn checked_sum(mut values: impl Iterator<Item = Money>, context: &str) -> MortgageResult<Money> {
    values.try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v)
            .ok_or_else(|| MortgageError::overflow(format!("sum over {context}")))
    })
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Financed principal: price net of the down payment.
pub fn financed_principal(price: Money, down_payment_pct: Rate) -> Money {
    price * (Decimal::ONE - down_payment_pct / PERCENT)
}

/// Down payment amount for a price and percentage.
pub fn down_payment_amount(price: Money, down_payment_pct: Rate) -> Money {
    price * (down_payment_pct / PERCENT)
}

/// Months left for the floating tail after the fixed periods, clamped at zero.
pub fn floating_tail_months(total_term_months: Months, fixed_durations: &[Months]) -> Months {
    let fixed: u64 = fixed_durations.iter().map(|&m| u64::from(m)).sum();
    u64::from(total_term_months).saturating_sub(fixed) as Months
}

/// Build the month-by-month schedule for a tiered loan.
///
/// The configuration is fully validated before any tier is amortized.
pub fn build_schedule(config: &LoanConfig) -> MortgageResult<ScheduleResult> {
    validate_loan_config(config)?;

    let principal = financed_principal(config.price, config.down_payment_pct);
    let mut balance = principal;
    let mut remaining = config.total_term_months;
    let mut next_month: Months = 1;
    let mut tiers: Vec<TierResult> = Vec::with_capacity(config.fixed_tiers.len() + 1);

    for tier in &config.fixed_tiers {
        let amortization = amortize_tier(
            balance,
            tier.annual_rate_pct,
            tier.duration_months,
            remaining,
        )?
        .starting_at(next_month);
        let result = TierResult::from_amortization(
            TierKind::Fixed,
            tier.annual_rate_pct,
            next_month,
            balance,
            amortization,
        )?;

        balance = result.principal_after;
        remaining -= tier.duration_months;
        next_month += tier.duration_months;
        tiers.push(result);
    }

    let mut principal_before_float = None;
    if let Some(tail) = &config.floating_tail {
        if remaining > 0 {
            principal_before_float = Some(balance);
            let amortization =
                amortize_tier(balance, tail.annual_rate_pct, remaining, remaining)?
                    .starting_at(next_month);
            let result = TierResult::from_amortization(
                TierKind::Floating,
                tail.annual_rate_pct,
                next_month,
                balance,
                amortization,
            )?;
            balance = result.principal_after;
            tiers.push(result);
        }
    }

    let total_payment = checked_sum(tiers.iter().map(|t| t.sum_payment), "schedule totals")?;
    let total_interest = checked_sum(tiers.iter().map(|t| t.sum_interest), "schedule totals")?;
    let total_principal = checked_sum(tiers.iter().map(|t| t.sum_principal), "schedule totals")?;

    info!(
        target: "mortgage.schedule",
        tiers = tiers.len(),
        %principal,
        %total_payment,
        %total_interest,
        ending_balance = %balance,
        "Schedule built"
    );

    Ok(ScheduleResult {
        price: config.price,
        down_payment_amount: down_payment_amount(config.price, config.down_payment_pct),
        principal,
        total_term_months: config.total_term_months,
        principal_before_float,
        total_payment,
        total_interest,
        total_principal,
        ending_balance: balance,
        tiers,
    })
}

/// Build the schedule and wrap it in the standard output envelope.
pub fn compute_schedule(config: &LoanConfig) -> MortgageResult<ComputationOutput<ScheduleResult>> {
    let start = Instant::now();
    let schedule = build_schedule(config)?;
    let warnings = schedule_warnings(config, &schedule);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Tiered Mortgage Schedule — level payment re-sized per tier over the remaining term",
        &serde_json::json!({
            "price": config.price.to_string(),
            "down_payment_pct": config.down_payment_pct.to_string(),
            "total_term_months": config.total_term_months,
            "fixed_tiers": config.fixed_tiers.len(),
            "floating_rate_pct": config.floating_tail.as_ref().map(|t| t.annual_rate_pct.to_string()),
            "rate_convention": "annual percentage / 12, monthly compounding",
        }),
        warnings,
        elapsed,
        schedule,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_loan_config(config: &LoanConfig) -> MortgageResult<()> {
    if config.price <= Decimal::ZERO {
        return Err(MortgageError::invalid("price", "Price must be positive"));
    }
    if config.down_payment_pct < Decimal::ZERO || config.down_payment_pct > PERCENT {
        return Err(MortgageError::invalid(
            "down_payment_pct",
            "Down payment must be between 0 and 100 percent",
        ));
    }
    if config.total_term_months == 0 {
        return Err(MortgageError::invalid(
            "total_term_months",
            "Total term must be at least 1 month",
        ));
    }

    for (i, tier) in config.fixed_tiers.iter().enumerate() {
        if tier.annual_rate_pct < Decimal::ZERO {
            return Err(MortgageError::Configuration(format!(
                "fixed tier {} has negative rate {}",
                i + 1,
                tier.annual_rate_pct
            )));
        }
        if tier.duration_months == 0 {
            return Err(MortgageError::Configuration(format!(
                "fixed tier {} has zero duration",
                i + 1
            )));
        }
    }

    let fixed_total: u64 = config
        .fixed_tiers
        .iter()
        .map(|t| u64::from(t.duration_months))
        .sum();
    if fixed_total > u64::from(config.total_term_months) {
        return Err(MortgageError::Configuration(format!(
            "fixed tiers cover {fixed_total} months but the total term is {} months",
            config.total_term_months
        )));
    }

    if let Some(tail) = &config.floating_tail {
        if tail.annual_rate_pct < Decimal::ZERO {
            return Err(MortgageError::Configuration(format!(
                "floating tail has negative rate {}",
                tail.annual_rate_pct
            )));
        }
        let remaining = u64::from(config.total_term_months) - fixed_total;
        if let Some(duration) = tail.duration_months {
            if u64::from(duration) != remaining {
                return Err(MortgageError::Configuration(format!(
                    "floating tail covers {duration} months but {remaining} months remain after the fixed tiers"
                )));
            }
        }
    }

    Ok(())
}

fn schedule_warnings(config: &LoanConfig, schedule: &ScheduleResult) -> Vec<String> {
    let mut warnings = Vec::new();

    for tier in &schedule.tiers {
        if tier.annual_rate_pct.is_zero() {
            warnings.push(format!(
                "{:?} tier starting month {} has a zero rate; repaid straight-line",
                tier.kind, tier.start_month
            ));
        }
    }

    let fixed: Vec<Months> = config.fixed_tiers.iter().map(|t| t.duration_months).collect();
    let uncovered = floating_tail_months(config.total_term_months, &fixed);
    match &config.floating_tail {
        Some(_) if uncovered == 0 => {
            warnings.push("Floating tail configured but fixed tiers cover the full term".into());
        }
        None if uncovered > 0 => {
            warnings.push(format!(
                "{uncovered} months of the term are not covered by any tier and no floating rate was given"
            ));
        }
        _ => {}
    }

    if schedule.ending_balance.abs() > BALANCE_TOLERANCE {
        warnings.push(format!(
            "Loan not fully repaid: ending balance {}",
            schedule.ending_balance.round_dp(2)
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TOLERANCE: Decimal = dec!(0.000001);

    /// Helper: 1bn loan, 10 years fixed at 7%, one year floating at 11%.
    fn fixed_then_floating() -> LoanConfig {
        LoanConfig {
            price: dec!(1_000_000_000),
            down_payment_pct: Decimal::ZERO,
            total_term_months: 132,
            fixed_tiers: vec![RateTier {
                annual_rate_pct: dec!(7),
                duration_months: 120,
            }],
            floating_tail: Some(FloatingTail {
                annual_rate_pct: dec!(11),
                duration_months: Some(12),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Fixed tier then floating tail
    // -----------------------------------------------------------------------
    #[test]
    fn test_fixed_then_floating_tiers() {
        let out = build_schedule(&fixed_then_floating()).unwrap();

        assert_eq!(out.tiers.len(), 2);
        let fixed = &out.tiers[0];
        let float = &out.tiers[1];

        assert_eq!(fixed.kind, TierKind::Fixed);
        assert_eq!(fixed.steps.len(), 120);
        assert!((fixed.monthly_payment - dec!(10_884_100.9358)).abs() < dec!(0.001));

        assert_eq!(float.kind, TierKind::Floating);
        assert_eq!(float.steps.len(), 12);
        assert_eq!(float.start_month, 121);
        assert!((float.monthly_payment - dec!(11_117_428.2589)).abs() < dec!(0.001));

        assert_eq!(out.principal_before_float, Some(fixed.principal_after));
        assert_eq!(float.principal_before, fixed.principal_after);
        assert!(out.ending_balance.abs() < TOLERANCE);
    }

    #[test]
    fn test_totals_fold_tier_sums() {
        let out = build_schedule(&fixed_then_floating()).unwrap();
        let fixed = &out.tiers[0];
        let float = &out.tiers[1];

        assert_eq!(out.total_payment, fixed.sum_payment + float.sum_payment);
        assert_eq!(out.total_interest, fixed.sum_interest + float.sum_interest);
        assert_eq!(out.total_principal, fixed.sum_principal + float.sum_principal);
        assert!((out.total_payment - dec!(1_439_501_251.4043)).abs() < dec!(0.001));
        assert!((out.total_principal - out.principal).abs() < TOLERANCE);
    }

    #[test]
    fn test_loan_months_are_contiguous() {
        let out = build_schedule(&fixed_then_floating()).unwrap();
        let months: Vec<Months> = out
            .tiers
            .iter()
            .flat_map(|t| t.steps.iter().map(|s| s.loan_month))
            .collect();
        let expected: Vec<Months> = (1..=132).collect();
        assert_eq!(months, expected);
    }

    // -----------------------------------------------------------------------
    // 2. Floating only / fixed only
    // -----------------------------------------------------------------------
    #[test]
    fn test_floating_only_covers_full_term() {
        let config = LoanConfig {
            price: dec!(500_000_000),
            down_payment_pct: dec!(20),
            total_term_months: 36,
            fixed_tiers: vec![],
            floating_tail: Some(FloatingTail {
                annual_rate_pct: dec!(10),
                duration_months: None,
            }),
        };
        let out = build_schedule(&config).unwrap();

        assert_eq!(out.principal, dec!(400_000_000));
        assert_eq!(out.down_payment_amount, dec!(100_000_000));
        assert_eq!(out.tiers.len(), 1);
        assert_eq!(out.tiers[0].steps.len(), 36);
        assert_eq!(out.principal_before_float, Some(dec!(400_000_000)));
        assert!((out.tiers[0].monthly_payment - dec!(12_906_874.8775)).abs() < dec!(0.001));
    }

    /// Helper: one fixed tier covering the whole 132-month term.
    fn fixed_fills_term(floating_tail: Option<FloatingTail>) -> LoanConfig {
        LoanConfig {
            fixed_tiers: vec![RateTier {
                annual_rate_pct: dec!(7),
                duration_months: 132,
            }],
            floating_tail,
            ..fixed_then_floating()
        }
    }

    #[test]
    fn test_fixed_tiers_fill_term_zero_month_tail_is_noop() {
        let config = fixed_fills_term(Some(FloatingTail {
            annual_rate_pct: dec!(11),
            duration_months: Some(0),
        }));
        let out = build_schedule(&config).unwrap();

        assert_eq!(out.tiers.len(), 1);
        assert!(out.tiers.iter().all(|t| t.kind == TierKind::Fixed));
        assert_eq!(out.principal_before_float, None);
        assert!(out.ending_balance.abs() < TOLERANCE);
    }

    #[test]
    fn test_fixed_tiers_fill_term_without_tail() {
        let out = build_schedule(&fixed_fills_term(None)).unwrap();

        assert_eq!(out.tiers.len(), 1);
        assert_eq!(out.tiers[0].kind, TierKind::Fixed);
        assert_eq!(out.tiers[0].steps.len(), 132);
        assert_eq!(out.principal_before_float, None);
        assert!(out.ending_balance.abs() < TOLERANCE);
    }

    #[test]
    fn test_compute_schedule_warns_on_unused_tail() {
        let config = fixed_fills_term(Some(FloatingTail {
            annual_rate_pct: dec!(11),
            duration_months: Some(0),
        }));
        let out = compute_schedule(&config).unwrap();
        assert!(out
            .warnings
            .iter()
            .any(|w| w == "Floating tail configured but fixed tiers cover the full term"));
        assert_eq!(out.result.principal_before_float, None);

        let out = compute_schedule(&fixed_fills_term(None)).unwrap();
        assert!(out.warnings.is_empty(), "{:?}", out.warnings);
    }

    #[test]
    fn test_empty_config_is_trivial() {
        let config = LoanConfig {
            price: dec!(1000),
            down_payment_pct: Decimal::ZERO,
            total_term_months: 12,
            fixed_tiers: vec![],
            floating_tail: None,
        };
        let out = build_schedule(&config).unwrap();

        assert!(out.tiers.is_empty());
        assert_eq!(out.total_payment, Decimal::ZERO);
        assert_eq!(out.total_interest, Decimal::ZERO);
        assert_eq!(out.total_principal, Decimal::ZERO);
        assert_eq!(out.ending_balance, dec!(1000));
    }

    #[test]
    fn test_three_tiers_resize_payment_each_boundary() {
        let config = LoanConfig {
            price: dec!(1_000_000_000),
            down_payment_pct: dec!(20),
            total_term_months: 240,
            fixed_tiers: vec![
                RateTier {
                    annual_rate_pct: dec!(5),
                    duration_months: 36,
                },
                RateTier {
                    annual_rate_pct: dec!(8),
                    duration_months: 24,
                },
            ],
            floating_tail: Some(FloatingTail {
                annual_rate_pct: dec!(12),
                duration_months: Some(180),
            }),
        };
        let out = build_schedule(&config).unwrap();
        let payments: Vec<Money> = out.tiers.iter().map(|t| t.monthly_payment).collect();

        assert!((payments[0] - dec!(5_279_645.9137)).abs() < dec!(0.001));
        assert!((payments[1] - dec!(6_508_534.6021)).abs() < dec!(0.001));
        assert!((payments[2] - dec!(8_173_827.5765)).abs() < dec!(0.001));
        assert!((out.tiers[1].principal_after - dec!(681_056_914.8349)).abs() < dec!(0.001));
        assert!(out.ending_balance.abs() < TOLERANCE);
    }

    // -----------------------------------------------------------------------
    // 3. Zero rate
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_rate_tier_straight_line() {
        let config = LoanConfig {
            price: dec!(1200),
            down_payment_pct: Decimal::ZERO,
            total_term_months: 12,
            fixed_tiers: vec![RateTier {
                annual_rate_pct: Decimal::ZERO,
                duration_months: 6,
            }],
            floating_tail: Some(FloatingTail {
                annual_rate_pct: Decimal::ZERO,
                duration_months: Some(6),
            }),
        };
        let out = build_schedule(&config).unwrap();

        for step in out.tiers.iter().flat_map(|t| t.steps.iter()) {
            assert_eq!(step.interest_portion, Decimal::ZERO);
            assert_eq!(step.payment, dec!(100));
            assert_eq!(step.principal_portion, dec!(100));
        }
        assert_eq!(out.ending_balance, Decimal::ZERO);
    }

    // -----------------------------------------------------------------------
    // 4. Configuration errors
    // -----------------------------------------------------------------------
    #[test]
    fn test_fixed_overrun_rejected() {
        let config = LoanConfig {
            total_term_months: 100,
            ..fixed_then_floating()
        };
        let err = build_schedule(&config).unwrap_err();
        match err {
            MortgageError::Configuration(msg) => {
                assert!(msg.contains("120"), "{msg}");
                assert!(msg.contains("100"), "{msg}");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_floating_duration_mismatch_rejected() {
        let mut config = fixed_then_floating();
        config.floating_tail = Some(FloatingTail {
            annual_rate_pct: dec!(11),
            duration_months: Some(24),
        });
        let err = build_schedule(&config).unwrap_err();
        assert!(matches!(err, MortgageError::Configuration(_)));
    }

    #[test]
    fn test_zero_duration_fixed_tier_rejected() {
        let mut config = fixed_then_floating();
        config.fixed_tiers.push(RateTier {
            annual_rate_pct: dec!(8),
            duration_months: 0,
        });
        let err = build_schedule(&config).unwrap_err();
        assert!(matches!(err, MortgageError::Configuration(_)));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut config = fixed_then_floating();
        config.fixed_tiers[0].annual_rate_pct = dec!(-1);
        let err = build_schedule(&config).unwrap_err();
        assert!(matches!(err, MortgageError::Configuration(_)));
    }

    #[test]
    fn test_oversized_price_is_overflow_error() {
        let config = LoanConfig {
            price: dec!(70_000_000_000_000_000_000_000_000_000),
            down_payment_pct: Decimal::ZERO,
            total_term_months: 360,
            fixed_tiers: vec![],
            floating_tail: Some(FloatingTail {
                annual_rate_pct: dec!(12),
                duration_months: None,
            }),
        };
        let err = build_schedule(&config).unwrap_err();
        assert!(matches!(err, MortgageError::Overflow { .. }), "{err:?}");
        assert!(compute_schedule(&config).is_err());
    }

    #[test]
    fn test_oversized_floating_rate_is_overflow_error() {
        let mut config = fixed_then_floating();
        config.floating_tail = Some(FloatingTail {
            annual_rate_pct: dec!(10_000_000_000_000_000_000_000_000_000),
            duration_months: None,
        });
        let err = build_schedule(&config).unwrap_err();
        assert!(matches!(err, MortgageError::Overflow { .. }), "{err:?}");
    }

    #[test]
    fn test_invalid_price_and_down_payment() {
        let mut config = fixed_then_floating();
        config.price = Decimal::ZERO;
        assert!(matches!(
            build_schedule(&config),
            Err(MortgageError::InvalidInput { ref field, .. }) if field == "price"
        ));

        let mut config = fixed_then_floating();
        config.down_payment_pct = dec!(101);
        assert!(matches!(
            build_schedule(&config),
            Err(MortgageError::InvalidInput { ref field, .. }) if field == "down_payment_pct"
        ));
    }

    // -----------------------------------------------------------------------
    // 5. Helpers and envelope
    // -----------------------------------------------------------------------
    #[test]
    fn test_floating_tail_months_clamps() {
        assert_eq!(floating_tail_months(132, &[120]), 12);
        assert_eq!(floating_tail_months(120, &[60, 60]), 0);
        assert_eq!(floating_tail_months(60, &[120]), 0);
        assert_eq!(floating_tail_months(36, &[]), 36);
    }

    #[test]
    fn test_down_payment_helpers() {
        assert_eq!(down_payment_amount(dec!(800_000), dec!(15)), dec!(120_000));
        assert_eq!(financed_principal(dec!(800_000), dec!(15)), dec!(680_000));
    }

    #[test]
    fn test_compute_schedule_envelope() {
        let out = compute_schedule(&fixed_then_floating()).unwrap();
        assert!(out.warnings.is_empty(), "{:?}", out.warnings);
        assert!(out.methodology.contains("Tiered Mortgage"));
        assert_eq!(out.assumptions["total_term_months"], 132);
        assert_eq!(out.result.tiers.len(), 2);
    }

    #[test]
    fn test_compute_schedule_warns_on_uncovered_term() {
        let config = LoanConfig {
            floating_tail: None,
            ..fixed_then_floating()
        };
        let out = compute_schedule(&config).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("12 months")));
        assert!(out.warnings.iter().any(|w| w.contains("not fully repaid")));
    }

    #[test]
    fn test_compute_schedule_warns_on_zero_rate() {
        let mut config = fixed_then_floating();
        config.fixed_tiers[0].annual_rate_pct = Decimal::ZERO;
        let out = compute_schedule(&config).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("zero rate")));
    }
}
