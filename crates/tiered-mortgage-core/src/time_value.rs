use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{Money, Months, Rate};
use crate::MortgageResult;

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Convert an annual percentage rate (7 = 7% p.a.) to a monthly decimal rate.
pub fn monthly_rate(annual_rate_pct: Rate) -> Rate {
    annual_rate_pct / PERCENT / MONTHS_PER_YEAR
}

/// base^n via iterative multiplication (avoids powd precision drift).
///
/// Returns `None` when the power no longer fits in a `Decimal`.
pub fn iterative_pow(base: Decimal, n: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

/// (1 + r)^n, or `None` past `Decimal::MAX`.
pub fn compound_factor(rate: Rate, periods: Months) -> Option<Decimal> {
    iterative_pow(Decimal::ONE.checked_add(rate)?, periods)
}

/// Level payment that retires `principal` over `periods` at a periodic `rate`.
///
/// A zero rate degenerates to straight-line repayment, `principal / periods`.
pub fn level_payment(principal: Money, rate: Rate, periods: Months) -> MortgageResult<Money> {
    if periods == 0 {
        return Err(MortgageError::invalid(
            "periods",
            "Number of periods must be > 0",
        ));
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    // Past Decimal::MAX, 1/growth is below the smallest representable step.
    let amortization_factor = match compound_factor(rate, periods) {
        Some(growth) => {
            let discount = Decimal::ONE.checked_div(growth).ok_or_else(|| {
                MortgageError::DivisionByZero {
                    context: format!("growth factor for rate {rate} over {periods} periods"),
                }
            })?;
            Decimal::ONE - discount
        }
        None => Decimal::ONE,
    };

    if amortization_factor.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: format!("amortization factor for rate {rate} over {periods} periods"),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|initial_interest| initial_interest.checked_div(amortization_factor))
        .ok_or_else(|| {
            MortgageError::overflow(format!(
                "level payment on {principal} at periodic rate {rate}"
            ))
        })
}
