use rust_decimal::Decimal;
use serde::Serialize;
use spreadcheck_common::{Error, Result};

/// Outcome of comparing two normalized prices.
#[derive(Debug, Clone, Serialize)]
pub struct Divergence {
    pub average: Decimal,
    /// Signed; positive means `price1` is the richer quote.
    pub difference_pct: Decimal,
    pub alert: bool,
}

/// `(price1 - price2) / average * 100`, with `alert` set when the absolute
/// spread strictly exceeds `threshold_pct`. Pure function of its inputs.
pub fn divergence(price1: Decimal, price2: Decimal, threshold_pct: Decimal) -> Result<Divergence> {
    let sum = price1.checked_add(price2).ok_or_else(|| {
        Error::InvalidReserve(format!("price sum {price1} + {price2} exceeds decimal range"))
    })?;
    let average = sum / Decimal::TWO;

    if average.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let difference_pct = (price1 - price2)
        .checked_div(average)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(Error::DivisionByZero)?;

    Ok(Divergence {
        average,
        difference_pct,
        alert: difference_pct.abs() > threshold_pct,
    })
}
