use alloy::primitives::Address;
use rust_decimal::Decimal;
use spreadcheck_common::{Error, Reserves, Result, TokenMeta, U112};

/// Units of `token_b` per one `token_a`, computed from raw pool reserves.
///
/// `pool_token0` is the pair contract's intrinsic slot-0 token; it decides
/// which raw balance belongs to which side of the quote. Scaling and the
/// final division are exact decimal arithmetic, never binary floating
/// point: mainnet reserves routinely exceed 2^53.
pub fn normalize_price(
    reserves: &Reserves,
    pool_token0: Address,
    token_a: &TokenMeta,
    token_b: &TokenMeta,
) -> Result<Decimal> {
    let (raw_a, raw_b) = if pool_token0 == token_a.address {
        (reserves.0, reserves.1)
    } else if pool_token0 == token_b.address {
        (reserves.1, reserves.0)
    } else {
        return Err(Error::RemoteCall(format!(
            "pair token0 {pool_token0} matches neither {} nor {}",
            token_a.symbol, token_b.symbol
        )));
    };

    let scaled_a = scale_down(raw_a, token_a)?;
    let scaled_b = scale_down(raw_b, token_b)?;

    // Reject the degenerate pool here, before the division can turn it
    // into infinity or NaN downstream.
    if scaled_a.is_zero() || scaled_b.is_zero() {
        return Err(Error::InvalidReserve(format!(
            "zero reserve in {}/{} pool",
            token_a.symbol, token_b.symbol
        )));
    }

    scaled_b.checked_div(scaled_a).ok_or_else(|| {
        Error::InvalidReserve(format!(
            "price {}/{} does not fit decimal range",
            token_b.symbol, token_a.symbol
        ))
    })
}

// Raw integer balance -> human-scale amount, exact. Reserves fit u112 but
// Decimal's mantissa is 96 bits, so the conversion can legitimately refuse.
fn scale_down(raw: U112, token: &TokenMeta) -> Result<Decimal> {
    let raw: u128 = raw.to();
    Decimal::try_from_i128_with_scale(raw as i128, token.decimals).map_err(|_| {
        Error::InvalidReserve(format!(
            "{} reserve {raw} exceeds decimal precision",
            token.symbol
        ))
    })
}
