use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::Serialize;
use spreadcheck_common::Result;
use spreadcheck_config::ResolvedConfig;
use spreadcheck_dexes::PairSource;
use spreadcheck_math::{divergence, normalize_price, Divergence};

/// Structured outcome of one comparison run, for printing and for
/// programmatic consumption.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub pair_a: String,
    pub pair_b: String,
    pub pool_a: Address,
    pub pool_b: Address,
    pub price_a: Decimal,
    pub price_b: Decimal,
    pub average: Decimal,
    pub difference_pct: Decimal,
    pub alert: bool,
}

/// Resolve both pools, read both states, normalize and compare. Any
/// failure aborts the whole run; there is no partial result.
pub async fn compare<S: PairSource>(source: &S, config: &ResolvedConfig) -> Result<Report> {
    let pool_a = source
        .pair_for(config.base.address, config.quote_a.address)
        .await?;
    let pool_b = source
        .pair_for(config.base.address, config.quote_b.address)
        .await?;

    let snap_a = source.snapshot(pool_a).await?;
    let snap_b = source.snapshot(pool_b).await?;
    tracing::debug!(
        "pool {pool_a} last synced at {}, pool {pool_b} at {}",
        snap_a.timestamp,
        snap_b.timestamp
    );

    let price_a = normalize_price(&snap_a.reserves, snap_a.token0, &config.base, &config.quote_a)?;
    let price_b = normalize_price(&snap_b.reserves, snap_b.token0, &config.base, &config.quote_b)?;

    let Divergence {
        average,
        difference_pct,
        alert,
    } = divergence(price_a, price_b, config.threshold_pct)?;

    Ok(Report {
        pair_a: format!("{}/{}", config.base.symbol, config.quote_a.symbol),
        pair_b: format!("{}/{}", config.base.symbol, config.quote_b.symbol),
        pool_a,
        pool_b,
        price_a,
        price_b,
        average,
        difference_pct,
        alert,
    })
}
