use alloy::primitives::Address;
use spreadcheck_common::{Reserves, Result};

/// One pool's state as read from the chain.
#[derive(Debug, Clone)]
pub struct PoolSnapshot {
    pub pair: Address,
    /// The pair contract's intrinsic slot-0 token.
    pub token0: Address,
    pub reserves: Reserves,
    /// `blockTimestampLast` reported by the pair.
    pub timestamp: u32,
}

/// The remote collaborator surface: everything the comparison needs from
/// a DEX, small enough to mock in tests.
#[async_trait::async_trait]
pub trait PairSource: Send + Sync {
    /// Pool address for a token pair. The factory's zero-address sentinel
    /// must surface as `Error::NotFound`, never as a usable address.
    async fn pair_for(&self, token_a: Address, token_b: Address) -> Result<Address>;

    async fn snapshot(&self, pair: Address) -> Result<PoolSnapshot>;
}
