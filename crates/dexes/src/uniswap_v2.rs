use crate::common::{PairSource, PoolSnapshot};
use alloy::{eips::BlockId, primitives::Address, providers::Provider};
use ethereum_abi::{IUniswapV2Factory, IUniswapV2Pair};
use spreadcheck_common::{Error, Reserves, Result};

/// Read-only Uniswap V2 client. Every contract call is pinned to the block
/// height observed at construction, so both pools of a comparison reflect
/// the same chain state instead of two different moments in time.
pub struct UniswapV2<P> {
    provider: P,
    factory: Address,
    block: BlockId,
}

impl<P: Provider + Clone> UniswapV2<P> {
    pub async fn pinned(provider: P, factory: Address) -> Result<Self> {
        let number = provider.get_block_number().await?;
        tracing::debug!("pinned reads to block {number}");

        Ok(Self {
            provider,
            factory,
            block: BlockId::number(number),
        })
    }
}

#[async_trait::async_trait]
impl<P: Provider + Clone + 'static> PairSource for UniswapV2<P> {
    async fn pair_for(&self, token_a: Address, token_b: Address) -> Result<Address> {
        let factory = IUniswapV2Factory::new(self.factory, self.provider.clone());
        let pair = factory
            .getPair(token_a, token_b)
            .block(self.block)
            .call()
            .await?
            .pair;

        deployed(pair, token_a, token_b)
    }

    async fn snapshot(&self, pair: Address) -> Result<PoolSnapshot> {
        let instance = IUniswapV2Pair::new(pair, self.provider.clone());

        let reserves = instance.getReserves().block(self.block).call().await?;
        let token0 = instance.token0().block(self.block).call().await?._0;

        Ok(PoolSnapshot {
            pair,
            token0,
            reserves: Reserves(reserves.reserve0, reserves.reserve1),
            timestamp: reserves.blockTimestampLast,
        })
    }
}

// getPair returns the zero address when no pool exists for the pair.
fn deployed(pair: Address, token_a: Address, token_b: Address) -> Result<Address> {
    if pair == Address::ZERO {
        return Err(Error::NotFound { token_a, token_b });
    }
    Ok(pair)
}
