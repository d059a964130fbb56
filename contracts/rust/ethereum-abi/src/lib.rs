use alloy::sol;

// Minimal read-only Uniswap V2 surface: factory lookup plus the pair's
// reserves and token ordering.

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IUniswapV2Factory {
        function getPair(address tokenA, address tokenB) external view returns (address pair);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IUniswapV2Pair {
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
        function token0() external view returns (address);
        function token1() external view returns (address);
    }
);
