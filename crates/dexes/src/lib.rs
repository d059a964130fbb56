pub mod common;
pub mod uniswap_v2;

pub use common::{PairSource, PoolSnapshot};
pub use uniswap_v2::UniswapV2;
