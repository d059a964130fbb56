use alloy::primitives::{Address, Uint};

pub type U112 = Uint<112, 2>;

/// Raw pool balances in contract slot order (reserve0, reserve1).
#[derive(Debug, Clone)]
pub struct Reserves(pub U112, pub U112);

/// A token as declared in configuration. `decimals` is the power-of-ten
/// scaling of its raw on-chain balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMeta {
    pub symbol: String,
    pub address: Address,
    pub decimals: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration: {0}")]
    Configuration(String),

    #[error("no pool deployed for pair {token_a}/{token_b}")]
    NotFound { token_a: Address, token_b: Address },

    #[error("remote call failed: {0}")]
    RemoteCall(String),

    #[error("invalid reserve: {0}")]
    InvalidReserve(String),

    #[error("divergence average is zero")]
    DivisionByZero,
}

impl Error {
    /// Process exit code for a failed run: 1 for configuration problems,
    /// 2 for anything that went wrong against the chain.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Configuration(_) => 1,
            _ => 2,
        }
    }
}

impl From<alloy::contract::Error> for Error {
    fn from(err: alloy::contract::Error) -> Self {
        Error::RemoteCall(err.to_string())
    }
}

impl From<alloy::transports::TransportError> for Error {
    fn from(err: alloy::transports::TransportError) -> Self {
        Error::RemoteCall(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
