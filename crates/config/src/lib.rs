use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spreadcheck_common::{Error, Result, TokenMeta};
use std::{collections::BTreeMap, path::PathBuf};

// rust_decimal refuses scales above 28.
const MAX_DECIMALS: u32 = 28;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    pub address: String,
    pub decimals: u32,
}

/// Names the two pools to compare: base/quote_a against base/quote_b.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub base: String,
    pub quote_a: String,
    pub quote_b: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: String,
    pub factory: String,
    #[serde(default = "default_threshold")]
    pub threshold_pct: Decimal,
    pub tokens: BTreeMap<String, TokenConfig>,
    pub comparison: ComparisonConfig,
}

fn default_threshold() -> Decimal {
    Decimal::new(5, 1)
}

impl Config {
    pub fn load(path: PathBuf) -> Result<Self> {
        let data = std::fs::read_to_string(&path)
            .map_err(|err| Error::Configuration(format!("{}: {err}", path.display())))?;
        serde_yaml::from_str(&data)
            .map_err(|err| Error::Configuration(format!("{}: {err}", path.display())))
    }

    /// Parse and cross-check everything before the first network call.
    /// A token named by `comparison` without a decimals entry is rejected
    /// here, never defaulted at runtime.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let factory = parse_address(&self.factory)?;

        if self.threshold_pct.is_sign_negative() {
            return Err(Error::Configuration(format!(
                "threshold_pct must not be negative, got {}",
                self.threshold_pct
            )));
        }

        let base = self.token_meta(&self.comparison.base)?;
        let quote_a = self.token_meta(&self.comparison.quote_a)?;
        let quote_b = self.token_meta(&self.comparison.quote_b)?;

        Ok(ResolvedConfig {
            rpc_url: self.rpc_url.clone(),
            factory,
            threshold_pct: self.threshold_pct,
            base,
            quote_a,
            quote_b,
        })
    }

    fn token_meta(&self, symbol: &str) -> Result<TokenMeta> {
        let token = self
            .tokens
            .get(symbol)
            .ok_or_else(|| Error::Configuration(format!("no decimals entry for token {symbol}")))?;

        if token.decimals > MAX_DECIMALS {
            return Err(Error::Configuration(format!(
                "token {symbol} declares {} decimals, above the supported {MAX_DECIMALS}",
                token.decimals
            )));
        }

        Ok(TokenMeta {
            symbol: symbol.to_owned(),
            address: parse_address(&token.address)?,
            decimals: token.decimals,
        })
    }
}

// On-chain identifiers are hex and not case-sensitive; normalize before
// parsing so mixed-case input with a stale EIP-55 checksum still resolves.
fn parse_address(s: &str) -> Result<Address> {
    s.trim()
        .to_ascii_lowercase()
        .parse::<Address>()
        .map_err(|err| Error::Configuration(format!("malformed address {s:?}: {err}")))
}

/// Address-parsed, decimals-checked view of the configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub rpc_url: String,
    pub factory: Address,
    pub threshold_pct: Decimal,
    pub base: TokenMeta,
    pub quote_a: TokenMeta,
    pub quote_b: TokenMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
rpc_url: "https://eth.example.org"
factory: "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"
threshold_pct: "0.5"
tokens:
  WETH: { address: "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", decimals: 18 }
  USDT: { address: "0xdAC17F958D2ee523a2206206994597C13D831ec7", decimals: 6 }
  DAI:  { address: "0x6B175474E89094C44Da98b954EedeAC495271d0F", decimals: 18 }
comparison:
  base: WETH
  quote_a: USDT
  quote_b: DAI
"#;

    fn sample() -> Config {
        serde_yaml::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn resolves_sample_config() {
        let resolved = sample().resolve().unwrap();
        assert_eq!(
            resolved.factory,
            address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f")
        );
        assert_eq!(resolved.threshold_pct, dec!(0.5));
        assert_eq!(resolved.base.symbol, "WETH");
        assert_eq!(resolved.base.decimals, 18);
        assert_eq!(resolved.quote_a.decimals, 6);
        assert_eq!(
            resolved.quote_b.address,
            address!("0x6B175474E89094C44Da98b954EedeAC495271d0F")
        );
    }

    #[test]
    fn threshold_defaults_to_half_percent() {
        let mut config = sample();
        config.threshold_pct = default_threshold();
        assert_eq!(config.resolve().unwrap().threshold_pct, dec!(0.5));

        let without: Config =
            serde_yaml::from_str(&SAMPLE.replace("threshold_pct: \"0.5\"\n", "")).unwrap();
        assert_eq!(without.threshold_pct, dec!(0.5));
    }

    #[test]
    fn unknown_comparison_token_is_a_configuration_error() {
        let mut config = sample();
        config.comparison.quote_b = "WBTC".to_owned();

        match config.resolve() {
            Err(Error::Configuration(msg)) => assert!(msg.contains("WBTC"), "{msg}"),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_address_is_a_configuration_error() {
        let mut config = sample();
        config.factory = "0x1234".to_owned();

        assert!(matches!(config.resolve(), Err(Error::Configuration(_))));
    }

    #[test]
    fn mixed_case_addresses_resolve() {
        let mut config = sample();
        config.factory = config.factory.to_uppercase().replace("0X", "0x");
        let resolved = config.resolve().unwrap();
        assert_eq!(
            resolved.factory,
            address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f")
        );
    }

    #[test]
    fn oversized_decimals_are_rejected() {
        let mut config = sample();
        config.tokens.get_mut("USDT").unwrap().decimals = 40;

        assert!(matches!(config.resolve(), Err(Error::Configuration(_))));
    }
}
