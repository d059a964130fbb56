mod report;
mod scanner;

use alloy::{providers::ProviderBuilder, transports::http::reqwest::Url};
use spreadcheck_common::{Error, Result};
use spreadcheck_config::Config;
use spreadcheck_dexes::UniswapV2;
use std::env;
use tracing::Level;

#[tokio::main]
async fn main() {
    spreadcheck_logger::init_logger(Level::INFO);

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|arg| arg == "--json");
    let config_path = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "./config.yaml".to_owned());

    if let Err(err) = run(&config_path, json).await {
        tracing::error!("{err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(config_path: &str, json: bool) -> Result<()> {
    let config = Config::load(config_path.into())?;
    let resolved = config.resolve()?;
    let (base, quote_a, quote_b) = (
        &resolved.base.symbol,
        &resolved.quote_a.symbol,
        &resolved.quote_b.symbol,
    );
    tracing::info!(
        "comparing {base}/{quote_a} against {base}/{quote_b}, alert above {}%",
        resolved.threshold_pct
    );

    let url: Url = resolved
        .rpc_url
        .parse()
        .map_err(|err| Error::Configuration(format!("malformed rpc_url {:?}: {err}", resolved.rpc_url)))?;
    let provider = ProviderBuilder::new().on_http(url);

    let dex = UniswapV2::pinned(provider, resolved.factory).await?;
    let result = scanner::compare(&dex, &resolved).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("report serializes")
        );
    } else {
        report::print_human(&result);
    }

    Ok(())
}
