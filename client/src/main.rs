//! Smoke tool: fetch the top coins from the market-data provider and print
//! them with their 24h change. Configuration comes from the environment
//! (`MARKET_KEY` is required, see [`client::config::Config`]).

use client::config::Config;
use client::services::api::market;
use client::services::api::MarketClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            std::process::exit(1);
        }
    };

    if config.market_key.is_empty() {
        eprintln!("config error: MARKET_KEY must be set in environment");
        std::process::exit(1);
    }

    let market = MarketClient::new(&config);

    match market::coins(&market).await {
        Ok(coins) => {
            println!("{:<5} {:<8} {:<24} {:>14} {:>8}", "RANK", "SYMBOL", "NAME", "PRICE", "24H%");
            for coin in coins {
                let price = coin.price_value().map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
                let change = coin.change_value().map_or_else(|| "-".to_string(), |c| format!("{c:+.2}"));
                println!(
                    "{:<5} {:<8} {:<24} {:>14} {:>8}",
                    coin.rank.map_or_else(|| "-".to_string(), |r| r.to_string()),
                    coin.symbol,
                    coin.name,
                    price,
                    change,
                );
            }
        }
        Err(err) => {
            eprintln!("failed to fetch coins: {err}");
            std::process::exit(1);
        }
    }
}
