/*
[INPUT]:  CLI arguments, FOXBIT_* environment variables
[OUTPUT]: One run of the account/order/cancel demo against the REST API
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use foxbit_rest_adapter::FoxbitClient;
use foxbit_rest_sample::{run_demo, DemoOrder, SampleConfig};

#[derive(Parser, Debug)]
#[command(name = "foxbit-rest-sample", version, about = "Foxbit REST v3 signed request sample")]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "market", value_name = "SYMBOL", default_value = "btcbrl")]
    market: String,
    #[arg(long = "price", value_name = "PRICE", default_value = "10.0")]
    price: Decimal,
    #[arg(long = "quantity", value_name = "QTY", default_value = "0.0001")]
    quantity: Decimal,
    #[arg(long = "pause-secs", value_name = "SECS", default_value_t = 2)]
    pause_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let order = DemoOrder {
        market_symbol: args.market,
        price: args.price,
        quantity: args.quantity,
    };
    let config = SampleConfig::from_env(order, Duration::from_secs(args.pause_secs))?;
    info!(
        base_url = %config.client.base_url,
        market = %config.order.market_symbol,
        "starting foxbit-rest-sample"
    );

    let client = FoxbitClient::with_config(config.credentials.clone(), config.client.clone())
        .context("build REST client")?;

    let outcome = run_demo(&client, &config.order, config.pause)
        .await
        .context("demo flow failed")?;
    info!(order_id = %outcome.order_id, "demo complete");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
