/*
[INPUT]:  CLI flags and process environment
[OUTPUT]: Parsed demo configuration (order parameters, pause, client settings)
[POS]:    Configuration layer - demo setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use foxbit_rest_adapter::{ClientConfig, Credentials};
use rust_decimal::Decimal;
use std::time::Duration;

/// Order placed and cancelled by the demo flow
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOrder {
    /// Market symbol (e.g., "btcbrl")
    pub market_symbol: String,
    /// Limit price
    pub price: Decimal,
    /// Order quantity
    pub quantity: Decimal,
}

/// Everything the demo needs to run
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub credentials: Credentials,
    pub client: ClientConfig,
    pub order: DemoOrder,
    /// Wait between placing the order and listing active orders
    pub pause: Duration,
}

impl SampleConfig {
    /// Read credentials and client settings from the environment
    pub fn from_env(order: DemoOrder, pause: Duration) -> Result<Self> {
        let credentials = Credentials::from_env().context("load API credentials")?;
        let client = ClientConfig::from_env().context("load client configuration")?;
        Ok(Self {
            credentials,
            client,
            order,
            pause,
        })
    }
}
