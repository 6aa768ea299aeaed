/*
[INPUT]:  REST v3 request schemas and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{CancelType, OrderState, OrderType, Side};
use super::responses::OrderId;

/// Body of `POST /rest/v3/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub market_symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl CreateOrderRequest {
    pub fn limit(market_symbol: impl Into<String>, side: Side, price: Decimal, quantity: Decimal) -> Self {
        Self {
            market_symbol: market_symbol.into(),
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            quantity,
            client_order_id: None,
        }
    }
}

/// Filters for `GET /rest/v3/orders`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrdersQuery {
    pub market_symbol: Option<String>,
    pub state: Option<OrderState>,
}

impl ListOrdersQuery {
    /// Query parameters in wire order, unset filters omitted
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(symbol) = &self.market_symbol {
            params.push(("market_symbol".to_string(), symbol.clone()));
        }
        if let Some(state) = self.state {
            params.push(("state".to_string(), state.as_str().to_string()));
        }
        params
    }
}

/// Body of `PUT /rest/v3/orders/cancel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrdersRequest {
    #[serde(rename = "type")]
    pub cancel_type: CancelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_symbol: Option<String>,
}

impl CancelOrdersRequest {
    pub fn by_id(id: OrderId) -> Self {
        Self {
            cancel_type: CancelType::Id,
            id: Some(id),
            client_order_id: None,
            market_symbol: None,
        }
    }
}
