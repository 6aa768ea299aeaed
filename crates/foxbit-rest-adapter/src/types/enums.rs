/*
[INPUT]:  REST v3 enum values and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
    StopMarket,
    StopLimit,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Active,
    Filled,
    Canceled,
    PartiallyFilled,
    PartiallyCanceled,
    PendingCancel,
}

impl OrderState {
    /// Wire value, as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Active => "ACTIVE",
            OrderState::Filled => "FILLED",
            OrderState::Canceled => "CANCELED",
            OrderState::PartiallyFilled => "PARTIALLY_FILLED",
            OrderState::PartiallyCanceled => "PARTIALLY_CANCELED",
            OrderState::PendingCancel => "PENDING_CANCEL",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector for `PUT /rest/v3/orders/cancel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelType {
    Id,
    ClientOrderId,
    Market,
    All,
}
