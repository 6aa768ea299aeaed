/*
[INPUT]:  Signed client, demo order parameters
[OUTPUT]: Raw responses of the four demo calls
[POS]:    Demo orchestration - account info, place, list, cancel
[UPDATE]: When the demo sequence changes
*/

use anyhow::{Context, Result};
use foxbit_rest_adapter::{
    ApiResponse, CancelOrdersRequest, CreateOrderRequest, FoxbitClient, ListOrdersQuery,
    OrderId, OrderState, Side,
};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::DemoOrder;

/// Responses collected while running the demo
#[derive(Debug)]
pub struct DemoOutcome {
    pub me: ApiResponse,
    pub created: ApiResponse,
    pub active_orders: ApiResponse,
    pub order_id: OrderId,
    pub cancelled: ApiResponse,
}

/// Account info -> limit buy -> pause -> list active -> cancel by id
pub async fn run_demo(client: &FoxbitClient, order: &DemoOrder, pause: Duration) -> Result<DemoOutcome> {
    let me = client.me().await.context("fetch member info")?;
    log_response("me", &me);

    let request = CreateOrderRequest::limit(
        order.market_symbol.clone(),
        Side::Buy,
        order.price,
        order.quantity,
    );
    let created = client
        .create_order(&request)
        .await
        .context("create order")?;
    log_response("create_order", &created);

    if !pause.is_zero() {
        info!(pause_ms = pause.as_millis() as u64, "waiting before listing orders");
        tokio::time::sleep(pause).await;
    }

    let query = ListOrdersQuery {
        market_symbol: Some(order.market_symbol.clone()),
        state: Some(OrderState::Active),
    };
    let active_orders = client
        .list_orders(&query)
        .await
        .context("list active orders")?;
    log_response("list_orders", &active_orders);

    let order_id = created
        .order_id()
        .context("extract order id from create_order response")?;
    info!(%order_id, "cancelling order");

    let cancelled = client
        .cancel_orders(&CancelOrdersRequest::by_id(order_id.clone()))
        .await
        .context("cancel order")?;
    log_response("cancel_orders", &cancelled);

    Ok(DemoOutcome {
        me,
        created,
        active_orders,
        order_id,
        cancelled,
    })
}

fn log_response(call: &str, response: &ApiResponse) {
    if response.is_success() {
        info!(call, status = response.status().as_u16(), body = response.body(), "response");
    } else {
        warn!(call, status = response.status().as_u16(), body = response.body(), "non-success response");
    }
}
