/*
[INPUT]:  Order requests and list filters
[OUTPUT]: Raw order responses; order id extraction
[POS]:    HTTP layer - trading endpoints (require signature headers)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{ApiResponse, FoxbitClient, FoxbitError, Result, SignedRequest};
use crate::types::{
    CancelOrdersRequest, CreateOrderRequest, CreateOrderResponse, ListOrdersQuery, OrderId,
};

pub const ORDERS_PATH: &str = "/rest/v3/orders";
pub const CANCEL_ORDERS_PATH: &str = "/rest/v3/orders/cancel";

impl FoxbitClient {
    /// Create a new order
    ///
    /// POST /rest/v3/orders
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<ApiResponse> {
        let request = SignedRequest::post(ORDERS_PATH).json_body(req)?;
        self.execute(request).await
    }

    /// List orders, optionally filtered by market and state
    ///
    /// GET /rest/v3/orders?market_symbol={symbol}&state={state}
    pub async fn list_orders(&self, query: &ListOrdersQuery) -> Result<ApiResponse> {
        let mut request = SignedRequest::get(ORDERS_PATH);
        request.params = query.to_params();
        self.execute(request).await
    }

    /// Cancel orders
    ///
    /// PUT /rest/v3/orders/cancel
    pub async fn cancel_orders(&self, req: &CancelOrdersRequest) -> Result<ApiResponse> {
        let request = SignedRequest::put(CANCEL_ORDERS_PATH).json_body(req)?;
        self.execute(request).await
    }
}

impl ApiResponse {
    /// Id of the order from an order-creation response
    pub fn order_id(&self) -> Result<OrderId> {
        self.create_order_response().map(|created| created.id)
    }

    /// Typed view of an order-creation response
    pub fn create_order_response(&self) -> Result<CreateOrderResponse> {
        let value: serde_json::Value = self.json()?;
        if value.get("id").is_none_or(|id| id.is_null()) {
            return Err(FoxbitError::InvalidResponse("missing field `id`".to_string()));
        }
        serde_json::from_value(value).map_err(|err| {
            FoxbitError::InvalidResponse(format!("invalid order creation response: {err}"))
        })
    }
}
