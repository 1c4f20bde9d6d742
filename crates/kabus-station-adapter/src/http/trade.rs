/*
[INPUT]:  Order requests and API token
[OUTPUT]: Order acceptance and cancellation confirmations
[POS]:    HTTP layer - trading endpoints (require X-API-KEY)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use async_trait::async_trait;
use tracing::info;

use crate::http::requester::endpoint_requester;
use crate::http::{Requester, Result};
use crate::types::{
    CancelOrderRequest, CancelOrderResponse, SendOrderStockRequest, SendOrderStockResponse,
};

endpoint_requester!(
    /// Places cash and margin stock orders
    ///
    /// POST /sendorder
    SendOrderStockRequester,
    "/sendorder"
);

endpoint_requester!(
    /// Cancels a working order
    ///
    /// PUT /cancelorder
    CancelOrderRequester,
    "/cancelorder"
);

#[async_trait]
impl Requester for SendOrderStockRequester {
    type Request = SendOrderStockRequest;
    type Response = SendOrderStockResponse;

    async fn exec(&self, request: SendOrderStockRequest) -> Result<SendOrderStockResponse> {
        let body = serde_json::to_vec(&request)?;
        let response: SendOrderStockResponse = self.client.post(body).await?.parse()?;
        info!(
            order_id = %response.order_id,
            symbol = %request.symbol,
            side = ?request.side,
            "stock order accepted"
        );
        Ok(response)
    }
}

#[async_trait]
impl Requester for CancelOrderRequester {
    type Request = CancelOrderRequest;
    type Response = CancelOrderResponse;

    async fn exec(&self, request: CancelOrderRequest) -> Result<CancelOrderResponse> {
        let body = serde_json::to_vec(&request)?;
        let response: CancelOrderResponse = self.client.put(Some(body)).await?.parse()?;
        info!(order_id = %response.order_id, "order cancellation accepted");
        Ok(response)
    }
}
