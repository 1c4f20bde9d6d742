/*
[INPUT]:  Query filters and API token
[OUTPUT]: Account data (positions, orders, buying power)
[POS]:    HTTP layer - account endpoints (require X-API-KEY)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use async_trait::async_trait;

use crate::http::requester::endpoint_requester;
use crate::http::{Requester, Result};
use crate::types::{
    OrdersRequest, OrdersResponse, PositionsRequest, PositionsResponse, WalletCashRequest,
    WalletCashResponse, WalletMarginRequest, WalletMarginResponse,
};

endpoint_requester!(
    /// Lists held positions
    ///
    /// GET /positions?product={product}
    PositionsRequester,
    "/positions"
);

endpoint_requester!(
    /// Lists orders and their executions
    ///
    /// GET /orders?product={product}
    OrdersRequester,
    "/orders"
);

endpoint_requester!(
    /// Cash buying power
    ///
    /// GET /wallet/cash[/{symbol}@{exchange}]
    WalletCashRequester,
    "/wallet/cash"
);

endpoint_requester!(
    /// Margin buying power
    ///
    /// GET /wallet/margin[/{symbol}@{exchange}]
    WalletMarginRequester,
    "/wallet/margin"
);

#[async_trait]
impl Requester for PositionsRequester {
    type Request = PositionsRequest;
    type Response = PositionsResponse;

    async fn exec(&self, request: PositionsRequest) -> Result<PositionsResponse> {
        self.client.get(None, &request.query()).await?.parse()
    }
}

#[async_trait]
impl Requester for OrdersRequester {
    type Request = OrdersRequest;
    type Response = OrdersResponse;

    async fn exec(&self, request: OrdersRequest) -> Result<OrdersResponse> {
        self.client.get(None, &request.query()).await?.parse()
    }
}

#[async_trait]
impl Requester for WalletCashRequester {
    type Request = WalletCashRequest;
    type Response = WalletCashResponse;

    async fn exec(&self, request: WalletCashRequest) -> Result<WalletCashResponse> {
        let path_param = request.symbol.as_ref().map(|symbol| symbol.path_param());
        self.client.get(path_param.as_deref(), &[]).await?.parse()
    }
}

#[async_trait]
impl Requester for WalletMarginRequester {
    type Request = WalletMarginRequest;
    type Response = WalletMarginResponse;

    async fn exec(&self, request: WalletMarginRequest) -> Result<WalletMarginResponse> {
        let path_param = request.symbol.as_ref().map(|symbol| symbol.path_param());
        self.client.get(path_param.as_deref(), &[]).await?.parse()
    }
}
