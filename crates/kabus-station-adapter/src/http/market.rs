/*
[INPUT]:  Symbol code and market
[OUTPUT]: Symbol information and quote boards
[POS]:    HTTP layer - market information endpoints (require X-API-KEY)
[UPDATE]: When adding new market endpoints or changing response format
*/

use async_trait::async_trait;

use crate::http::requester::endpoint_requester;
use crate::http::{Requester, Result};
use crate::types::{BoardRequest, BoardResponse, SymbolRequest, SymbolResponse};

endpoint_requester!(
    /// Looks up symbol information
    ///
    /// GET /symbol/{symbol}@{exchange}
    SymbolRequester,
    "/symbol"
);

endpoint_requester!(
    /// Fetches the quote board of a symbol
    ///
    /// GET /board/{symbol}@{exchange}
    BoardRequester,
    "/board"
);

#[async_trait]
impl Requester for SymbolRequester {
    type Request = SymbolRequest;
    type Response = SymbolResponse;

    async fn exec(&self, request: SymbolRequest) -> Result<SymbolResponse> {
        self.client
            .get(Some(request.path_param().as_str()), &request.query())
            .await?
            .parse()
    }
}

#[async_trait]
impl Requester for BoardRequester {
    type Request = BoardRequest;
    type Response = BoardResponse;

    async fn exec(&self, request: BoardRequest) -> Result<BoardResponse> {
        self.client
            .get(Some(request.path_param().as_str()), &[])
            .await?
            .parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Environment, HttpClient};
    use crate::types::Exchange;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[rstest]
    #[case(Environment::Production, "http://localhost:18080/kabusapi/symbol")]
    #[case(Environment::Verification, "http://localhost:18081/kabusapi/symbol")]
    fn test_new_symbol_requester(#[case] environment: Environment, #[case] want: &str) {
        let requester = SymbolRequester::new("token", environment).expect("requester");
        assert_eq!(requester.client().url().as_str(), want);
    }

    #[rstest]
    #[case(Environment::Production, "http://localhost:18080/kabusapi/board")]
    #[case(Environment::Verification, "http://localhost:18081/kabusapi/board")]
    fn test_new_board_requester(#[case] environment: Environment, #[case] want: &str) {
        let requester = BoardRequester::new("token", environment).expect("requester");
        assert_eq!(requester.client().url().as_str(), want);
    }

    #[tokio::test]
    async fn test_symbol_exec() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/kabusapi/symbol/9433@1"))
            .and(query_param("addinfo", "false"))
            .and(header("X-API-KEY", "token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Symbol": "9433",
                "SymbolName": "ＫＤＤＩ",
                "DisplayName": "ＫＤＤＩ",
                "Exchange": 1,
                "ExchangeName": "東証１部",
                "TradingUnit": 100,
                "UpperLimit": 4041,
                "LowerLimit": 2641
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&format!("{}/kabusapi/symbol", server.uri()), "token")
            .expect("client");
        let response = SymbolRequester::from_client(client)
            .exec(SymbolRequest {
                addinfo: Some(false),
                ..SymbolRequest::new("9433", Exchange::Toushou)
            })
            .await
            .expect("symbol");

        assert_eq!(response.symbol, "9433");
        assert_eq!(response.trading_unit, Some(Decimal::from(100)));
        assert_eq!(response.upper_limit, Some(Decimal::from(4041)));
        assert_eq!(response.total_market_value, None);
    }

    #[tokio::test]
    async fn test_board_exec() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/kabusapi/board/5401@1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Symbol": "5401",
                "SymbolName": "新日鐵住金",
                "Exchange": 1,
                "ExchangeName": "東証１部",
                "CurrentPrice": 2408,
                "CurrentPriceTime": "2020-07-22T15:00:00+09:00",
                "CurrentPriceChangeStatus": "0058",
                "CurrentPriceStatus": 1,
                "VWAP": 2380.2,
                "BidPrice": 2409,
                "BidQty": 1000,
                "AskPrice": 2407,
                "AskQty": 1500,
                "Sell1": {
                    "Time": "2020-07-22T15:00:00+09:00",
                    "Sign": "0101",
                    "Price": 2409,
                    "Qty": 1000
                },
                "Buy1": {
                    "Time": "2020-07-22T15:00:00+09:00",
                    "Sign": "0101",
                    "Price": 2407,
                    "Qty": 1500
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&format!("{}/kabusapi/board", server.uri()), "token")
            .expect("client");
        let board = BoardRequester::from_client(client)
            .exec(BoardRequest::new("5401", Exchange::Toushou))
            .await
            .expect("board");

        assert_eq!(board.current_price, Some(Decimal::from(2408)));
        assert_eq!(board.vwap, Some(Decimal::new(23802, 1)));
        assert_eq!(board.current_price_change_status.as_deref(), Some("0058"));
        assert_eq!(board.sell1.sign.as_deref(), Some("0101"));
        assert_eq!(board.buy_levels()[0].qty, Some(Decimal::from(1500)));
    }

    #[tokio::test]
    async fn test_symbol_exec_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"Code": 4002001,"Message": "銘柄が見つからない"}"#,
            ))
            .mount(&server)
            .await;

        let client = HttpClient::new(&format!("{}/kabusapi/symbol", server.uri()), "token")
            .expect("client");
        let err = SymbolRequester::from_client(client)
            .exec(SymbolRequest::new("0000", Exchange::Toushou))
            .await
            .expect_err("should fail");

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.api_code(), Some(4002001));
    }
}
