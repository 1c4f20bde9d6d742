/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for requesters driven through the public API
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{INTERNAL_ERROR_BODY, mock_client, mock_token, setup_mock_server};
use kabus_station_adapter::*;
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[rstest]
#[case(Environment::Production, "18080")]
#[case(Environment::Verification, "18081")]
fn test_every_requester_uses_environment_port(
    #[case] environment: Environment,
    #[case] port: &str,
) {
    let base = format!("http://localhost:{port}/kabusapi");
    let urls = [
        assert_ok!(TokenRequester::new(environment)).client().url().to_string(),
        assert_ok!(SendOrderStockRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(CancelOrderRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(PositionsRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(OrdersRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(SymbolRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(BoardRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(WalletCashRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(WalletMarginRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(RegisterRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(UnregisterRequester::new("t", environment)).client().url().to_string(),
        assert_ok!(UnregisterAllRequester::new("t", environment)).client().url().to_string(),
    ];
    let paths = [
        "/token",
        "/sendorder",
        "/cancelorder",
        "/positions",
        "/orders",
        "/symbol",
        "/board",
        "/wallet/cash",
        "/wallet/margin",
        "/register",
        "/unregister",
        "/unregister/all",
    ];

    for (url, path) in urls.iter().zip(paths) {
        assert_eq!(url, &format!("{base}{path}"));
    }
}

#[test]
fn test_requester_with_config() {
    let config = ClientConfig {
        timeout: std::time::Duration::from_secs(5),
        ..ClientConfig::default()
    };
    let requester = assert_ok!(PositionsRequester::with_config(
        "token",
        Environment::Production,
        config
    ));
    assert_eq!(requester.client().token(), Some("token"));
}

#[tokio::test]
async fn test_token_then_symbol_lookup() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/kabusapi/token"))
        .and(body_json(json!({"APIPassword": "password"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ResultCode": 0,
            "Token": mock_token(),
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/kabusapi/symbol/9433@1"))
        .and(header("X-API-KEY", mock_token().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Symbol": "9433",
            "SymbolName": "ＫＤＤＩ",
            "Exchange": 1,
            "ExchangeName": "東証１部",
            "TradingUnit": 100
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = assert_ok!(
        TokenRequester::from_client(mock_client(&server, "/token", ""))
            .exec(TokenRequest {
                api_password: "password".to_string(),
            })
            .await
    );
    assert_eq!(token.result_code, 0);

    let symbol = assert_ok!(
        SymbolRequester::from_client(mock_client(&server, "/symbol", &token.token))
            .exec(SymbolRequest::new("9433", Exchange::Toushou))
            .await
    );
    assert_eq!(symbol.symbol_name, "ＫＤＤＩ");
    assert_eq!(symbol.trading_unit, Some(Decimal::from(100)));
}

#[tokio::test]
async fn test_cash_order_then_cancel() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/kabusapi/sendorder"))
        .and(body_json(json!({
            "Password": "password",
            "Symbol": "9433",
            "Exchange": 1,
            "SecurityType": 1,
            "Side": "2",
            "CashMargin": 1,
            "MarginTradeType": 0,
            "DelivType": 2,
            "FundType": "02",
            "AccountType": 4,
            "Qty": 100,
            "ClosePositionOrder": 0,
            "ClosePositions": null,
            "Price": 3000,
            "ExpireDay": 20201001,
            "FrontOrderType": 20
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Result": 0,
            "OrderId": "20201001A01N06848002"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/kabusapi/cancelorder"))
        .and(body_json(json!({"OrderId": "20201001A01N06848002", "Password": "password"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Result": 0,
            "OrderId": "20201001A01N06848002"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = SendOrderStockRequest {
        password: "password".to_string(),
        symbol: "9433".to_string(),
        exchange: StockExchange::Toushou,
        security_type: SecurityType::Stock,
        side: Side::Buy,
        cash_margin: CashMargin::Cash,
        margin_trade_type: MarginTradeType::Unspecified,
        deliv_type: DelivType::Deposit,
        fund_type: FundType::Protected,
        account_type: AccountType::Specific,
        qty: 100,
        close_position_order: ClosePositionOrder::DateAscProfitDesc,
        close_positions: vec![],
        price: Decimal::from(3000),
        expire_day: YmdNum::from_ymd(2020, 10, 1).expect("date"),
        front_order_type: StockFrontOrderType::Limit,
    };
    let accepted = assert_ok!(
        SendOrderStockRequester::from_client(mock_client(&server, "/sendorder", &mock_token()))
            .exec(order)
            .await
    );
    assert_eq!(accepted.result, 0);

    let cancelled = assert_ok!(
        CancelOrderRequester::from_client(mock_client(&server, "/cancelorder", &mock_token()))
            .exec(CancelOrderRequest {
                order_id: accepted.order_id.clone(),
                password: "password".to_string(),
            })
            .await
    );
    assert_eq!(cancelled.order_id, accepted.order_id);
}

#[rstest]
#[case(400)]
#[case(401)]
#[case(500)]
#[tokio::test]
async fn test_non_ok_status_maps_to_api_error(#[case] status: u16) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/kabusapi/orders"))
        .and(query_param("product", "0"))
        .respond_with(ResponseTemplate::new(status).set_body_string(INTERNAL_ERROR_BODY))
        .mount(&server)
        .await;

    let err = OrdersRequester::from_client(mock_client(&server, "/orders", &mock_token()))
        .exec(OrdersRequest::default())
        .await
        .expect_err("should fail");

    match err {
        KabusError::Api(response) => {
            assert_eq!(response.status_code, status);
            assert_eq!(response.code, 4001001);
            assert_eq!(response.message, "内部エラー");
            assert_eq!(response.body, INTERNAL_ERROR_BODY);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = assert_ok!(HttpClient::new("http://127.0.0.1:9/kabusapi/positions", "token"));
    let err = PositionsRequester::from_client(client)
        .exec(PositionsRequest::default())
        .await
        .expect_err("should fail");

    assert!(matches!(err, KabusError::Http(_)));
}
