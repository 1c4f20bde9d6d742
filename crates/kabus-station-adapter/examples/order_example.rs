/*
[INPUT]:  KABUS_API_PASSWORD and optional KABUS_ENVIRONMENT
[OUTPUT]: Order placement, order list and cancellation results
[POS]:    Examples - trading flow against the verification environment
[UPDATE]: When trading endpoints change
*/

use kabus_station_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: place a limit buy, list orders, then cancel it
///
/// WARNING: Against the production environment this places a real order.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== kabu station Order Example ===\n");

    let api_password = std::env::var("KABUS_API_PASSWORD")
        .map_err(|_| KabusError::Config("KABUS_API_PASSWORD is not set".to_string()))?;
    let environment = Environment::from_env()?;
    println!("Environment: {}\n", environment);

    let token = TokenRequester::new(environment)?
        .exec(TokenRequest {
            api_password: api_password.clone(),
        })
        .await?
        .token;
    println!("✓ Token issued\n");

    let order = SendOrderStockRequest {
        password: api_password.clone(),
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
        price: Decimal::from(2500),
        expire_day: YmdNum::UNSPECIFIED,
        front_order_type: StockFrontOrderType::Limit,
    };

    println!("Placing limit buy for {}...", order.symbol);
    let accepted = SendOrderStockRequester::new(&token, environment)?
        .exec(order)
        .await?;
    println!("✓ Order accepted: {}\n", accepted.order_id);

    println!("Listing orders...");
    let orders = OrdersRequester::new(&token, environment)?
        .exec(OrdersRequest {
            id: Some(accepted.order_id.clone()),
            ..OrdersRequest::default()
        })
        .await?;
    for order in &orders.0 {
        println!(
            "  {} {} state={:?} leaves={:?}",
            order.id,
            order.symbol,
            order.state,
            order.leaves_qty()
        );
    }

    println!("\nCancelling {}...", accepted.order_id);
    let cancelled = CancelOrderRequester::new(&token, environment)?
        .exec(CancelOrderRequest {
            order_id: accepted.order_id,
            password: api_password,
        })
        .await?;
    println!("✓ Cancellation accepted: {}", cancelled.order_id);

    println!("\n✓ Order example complete");
    Ok(())
}
