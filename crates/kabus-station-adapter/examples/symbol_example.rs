/*
[INPUT]:  KABUS_API_PASSWORD and optional KABUS_ENVIRONMENT
[OUTPUT]: Symbol information and quote board for a symbol
[POS]:    Examples - token issuance and market information queries
[UPDATE]: When market endpoints change
*/

use kabus_station_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: issue a token and look up a symbol
///
/// Requires a running kabu station with API access enabled.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== kabu station Symbol Example ===\n");

    let api_password = match std::env::var("KABUS_API_PASSWORD") {
        Ok(password) => password,
        Err(_) => {
            eprintln!("KABUS_API_PASSWORD is not set");
            return;
        }
    };
    let environment = match Environment::from_env() {
        Ok(environment) => environment,
        Err(e) => {
            eprintln!("Invalid environment: {}", e);
            return;
        }
    };
    println!("Environment: {} ({})\n", environment, environment.host());

    let token = match TokenRequester::new(environment) {
        Ok(requester) => requester.exec(TokenRequest { api_password }).await,
        Err(e) => Err(e),
    };
    let token = match token {
        Ok(response) => response.token,
        Err(e) => {
            eprintln!("✗ Token request failed: {}", e);
            return;
        }
    };
    println!("✓ Token issued\n");

    let symbol = "9433";

    println!("Querying symbol info for {}...", symbol);
    let request = SymbolRequest::new(symbol, Exchange::Toushou);
    match SymbolRequester::new(&token, environment) {
        Ok(requester) => match requester.exec(request).await {
            Ok(info) => println!("✓ {} trading unit {:?}", info.symbol_name, info.trading_unit),
            Err(e) => println!("✗ Error: {}", e),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying board for {}...", symbol);
    match BoardRequester::new(&token, environment) {
        Ok(requester) => match requester.exec(BoardRequest::new(symbol, Exchange::Toushou)).await {
            Ok(board) => {
                println!("✓ Current price: {:?}", board.current_price);
                for (level, quote) in board.sell_levels().iter().enumerate().take(3) {
                    println!("  sell{} {:?} x {:?}", level + 1, quote.price, quote.qty);
                }
                for (level, quote) in board.buy_levels().iter().enumerate().take(3) {
                    println!("  buy{}  {:?} x {:?}", level + 1, quote.price, quote.qty);
                }
            }
            Err(e) => println!("✗ Error: {}", e),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Symbol example complete");
}
