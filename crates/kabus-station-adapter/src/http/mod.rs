/*
[INPUT]:  Endpoint URLs, API token and typed requests
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod auth;
pub mod client;
pub mod error;
pub mod market;
pub mod register;
pub mod requester;
pub mod trade;

pub use error::{KabusError, Result};
pub use requester::Requester;

pub use account::{OrdersRequester, PositionsRequester, WalletCashRequester, WalletMarginRequester};
pub use auth::TokenRequester;
pub use client::{
    API_KEY_HEADER, ClientConfig, Environment, HttpClient, HttpResponse, create_url, parse_response,
};
pub use market::{BoardRequester, SymbolRequester};
pub use register::{RegisterRequester, UnregisterAllRequester, UnregisterRequester};
pub use trade::{CancelOrderRequester, SendOrderStockRequester};
