/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public kabu station adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    BoardRequester,
    CancelOrderRequester,
    ClientConfig,
    Environment,
    HttpClient,
    KabusError,
    OrdersRequester,
    PositionsRequester,
    RegisterRequester,
    Requester,
    Result,
    SendOrderStockRequester,
    SymbolRequester,
    TokenRequester,
    UnregisterAllRequester,
    UnregisterRequester,
    WalletCashRequester,
    WalletMarginRequester,
};

// Re-export all types
pub use types::*;
