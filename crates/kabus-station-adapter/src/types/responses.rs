/*
[INPUT]:  API response schema and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date::YmdNum;
use super::enums::{Exchange, PutOrCall};
use super::models::{FirstQuote, Order, Position, Quote};
use super::requests::SymbolKey;

/// Error payload of any non-200 response
///
/// `status_code` and `body` are not part of the payload; the response parser
/// fills them in from the HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status_code: u16,
    #[serde(skip)]
    pub body: String,
    /// `0` when the body carries no code
    #[serde(rename = "Code", default)]
    pub code: i32,
    #[serde(rename = "Message", default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenResponse {
    pub result_code: i32,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendOrderStockResponse {
    /// `0` on success
    pub result: i32,
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelOrderResponse {
    /// `0` on success
    pub result: i32,
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionsResponse(pub Vec<Position>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrdersResponse(pub Vec<Order>);

/// Symbol information returned by `/symbol`
///
/// Derivative-only fields (underlyer, strike, delivery month) are empty for stocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SymbolResponse {
    pub symbol: String,
    pub symbol_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub exchange: Exchange,
    pub exchange_name: String,
    #[serde(default)]
    pub bis_category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_market_value: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_stocks: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub trading_unit: Option<Decimal>,
    #[serde(default)]
    pub fiscal_year_end_basic: YmdNum,
    #[serde(default)]
    pub price_range_group: Option<String>,
    #[serde(default, rename = "KCMarginBuy")]
    pub kc_margin_buy: Option<bool>,
    #[serde(default, rename = "KCMarginSell")]
    pub kc_margin_sell: Option<bool>,
    #[serde(default)]
    pub margin_buy: Option<bool>,
    #[serde(default)]
    pub margin_sell: Option<bool>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub upper_limit: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub lower_limit: Option<Decimal>,
    #[serde(default)]
    pub underlyer: Option<String>,
    #[serde(default)]
    pub deriv_month: Option<String>,
    #[serde(default)]
    pub trade_start: YmdNum,
    #[serde(default)]
    pub trade_end: YmdNum,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub strike_price: Option<Decimal>,
    #[serde(default)]
    pub put_or_call: Option<PutOrCall>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub clearing_price: Option<Decimal>,
}

/// Quote board returned by `/board`
///
/// The API names the sell side `Bid` and the buy side `Ask`; the fields keep
/// those names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoardResponse {
    pub symbol: String,
    pub symbol_name: String,
    pub exchange: Exchange,
    pub exchange_name: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub current_price_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub current_price_change_status: Option<String>,
    #[serde(default)]
    pub current_price_status: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub calc_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub previous_close: Option<Decimal>,
    #[serde(default)]
    pub previous_close_time: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub change_previous_close: Option<Decimal>,
    #[serde(default)]
    pub change_previous_close_per: Option<f64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub opening_price: Option<Decimal>,
    #[serde(default)]
    pub opening_price_time: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub high_price: Option<Decimal>,
    #[serde(default)]
    pub high_price_time: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub low_price: Option<Decimal>,
    #[serde(default)]
    pub low_price_time: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub trading_volume: Option<Decimal>,
    #[serde(default)]
    pub trading_volume_time: Option<DateTime<FixedOffset>>,
    #[serde(default, rename = "VWAP", with = "rust_decimal::serde::float_option")]
    pub vwap: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub trading_value: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub bid_qty: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub bid_price: Option<Decimal>,
    #[serde(default)]
    pub bid_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub bid_sign: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub market_order_sell_qty: Option<Decimal>,
    #[serde(default)]
    pub sell1: FirstQuote,
    #[serde(default)]
    pub sell2: Quote,
    #[serde(default)]
    pub sell3: Quote,
    #[serde(default)]
    pub sell4: Quote,
    #[serde(default)]
    pub sell5: Quote,
    #[serde(default)]
    pub sell6: Quote,
    #[serde(default)]
    pub sell7: Quote,
    #[serde(default)]
    pub sell8: Quote,
    #[serde(default)]
    pub sell9: Quote,
    #[serde(default)]
    pub sell10: Quote,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub ask_qty: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub ask_price: Option<Decimal>,
    #[serde(default)]
    pub ask_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub ask_sign: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub market_order_buy_qty: Option<Decimal>,
    #[serde(default)]
    pub buy1: FirstQuote,
    #[serde(default)]
    pub buy2: Quote,
    #[serde(default)]
    pub buy3: Quote,
    #[serde(default)]
    pub buy4: Quote,
    #[serde(default)]
    pub buy5: Quote,
    #[serde(default)]
    pub buy6: Quote,
    #[serde(default)]
    pub buy7: Quote,
    #[serde(default)]
    pub buy8: Quote,
    #[serde(default)]
    pub buy9: Quote,
    #[serde(default)]
    pub buy10: Quote,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub over_sell_qty: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub under_buy_qty: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_market_value: Option<Decimal>,
}

impl BoardResponse {
    /// Sell levels from best to tenth
    pub fn sell_levels(&self) -> [Quote; 10] {
        [
            Quote::from(&self.sell1),
            self.sell2.clone(),
            self.sell3.clone(),
            self.sell4.clone(),
            self.sell5.clone(),
            self.sell6.clone(),
            self.sell7.clone(),
            self.sell8.clone(),
            self.sell9.clone(),
            self.sell10.clone(),
        ]
    }

    /// Buy levels from best to tenth
    pub fn buy_levels(&self) -> [Quote; 10] {
        [
            Quote::from(&self.buy1),
            self.buy2.clone(),
            self.buy3.clone(),
            self.buy4.clone(),
            self.buy5.clone(),
            self.buy6.clone(),
            self.buy7.clone(),
            self.buy8.clone(),
            self.buy9.clone(),
            self.buy10.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletCashResponse {
    #[serde(
        rename = "StockAccountWallet",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub stock_account_wallet: Option<Decimal>,
    #[serde(
        rename = "AuKCStockAccountWallet",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub au_kc_stock_account_wallet: Option<Decimal>,
    #[serde(
        rename = "AuJbnStockAccountWallet",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub au_jbn_stock_account_wallet: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletMarginResponse {
    #[serde(
        rename = "MarginAccountWallet",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub margin_account_wallet: Option<Decimal>,
    #[serde(rename = "DepositkeepRate", default)]
    pub depositkeep_rate: Option<f64>,
    #[serde(rename = "ConsignmentDepositRate", default)]
    pub consignment_deposit_rate: Option<f64>,
    #[serde(rename = "CashOfConsignmentDepositRate", default)]
    pub cash_of_consignment_deposit_rate: Option<f64>,
}

/// Symbols currently registered for push notifications
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(rename = "RegistList", default)]
    pub regist_list: Vec<SymbolKey>,
}
