/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for positions, orders and board quotes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date::YmdNum;
use super::enums::{
    AccountType, CashMargin, DelivType, Exchange, MarginTradeType, OrdType, OrderState, RecType,
    SecurityType, Side, State,
};

/// Held position returned by `/positions`
///
/// Margin-only fields are absent for cash positions, and valuation fields are
/// only filled when the query asks for `addinfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    #[serde(rename = "ExecutionID")]
    pub execution_id: String,
    pub account_type: AccountType,
    pub symbol: String,
    pub symbol_name: String,
    pub exchange: Exchange,
    pub exchange_name: String,
    #[serde(default)]
    pub security_type: Option<SecurityType>,
    #[serde(default)]
    pub execution_day: YmdNum,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub leaves_qty: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub hold_qty: Decimal,
    pub side: Side,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub expenses: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub commission: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub commission_tax: Option<Decimal>,
    #[serde(default)]
    pub expire_day: YmdNum,
    #[serde(default)]
    pub margin_trade_type: Option<MarginTradeType>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub valuation: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub profit_loss: Option<Decimal>,
    #[serde(default)]
    pub profit_loss_rate: Option<f64>,
}

/// Order returned by `/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(rename = "ID")]
    pub id: String,
    pub state: State,
    pub order_state: OrderState,
    pub ord_type: OrdType,
    pub recv_time: DateTime<FixedOffset>,
    pub symbol: String,
    pub symbol_name: String,
    pub exchange: Exchange,
    pub exchange_name: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_qty: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cum_qty: Decimal,
    pub side: Side,
    pub cash_margin: CashMargin,
    pub account_type: AccountType,
    pub deliv_type: DelivType,
    #[serde(default)]
    pub expire_day: YmdNum,
    #[serde(default)]
    pub margin_trade_type: Option<MarginTradeType>,
    #[serde(default)]
    pub details: Vec<OrderDetail>,
}

impl Order {
    /// Quantity still waiting to be executed
    pub fn leaves_qty(&self) -> Decimal {
        self.order_qty - self.cum_qty
    }
}

/// One history row of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDetail {
    pub seq_num: i64,
    #[serde(rename = "ID")]
    pub id: String,
    pub rec_type: RecType,
    #[serde(default, rename = "ExchangeID")]
    pub exchange_id: Option<String>,
    pub state: State,
    pub transact_time: DateTime<FixedOffset>,
    pub ord_type: OrdType,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub qty: Option<Decimal>,
    #[serde(default, rename = "ExecutionID")]
    pub execution_id: Option<String>,
    #[serde(default)]
    pub execution_day: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub deliv_day: YmdNum,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub commission: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub commission_tax: Option<Decimal>,
}

/// Best quote of a board side, with its time and sign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FirstQuote {
    #[serde(default)]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub sign: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub qty: Option<Decimal>,
}

/// Board level below the best quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quote {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub qty: Option<Decimal>,
}

impl From<&FirstQuote> for Quote {
    fn from(first: &FirstQuote) -> Self {
        Self {
            price: first.price,
            qty: first.qty,
        }
    }
}
