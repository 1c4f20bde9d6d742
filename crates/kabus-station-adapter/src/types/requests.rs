/*
[INPUT]:  API request schema and serde requirements
[OUTPUT]: Typed Rust request structs with JSON bodies, path params and query strings
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API request parameters change or new endpoints are added
*/

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::date::YmdNum;
use super::enums::{
    AccountType, CashMargin, ClosePositionOrder, DelivType, Exchange, FundType, MarginTradeType,
    Product, SecurityType, Side, State, StockExchange, StockFrontOrderType,
};

/// Query string pairs for GET endpoints
pub type QueryParams = Vec<(&'static str, String)>;

/// Symbol and market pair, rendered as `symbol@exchange` in paths
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SymbolKey {
    pub symbol: String,
    pub exchange: Exchange,
}

impl SymbolKey {
    pub fn new(symbol: impl Into<String>, exchange: Exchange) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
        }
    }

    pub fn path_param(&self) -> String {
        format!("{}@{}", self.symbol, self.exchange.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    #[serde(rename = "APIPassword")]
    pub api_password: String,
}

/// Position to close by a margin exit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosePosition {
    #[serde(rename = "HoldID")]
    pub hold_id: String,
    #[serde(rename = "Qty")]
    pub qty: u64,
}

/// Stock order (cash or margin)
///
/// The JSON body depends on the order kind. Margin orders carry either
/// `ClosePositions` (when positions are listed) or `ClosePositionOrder`
/// (when they are not), never both. Cash orders carry every field, with
/// `ClosePositions` as `null` when no positions are listed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendOrderStockRequest {
    pub password: String,
    pub symbol: String,
    pub exchange: StockExchange,
    pub security_type: SecurityType,
    pub side: Side,
    pub cash_margin: CashMargin,
    pub margin_trade_type: MarginTradeType,
    pub deliv_type: DelivType,
    pub fund_type: FundType,
    pub account_type: AccountType,
    pub qty: u64,
    #[serde(default)]
    pub close_position_order: ClosePositionOrder,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub close_positions: Vec<ClosePosition>,
    #[serde(deserialize_with = "rust_decimal::serde::float::deserialize")]
    pub price: Decimal,
    pub expire_day: YmdNum,
    pub front_order_type: StockFrontOrderType,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ClosePosition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ClosePosition>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole prices go out as integers (`0`, `3000`), others as floats
fn serialize_price<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    match price.fract().is_zero().then(|| price.to_i64()).flatten() {
        Some(whole) => serializer.serialize_i64(whole),
        None => rust_decimal::serde::float::serialize(price, serializer),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendOrderStockPayload<'a> {
    password: &'a str,
    symbol: &'a str,
    exchange: StockExchange,
    security_type: SecurityType,
    side: Side,
    cash_margin: CashMargin,
    margin_trade_type: MarginTradeType,
    deliv_type: DelivType,
    fund_type: FundType,
    account_type: AccountType,
    qty: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    close_position_order: Option<ClosePositionOrder>,
    /// Outer `None` omits the key, inner `None` sends `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    close_positions: Option<Option<&'a [ClosePosition]>>,
    #[serde(serialize_with = "serialize_price")]
    price: Decimal,
    expire_day: YmdNum,
    front_order_type: StockFrontOrderType,
}

impl SendOrderStockRequest {
    fn payload(&self) -> SendOrderStockPayload<'_> {
        let close_positions = self.close_positions.as_slice();
        let (close_position_order, close_positions) = match self.cash_margin.is_margin() {
            true if !close_positions.is_empty() => (None, Some(Some(close_positions))),
            true => (Some(self.close_position_order), None),
            false => (
                Some(self.close_position_order),
                Some((!close_positions.is_empty()).then_some(close_positions)),
            ),
        };

        SendOrderStockPayload {
            password: &self.password,
            symbol: &self.symbol,
            exchange: self.exchange,
            security_type: self.security_type,
            side: self.side,
            cash_margin: self.cash_margin,
            margin_trade_type: self.margin_trade_type,
            deliv_type: self.deliv_type,
            fund_type: self.fund_type,
            account_type: self.account_type,
            qty: self.qty,
            close_position_order,
            close_positions,
            price: self.price,
            expire_day: self.expire_day,
            front_order_type: self.front_order_type,
        }
    }
}

impl Serialize for SendOrderStockRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelOrderRequest {
    pub order_id: String,
    pub password: String,
}

/// Filters for the positions query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionsRequest {
    pub product: Product,
    pub symbol: Option<String>,
    pub side: Option<Side>,
    /// Include valuation fields (current price, profit/loss)
    pub addinfo: Option<bool>,
}

impl Default for PositionsRequest {
    fn default() -> Self {
        Self {
            product: Product::All,
            symbol: None,
            side: None,
            addinfo: None,
        }
    }
}

impl PositionsRequest {
    pub fn query(&self) -> QueryParams {
        let mut params = vec![("product", self.product.code().to_string())];
        if let Some(symbol) = &self.symbol {
            params.push(("symbol", symbol.clone()));
        }
        if let Some(side) = self.side {
            params.push(("side", side.code().to_string()));
        }
        if let Some(addinfo) = self.addinfo {
            params.push(("addinfo", addinfo.to_string()));
        }
        params
    }
}

/// Filters for the orders query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersRequest {
    pub product: Product,
    pub id: Option<String>,
    /// Only orders updated after this local time
    pub updtime: Option<NaiveDateTime>,
    pub details: Option<bool>,
    pub symbol: Option<String>,
    pub state: Option<State>,
    pub side: Option<Side>,
    pub cash_margin: Option<CashMargin>,
}

impl Default for OrdersRequest {
    fn default() -> Self {
        Self {
            product: Product::All,
            id: None,
            updtime: None,
            details: None,
            symbol: None,
            state: None,
            side: None,
            cash_margin: None,
        }
    }
}

impl OrdersRequest {
    pub fn query(&self) -> QueryParams {
        let mut params = vec![("product", self.product.code().to_string())];
        if let Some(id) = &self.id {
            params.push(("id", id.clone()));
        }
        if let Some(updtime) = self.updtime {
            params.push(("updtime", updtime.format("%Y%m%d%H%M%S").to_string()));
        }
        if let Some(details) = self.details {
            params.push(("details", details.to_string()));
        }
        if let Some(symbol) = &self.symbol {
            params.push(("symbol", symbol.clone()));
        }
        if let Some(state) = self.state {
            params.push(("state", state.code().to_string()));
        }
        if let Some(side) = self.side {
            params.push(("side", side.code().to_string()));
        }
        if let Some(cash_margin) = self.cash_margin {
            params.push(("cashmargin", cash_margin.code().to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRequest {
    pub symbol: String,
    pub exchange: Exchange,
    /// Include market capitalization, upper/lower limits and similar extras
    pub addinfo: Option<bool>,
}

impl SymbolRequest {
    pub fn new(symbol: impl Into<String>, exchange: Exchange) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
            addinfo: None,
        }
    }

    pub fn path_param(&self) -> String {
        format!("{}@{}", self.symbol, self.exchange.code())
    }

    pub fn query(&self) -> QueryParams {
        self.addinfo
            .map(|addinfo| vec![("addinfo", addinfo.to_string())])
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRequest {
    pub symbol: String,
    pub exchange: Exchange,
}

impl BoardRequest {
    pub fn new(symbol: impl Into<String>, exchange: Exchange) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
        }
    }

    pub fn path_param(&self) -> String {
        format!("{}@{}", self.symbol, self.exchange.code())
    }
}

/// Cash buying power, optionally for one symbol
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletCashRequest {
    pub symbol: Option<SymbolKey>,
}

/// Margin buying power, optionally for one symbol
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletMarginRequest {
    pub symbol: Option<SymbolKey>,
}

/// Symbols to add to the push-notification list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterRequest {
    pub symbols: Vec<SymbolKey>,
}

/// Symbols to remove from the push-notification list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnregisterRequest {
    pub symbols: Vec<SymbolKey>,
}
