/*
[INPUT]:  API code tables (numeric and string codes)
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API code tables change or new codes are added
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares an enum that travels as a JSON number
///
/// Codes without a named variant decode into `Unknown(code)` and encode back
/// unchanged, so one unfamiliar row never fails a whole list response.
macro_rules! numeric_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "i32", into = "i32")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Code not listed in this table
            Unknown(i32),
        }

        impl $name {
            pub fn code(self) -> i32 {
                match self {
                    $($name::$variant => $code,)+
                    $name::Unknown(code) => code,
                }
            }

            pub fn is_known(self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                match code {
                    $(c if c == $code => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

numeric_code! {
    /// Product filter for positions and orders queries
    pub enum Product {
        All = 0,
        Stock = 1,
        Margin = 2,
        Future = 3,
        Option = 4,
    }
}

numeric_code! {
    /// Market code used by symbol lookups and returned in responses
    pub enum Exchange {
        Unspecified = 0,
        Toushou = 1,
        /// Derivatives, whole session
        All = 2,
        Meishou = 3,
        Fukushou = 5,
        Satsushou = 6,
        /// Smart order routing
        Sor = 9,
        /// Derivatives, day session
        Daytime = 23,
        /// Derivatives, night session
        Evening = 24,
    }
}

numeric_code! {
    /// Market code accepted by stock orders
    pub enum StockExchange {
        Toushou = 1,
        Meishou = 3,
        Fukushou = 5,
        Satsushou = 6,
    }
}

numeric_code! {
    pub enum SecurityType {
        Unspecified = 0,
        Stock = 1,
        Nikkei225Future = 101,
        Nikkei225MiniFuture = 103,
        TopixFuture = 107,
        Jpx400Future = 108,
        DowFuture = 121,
        NikkeiViFuture = 122,
        TopixMiniFuture = 133,
    }
}

numeric_code! {
    pub enum CashMargin {
        Unspecified = 0,
        Cash = 1,
        MarginEntry = 2,
        MarginExit = 3,
    }
}

impl CashMargin {
    pub fn is_margin(self) -> bool {
        matches!(self, CashMargin::MarginEntry | CashMargin::MarginExit)
    }
}

numeric_code! {
    pub enum MarginTradeType {
        Unspecified = 0,
        System = 1,
        GeneralLong = 2,
        GeneralDay = 3,
    }
}

numeric_code! {
    /// Settlement method; cash sells and margin exits use `Unspecified`
    pub enum DelivType {
        Unspecified = 0,
        Deposit = 2,
        AuMoneyConnect = 3,
    }
}

numeric_code! {
    pub enum AccountType {
        Unspecified = 0,
        General = 2,
        Specific = 4,
        Corporation = 12,
    }
}

numeric_code! {
    /// Order in which held positions are closed by a margin exit
    pub enum ClosePositionOrder {
        DateAscProfitDesc = 0,
        DateAscProfitAsc = 1,
        DateDescProfitDesc = 2,
        DateDescProfitAsc = 3,
        ProfitDescDateAsc = 4,
        ProfitDescDateDesc = 5,
        ProfitAscDateAsc = 6,
        ProfitAscDateDesc = 7,
    }
}

impl Default for ClosePositionOrder {
    fn default() -> Self {
        ClosePositionOrder::DateAscProfitDesc
    }
}

numeric_code! {
    /// Execution condition of a stock order
    pub enum StockFrontOrderType {
        Unspecified = 0,
        Market = 10,
        MarketOpenMorning = 13,
        MarketOpenAfternoon = 14,
        MarketCloseMorning = 15,
        MarketCloseAfternoon = 16,
        IocMarket = 17,
        Limit = 20,
        LimitOpenMorning = 21,
        LimitOpenAfternoon = 22,
        LimitCloseMorning = 23,
        LimitCloseAfternoon = 24,
        FunariMorning = 25,
        FunariAfternoon = 26,
        IocLimit = 27,
        Stop = 30,
    }
}

numeric_code! {
    pub enum State {
        Unspecified = 0,
        Wait = 1,
        Processing = 2,
        Processed = 3,
        InModify = 4,
        Done = 5,
    }
}

numeric_code! {
    pub enum OrderState {
        Unspecified = 0,
        Wait = 1,
        Processing = 2,
        Processed = 3,
        InModify = 4,
        Done = 5,
    }
}

numeric_code! {
    pub enum OrdType {
        InTrading = 0,
        Open = 1,
        Close = 2,
        Funari = 3,
        MarketToLimit = 4,
        Ioc = 5,
    }
}

numeric_code! {
    /// Kind of an order detail row
    pub enum RecType {
        Unspecified = 0,
        Receive = 1,
        Carried = 2,
        Expired = 3,
        Ordered = 4,
        Modified = 5,
        Canceled = 6,
        RevocationExpired = 7,
        Contracted = 8,
    }
}

numeric_code! {
    pub enum PutOrCall {
        Unspecified = 0,
        Put = 1,
        Call = 2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "1")]
    Sell,
    #[serde(rename = "2")]
    Buy,
}

impl Side {
    pub fn code(self) -> &'static str {
        match self {
            Side::Sell => "1",
            Side::Buy => "2",
        }
    }
}

/// Asset class used to pay for a stock order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundType {
    /// Cash sells and margin exits
    #[serde(rename = "  ")]
    Unspecified,
    #[serde(rename = "02")]
    Protected,
    #[serde(rename = "AA")]
    TransferMargin,
    #[serde(rename = "11")]
    MarginTrading,
}
