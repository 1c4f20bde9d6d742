/*
[INPUT]:  Numeric yyyymmdd dates used by the API
[OUTPUT]: YmdNum date wrapper with serialization support
[POS]:    Data layer - date encoding shared by requests and responses
[UPDATE]: When the API changes its date encoding
*/

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date carried as the number `yyyymmdd`; `0` means unspecified
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct YmdNum(Option<NaiveDate>);

impl YmdNum {
    /// Unspecified date (`0` on the wire); for order expiry this means today
    pub const UNSPECIFIED: YmdNum = YmdNum(None);

    /// `None` for years outside 1..=9999, which have no `yyyymmdd` form
    pub fn new(date: NaiveDate) -> Option<Self> {
        (1..=9999).contains(&date.year()).then_some(Self(Some(date)))
    }

    /// Build from year, month and day; `None` if the date does not exist
    /// or cannot be encoded
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::new)
    }

    /// Decode `yyyymmdd`; `0` is unspecified
    pub fn from_number(value: u32) -> Option<Self> {
        if value == 0 {
            return Some(Self::UNSPECIFIED);
        }
        Self::from_ymd((value / 10_000) as i32, (value / 100) % 100, value % 100)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_unspecified(&self) -> bool {
        self.0.is_none()
    }

    pub fn to_number(&self) -> u32 {
        match self.0 {
            Some(date) => date.year() as u32 * 10_000 + date.month() * 100 + date.day(),
            None => 0,
        }
    }
}

impl fmt::Display for YmdNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_number())
    }
}

impl Serialize for YmdNum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_number())
    }
}

impl<'de> Deserialize<'de> for YmdNum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<u32>::deserialize(deserializer)?.unwrap_or(0);
        YmdNum::from_number(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid yyyymmdd date: {value}")))
    }
}
