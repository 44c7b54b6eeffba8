//! Core types

use crate::currency::{Currency, CurrencyPair};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Price type
pub type Price = f64;

/// One observation of a currency pair at a point in time
///
/// Field order is the order keys appear in the written JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    #[serde(with = "extended_date")]
    pub time: Timestamp,
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub sell_price: Price,
    pub buy_price: Price,
}

impl ExchangeRecord {
    /// Create a new record for `pair`
    pub fn new(pair: CurrencyPair, time: Timestamp, sell_price: Price, buy_price: Price) -> Self {
        Self {
            time,
            from_currency: pair.from,
            to_currency: pair.to,
            sell_price,
            buy_price,
        }
    }

    /// Get the traded pair
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.from_currency, self.to_currency)
    }

    /// Get the gap between sell and buy price
    pub fn spread(&self) -> Price {
        self.sell_price - self.buy_price
    }
}

/// Format a timestamp as whole-second ISO-8601 with a `Z` suffix
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `{"$date": "..."}` wrapper that marks the string as a date for
/// document-store importers.
mod extended_date {
    use super::{format_timestamp, Timestamp};
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct DateDocument {
        #[serde(rename = "$date")]
        date: String,
    }

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DateDocument {
            date: format_timestamp(ts),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let doc = DateDocument::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&doc.date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
