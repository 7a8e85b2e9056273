//! Core data types for the trading journal

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw trade fields as captured at the entry boundary (a form, a CSV row,
/// CLI flags). Every field is free text; parsing happens when the ledger
/// accepts the draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeDraft {
    pub date: String,
    pub symbol: String,
    pub buy_price: String,
    pub quantity: String,
    pub sell_price: String,
    pub stop_loss: String,
    pub profit_loss: String,
    pub percent: String,
    pub entry_logic: String,
    pub exit_logic: String,
    pub notes: String,
}

/// A recorded trade. Immutable after creation; the only ledger mutations
/// are append and remove-by-id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Ledger-assigned identifier, unique for the life of the process.
    pub id: u64,
    /// Calendar date as entered. Parsed on demand; may be empty or invalid.
    pub date: String,
    pub symbol: String,
    pub buy_price: f64,
    pub quantity: f64,
    pub sell_price: f64,
    pub stop_loss: f64,
    /// Explicit profit/loss override; wins over the derived value.
    pub profit_loss: Option<f64>,
    /// Explicit percent-return override; wins over the derived value.
    pub percent: Option<f64>,
    pub entry_logic: String,
    pub exit_logic: String,
    pub notes: String,
}

impl TradeRecord {
    /// Parse the entered date, if it is usable for time-axis math.
    pub fn trade_date(&self) -> Option<NaiveDate> {
        parse_trade_date(&self.date)
    }
}

/// Parse a numeric field, folding absent or malformed input to 0.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse an optional override field; empty or malformed input counts as
/// absent, so derivation takes over downstream.
pub fn parse_override(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a trade date string (YYYY-MM-DD, YYYY/MM/DD or MM/DD/YYYY).
pub fn parse_trade_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}
