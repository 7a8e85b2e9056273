//! Per-trade resolution of effective profit/loss and percent return
//!
//! Every portfolio metric consumes the resolved sequence produced here
//! rather than re-checking the override fields itself.

use crate::TradeRecord;

/// Effective result of one trade after override-or-derive resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedTrade {
    pub profit_loss: f64,
    pub percent: f64,
}

/// Resolve the effective profit/loss and percent return for one record.
///
/// An explicit override wins when present. Otherwise the value is derived
/// from the entry/exit prices when they are usable and folds to 0 when
/// they are not. Pure and infallible.
pub fn resolve(trade: &TradeRecord) -> ResolvedTrade {
    ResolvedTrade {
        profit_loss: trade
            .profit_loss
            .unwrap_or_else(|| derived_profit_loss(trade)),
        percent: trade.percent.unwrap_or_else(|| derived_percent(trade)),
    }
}

/// Resolve every record, preserving ledger order.
pub fn resolve_all(trades: &[TradeRecord]) -> Vec<ResolvedTrade> {
    trades.iter().map(resolve).collect()
}

fn derived_profit_loss(trade: &TradeRecord) -> f64 {
    if trade.buy_price > 0.0 && trade.sell_price > 0.0 && trade.quantity > 0.0 {
        (trade.sell_price - trade.buy_price) * trade.quantity
    } else {
        0.0
    }
}

fn derived_percent(trade: &TradeRecord) -> f64 {
    if trade.buy_price > 0.0 && trade.sell_price > 0.0 {
        ((trade.sell_price - trade.buy_price) / trade.buy_price) * 100.0
    } else {
        0.0
    }
}
