//! Trade ledger: the ordered record store behind every metric
//!
//! Holds records in insertion order, which is significant for the
//! drawdown walk, rolling windows and streak analysis downstream.
//! Append is validated (a bad draft is a no-op, not an error) and ids
//! are assigned from a process-lifetime monotonic counter.

use tracing::debug;

use crate::metrics::{self, MetricsSnapshot};
use crate::types::{parse_amount, parse_override};
use crate::{TradeDraft, TradeRecord};

#[derive(Debug, Clone)]
pub struct TradeLedger {
    records: Vec<TradeRecord>,
    next_id: u64,
}

impl TradeLedger {
    pub fn new() -> Self {
        TradeLedger {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Validated append. A draft is accepted only when its symbol is
    /// non-empty and its buy price parses to a finite number; otherwise
    /// the ledger is left unchanged and `None` is returned.
    pub fn add(&mut self, draft: TradeDraft) -> Option<&TradeRecord> {
        let symbol = draft.symbol.trim();
        if symbol.is_empty() {
            debug!("Rejected trade draft: empty symbol");
            return None;
        }

        let buy_price = match draft.buy_price.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                debug!(symbol, buy_price = %draft.buy_price, "Rejected trade draft: unusable buy price");
                return None;
            }
        };

        let record = TradeRecord {
            id: self.next_id,
            date: draft.date.trim().to_string(),
            symbol: symbol.to_string(),
            buy_price,
            quantity: parse_amount(&draft.quantity),
            sell_price: parse_amount(&draft.sell_price),
            stop_loss: parse_amount(&draft.stop_loss),
            profit_loss: parse_override(&draft.profit_loss),
            percent: parse_override(&draft.percent),
            entry_logic: draft.entry_logic.trim().to_string(),
            exit_logic: draft.exit_logic.trim().to_string(),
            notes: draft.notes.trim().to_string(),
        };

        self.next_id += 1;
        self.records.push(record);
        self.records.last()
    }

    /// Remove the record with the given id; no-op when absent. Ids are
    /// never reused, so the relative order of the survivors is the
    /// original insertion order.
    pub fn remove(&mut self, id: u64) {
        self.records.retain(|record| record.id != id);
    }

    /// Records in insertion order.
    pub fn trades(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recompute the full metrics snapshot from the current ledger
    /// content. Same content and order always yield the same snapshot.
    pub fn metrics(&self) -> MetricsSnapshot {
        metrics::compute(&self.records)
    }
}

impl Default for TradeLedger {
    fn default() -> Self {
        Self::new()
    }
}
