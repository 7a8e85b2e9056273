//! Journal file import and export
//!
//! The journal is a headered CSV, one row per trade in ledger order.
//! Loading replays every row through the ledger's validated append, so a
//! file obeys exactly the same invariants as interactive entry; rows the
//! ledger rejects are skipped with a warning instead of aborting.

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::{TradeDraft, TradeLedger, TradeRecord};

/// Journal column order. Matches `TradeDraft` field order.
pub const JOURNAL_HEADER: [&str; 11] = [
    "date",
    "symbol",
    "buy_price",
    "quantity",
    "sell_price",
    "stop_loss",
    "profit_loss",
    "percent",
    "entry_logic",
    "exit_logic",
    "notes",
];

/// A journal row that cannot be turned into a trade draft.
#[derive(Debug, Error)]
pub enum JournalRowError {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
}

/// Read a journal file into raw trade drafts, skipping malformed rows.
pub fn load_journal(path: impl AsRef<Path>) -> Result<Vec<TradeDraft>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open journal file {}", path.display()))?;

    let mut drafts = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        match draft_from_row(&record) {
            Ok(draft) => drafts.push(draft),
            Err(e) => {
                skipped += 1;
                // +2 for the 1-indexed count and the header row
                warn!("Skipping row {} in {}: {}", row_idx + 2, path.display(), e);
            }
        }
    }

    if skipped > 0 {
        warn!(
            "Skipped {} malformed rows out of {} in {}",
            skipped,
            skipped + drafts.len(),
            path.display()
        );
    }

    Ok(drafts)
}

/// Load a journal file into a fresh ledger. A missing file is an empty
/// journal, not an error.
pub fn load_ledger(path: impl AsRef<Path>) -> Result<TradeLedger> {
    let path = path.as_ref();
    let mut ledger = TradeLedger::new();

    if !path.exists() {
        info!("Journal file {} not found, starting empty", path.display());
        return Ok(ledger);
    }

    let drafts = load_journal(path)?;
    let total = drafts.len();
    let mut rejected = 0;

    for draft in drafts {
        if ledger.add(draft).is_none() {
            rejected += 1;
        }
    }

    if rejected > 0 {
        warn!(
            "Rejected {} of {} journal rows (missing symbol or unusable buy price)",
            rejected, total
        );
    }
    info!("Loaded {} trades from {}", ledger.len(), path.display());

    Ok(ledger)
}

/// Write records back out, one row per record in insertion order.
pub fn save_journal(path: impl AsRef<Path>, trades: &[TradeRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create journal file {}", path.display()))?;

    writer.write_record(JOURNAL_HEADER)?;
    for trade in trades {
        writer.write_record([
            trade.date.clone(),
            trade.symbol.clone(),
            trade.buy_price.to_string(),
            trade.quantity.to_string(),
            trade.sell_price.to_string(),
            trade.stop_loss.to_string(),
            trade.profit_loss.map(|v| v.to_string()).unwrap_or_default(),
            trade.percent.map(|v| v.to_string()).unwrap_or_default(),
            trade.entry_logic.clone(),
            trade.exit_logic.clone(),
            trade.notes.clone(),
        ])?;
    }
    writer.flush()?;

    info!("Saved {} trades to {}", trades.len(), path.display());
    Ok(())
}

fn draft_from_row(record: &csv::StringRecord) -> Result<TradeDraft, JournalRowError> {
    if record.len() != JOURNAL_HEADER.len() {
        return Err(JournalRowError::ColumnCount {
            expected: JOURNAL_HEADER.len(),
            found: record.len(),
        });
    }

    let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
    Ok(TradeDraft {
        date: field(0),
        symbol: field(1),
        buy_price: field(2),
        quantity: field(3),
        sell_price: field(4),
        stop_loss: field(5),
        profit_loss: field(6),
        percent: field(7),
        entry_logic: field(8),
        exit_logic: field(9),
        notes: field(10),
    })
}
