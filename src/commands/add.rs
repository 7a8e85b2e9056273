//! Add command implementation

use anyhow::Result;
use tracing::{info, warn};

use trade_journal::{data, resolver, TradeDraft};

pub fn run(config_path: String, file_override: Option<String>, draft: TradeDraft) -> Result<()> {
    let (_config, data_file) = super::data_file(&config_path, file_override);

    let mut ledger = data::load_ledger(&data_file)?;
    let before = ledger.len();

    match ledger.add(draft) {
        Some(record) => {
            let resolved = resolver::resolve(record);
            info!(
                "Added trade #{} {} (P/L ${:.2}, {:.2}%)",
                record.id, record.symbol, resolved.profit_loss, resolved.percent
            );
        }
        None => {
            warn!("Trade rejected: a symbol and a numeric buy price are required");
        }
    }

    if ledger.len() > before {
        data::save_journal(&data_file, ledger.trades())?;
    }

    Ok(())
}
