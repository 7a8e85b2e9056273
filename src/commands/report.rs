//! Report command implementation

use anyhow::Result;
use tracing::info;

use trade_journal::{data, report};

pub fn run(
    config_path: String,
    file_override: Option<String>,
    colored_override: Option<bool>,
) -> Result<()> {
    let (config, data_file) = super::data_file(&config_path, file_override);

    let ledger = data::load_ledger(&data_file)?;
    info!("Computing metrics for {} trades", ledger.len());

    let snapshot = ledger.metrics();
    let colored = colored_override.unwrap_or(config.report.colored);

    if colored {
        println!("{}", report::render_colored(&snapshot));
    } else {
        println!("{}", report::render(&snapshot));
    }

    Ok(())
}
