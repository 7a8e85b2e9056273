//! List command implementation

use anyhow::Result;

use trade_journal::{data, resolver};

pub fn run(config_path: String, file_override: Option<String>) -> Result<()> {
    let (_config, data_file) = super::data_file(&config_path, file_override);
    let ledger = data::load_ledger(&data_file)?;

    if ledger.is_empty() {
        println!("Journal is empty.");
        return Ok(());
    }

    println!(
        "{:>4} {:>12} {:<8} {:>10} {:>8} {:>10} {:>10} {:>12} {:>9}  {}",
        "ID", "Date", "Symbol", "Buy", "Qty", "Sell", "Stop", "P/L", "Percent", "Notes"
    );
    println!("{}", "-".repeat(100));

    for trade in ledger.trades() {
        let resolved = resolver::resolve(trade);
        println!(
            "{:>4} {:>12} {:<8} {:>10.2} {:>8} {:>10.2} {:>10.2} {:>12.2} {:>8.2}%  {}",
            trade.id,
            if trade.date.is_empty() { "-" } else { &trade.date },
            trade.symbol,
            trade.buy_price,
            trade.quantity,
            trade.sell_price,
            trade.stop_loss,
            resolved.profit_loss,
            resolved.percent,
            trade.notes,
        );
    }
    println!("{}", "-".repeat(100));
    println!("{} trades", ledger.len());

    Ok(())
}
