//! CLI subcommand implementations

pub mod add;
pub mod list;
pub mod report;

use trade_journal::Config;

/// Resolve the journal file from the CLI override or the configuration.
pub fn data_file(config_path: &str, file_override: Option<String>) -> (Config, String) {
    let config = Config::load_or_default(config_path);
    let data_file = file_override.unwrap_or_else(|| config.journal.data_file.clone());
    (config, data_file)
}
