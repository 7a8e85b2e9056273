//! Trading journal performance analytics
//!
//! The core engine of a trading journal: an ordered ledger of trade
//! records, per-trade override-or-derive resolution, and a battery of
//! portfolio statistics (profitability, growth, risk and distribution
//! measures) recomputed on demand from the current ledger snapshot.
//!
//! The engine is synchronous and infallible by design: malformed numeric
//! input folds to 0, invalid dates drop off the time axis, and degenerate
//! statistics (no trades, zero variance, no losers) resolve to defined
//! zeros or a sentinel instead of raising.
//!
//! # Example
//!
//! ```
//! use trade_journal::{TradeDraft, TradeLedger};
//!
//! let mut ledger = TradeLedger::new();
//! ledger.add(TradeDraft {
//!     symbol: "AAPL".to_string(),
//!     buy_price: "100".to_string(),
//!     sell_price: "110".to_string(),
//!     quantity: "10".to_string(),
//!     ..Default::default()
//! });
//!
//! let snapshot = ledger.metrics();
//! assert_eq!(snapshot.total_profit_loss, 100.0);
//! assert_eq!(snapshot.win_rate, 100.0);
//! ```

pub mod config;
pub mod data;
pub mod distribution;
pub mod ledger;
pub mod metrics;
pub mod report;
pub mod resolver;
pub mod risk;
pub mod types;

pub use config::Config;
pub use ledger::TradeLedger;
pub use metrics::MetricsSnapshot;
pub use resolver::{resolve, ResolvedTrade};
pub use types::{TradeDraft, TradeRecord};
