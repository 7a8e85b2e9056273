//! Integration tests for the trading journal engine
//!
//! These exercise the full pipeline: drafts through the validated
//! ledger append, per-trade resolution, and the recomputed metrics
//! snapshot.

use approx::assert_relative_eq;

use trade_journal::risk::SORTINO_UNBOUNDED;
use trade_journal::{data, metrics, TradeDraft, TradeLedger};

// =============================================================================
// Test Utilities
// =============================================================================

/// Draft with usable entry/exit prices so P/L and percent derive.
fn priced_draft(symbol: &str, buy: &str, sell: &str, qty: &str) -> TradeDraft {
    TradeDraft {
        symbol: symbol.to_string(),
        buy_price: buy.to_string(),
        sell_price: sell.to_string(),
        quantity: qty.to_string(),
        ..Default::default()
    }
}

/// Draft carrying explicit overrides, for shaping exact return sequences.
fn override_draft(symbol: &str, profit_loss: &str, percent: &str) -> TradeDraft {
    TradeDraft {
        symbol: symbol.to_string(),
        buy_price: "1".to_string(),
        profit_loss: profit_loss.to_string(),
        percent: percent.to_string(),
        ..Default::default()
    }
}

fn ledger_of(drafts: Vec<TradeDraft>) -> TradeLedger {
    let mut ledger = TradeLedger::new();
    for draft in drafts {
        ledger.add(draft);
    }
    ledger
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_single_trade_headline_figures() {
    let ledger = ledger_of(vec![priced_draft("AAPL", "100", "110", "10")]);
    let snapshot = ledger.metrics();

    assert_relative_eq!(snapshot.total_profit_loss, 100.0);
    assert_relative_eq!(snapshot.avg_return, 10.0);
    assert_relative_eq!(snapshot.win_rate, 100.0);
    assert_eq!(snapshot.total_trades, 1);
    // Dispersion ratios are undefined below two trades.
    assert_eq!(snapshot.sharpe_ratio, 0.0);
    assert_eq!(snapshot.sortino_ratio, 0.0);
}

#[test]
fn test_symmetric_returns() {
    let ledger = ledger_of(vec![
        override_draft("A", "", "10"),
        override_draft("B", "", "-10"),
    ]);
    let snapshot = ledger.metrics();

    assert_relative_eq!(snapshot.avg_return, 0.0);
    assert_relative_eq!(snapshot.volatility, 10.0);
    // Zero mean over non-zero spread.
    assert_relative_eq!(snapshot.sharpe_ratio, 0.0);
    // Single-loss subset has zero spread, so the Sortino guard fires.
    assert_relative_eq!(snapshot.sortino_ratio, 0.0);
    assert_relative_eq!(snapshot.downside_deviation, 0.0);
}

#[test]
fn test_all_positive_returns_hit_sortino_sentinel() {
    let ledger = ledger_of(vec![
        override_draft("A", "", "5"),
        override_draft("B", "", "8"),
        override_draft("C", "", "3"),
    ]);
    let snapshot = ledger.metrics();

    assert_eq!(snapshot.sortino_ratio, SORTINO_UNBOUNDED);
    assert!(snapshot.sharpe_ratio > 0.0);
}

#[test]
fn test_drawdown_from_cumulative_profit() {
    // Cumulative P/L [50, 30, 80]: peak [50, 50, 80], drawdown [0, -20, 0].
    let ledger = ledger_of(vec![
        override_draft("A", "50", ""),
        override_draft("B", "-20", ""),
        override_draft("C", "50", ""),
    ]);
    let snapshot = ledger.metrics();

    assert_relative_eq!(snapshot.max_drawdown, -20.0);
    assert_relative_eq!(snapshot.total_profit_loss, 80.0);
    assert_relative_eq!(snapshot.recovery_factor, 4.0);
}

#[test]
fn test_conditional_var_worst_tail() {
    let ledger = ledger_of(vec![
        override_draft("A", "", "-30"),
        override_draft("B", "", "-5"),
        override_draft("C", "", "2"),
        override_draft("D", "", "8"),
        override_draft("E", "", "10"),
    ]);
    let snapshot = ledger.metrics();

    // N = 5: tail count max(1, floor(0.25)) = 1, the single worst return.
    assert_relative_eq!(snapshot.conditional_var, -30.0);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_empty_ledger_all_metrics_zero() {
    let ledger = TradeLedger::new();
    let snapshot = ledger.metrics();

    assert_eq!(snapshot, trade_journal::MetricsSnapshot::default());
    assert_eq!(snapshot.total_trades, 0);
    assert!(snapshot.total_profit_loss.is_finite());
    assert_eq!(snapshot.win_rate, 0.0);
    assert_eq!(snapshot.cagr, 0.0);
}

#[test]
fn test_metrics_are_pure_over_ledger_content() {
    let ledger = ledger_of(vec![
        priced_draft("AAPL", "100", "110", "10"),
        priced_draft("MSFT", "50", "45", "20"),
        priced_draft("NVDA", "200", "260", "5"),
    ]);

    let first = ledger.metrics();
    let second = ledger.metrics();
    assert_eq!(first, second);
}

#[test]
fn test_add_then_remove_is_inverse() {
    let mut ledger = ledger_of(vec![
        priced_draft("AAPL", "100", "110", "10"),
        priced_draft("MSFT", "50", "45", "20"),
    ]);
    let before_trades = ledger.trades().to_vec();
    let before_metrics = ledger.metrics();

    let id = ledger
        .add(priced_draft("NVDA", "200", "260", "5"))
        .unwrap()
        .id;
    ledger.remove(id);

    assert_eq!(ledger.trades(), before_trades.as_slice());
    assert_eq!(ledger.metrics(), before_metrics);
}

#[test]
fn test_rejected_draft_leaves_ledger_unchanged() {
    let mut ledger = ledger_of(vec![priced_draft("AAPL", "100", "110", "10")]);
    let before = ledger.metrics();

    ledger.add(priced_draft("", "100", "110", "10"));
    ledger.add(priced_draft("MSFT", "", "110", "10"));
    ledger.add(priced_draft("MSFT", "about 50", "110", "10"));

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.metrics(), before);
}

#[test]
fn test_metric_ranges() {
    let ledger = ledger_of(vec![
        priced_draft("A", "100", "110", "10"),
        priced_draft("B", "100", "90", "10"),
        priced_draft("C", "100", "105", "10"),
        priced_draft("D", "100", "85", "10"),
        priced_draft("E", "100", "130", "10"),
    ]);
    let snapshot = ledger.metrics();

    assert!(snapshot.win_rate >= 0.0 && snapshot.win_rate <= 100.0);
    assert!(snapshot.volatility >= 0.0);
    assert!(snapshot.downside_deviation >= 0.0);
    assert!(snapshot.max_drawdown <= 0.0);
    // Recovery factor carries the sign of the total P/L when a drawdown exists.
    assert!(snapshot.max_drawdown != 0.0);
    assert_eq!(
        snapshot.recovery_factor > 0.0,
        snapshot.total_profit_loss > 0.0
    );
}

#[test]
fn test_override_takes_precedence_in_aggregate() {
    // Derived P/L would be +100; the override flips the trade to a loss.
    let mut draft = priced_draft("AAPL", "100", "110", "10");
    draft.profit_loss = "-40".to_string();
    draft.percent = "-4".to_string();

    let ledger = ledger_of(vec![draft]);
    let snapshot = ledger.metrics();

    assert_relative_eq!(snapshot.total_profit_loss, -40.0);
    assert_relative_eq!(snapshot.avg_return, -4.0);
    assert_relative_eq!(snapshot.win_rate, 0.0);
}

#[test]
fn test_rolling_sharpe_only_sees_recent_window() {
    // 20 identical recent returns: the rolling window has zero spread while
    // the full history does not.
    let mut drafts = vec![
        override_draft("OLD1", "", "60"),
        override_draft("OLD2", "", "-60"),
    ];
    for i in 0..20 {
        drafts.push(override_draft(&format!("T{}", i), "", "2"));
    }
    let snapshot = ledger_of(drafts).metrics();

    assert_eq!(snapshot.rolling_sharpe, 0.0);
    assert!(snapshot.sharpe_ratio != 0.0);
}

#[test]
fn test_insertion_order_drives_sequence_metrics() {
    let alternating = ledger_of(vec![
        override_draft("A", "50", "5"),
        override_draft("C", "-30", "-3"),
        override_draft("B", "50", "5"),
        override_draft("D", "-30", "-3"),
    ]);
    let losers_first = ledger_of(vec![
        override_draft("C", "-30", "-3"),
        override_draft("D", "-30", "-3"),
        override_draft("A", "50", "5"),
        override_draft("B", "50", "5"),
    ]);

    // Same multiset of trades, different order, different drawdown path.
    assert_relative_eq!(alternating.metrics().max_drawdown, -30.0);
    assert_relative_eq!(losers_first.metrics().max_drawdown, -60.0);
    assert_relative_eq!(alternating.metrics().total_profit_loss, 40.0);

    // Order-independent metrics agree.
    assert_relative_eq!(
        alternating.metrics().volatility,
        losers_first.metrics().volatility,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        alternating.metrics().conditional_var,
        losers_first.metrics().conditional_var
    );
}

#[test]
fn test_drawdown_clustering_counts_streaks() {
    let ledger = ledger_of(vec![
        override_draft("A", "", "4"),
        override_draft("B", "", "-1"),
        override_draft("C", "", "-2"),
        override_draft("D", "", "3"),
        override_draft("E", "", "-1"),
    ]);
    // Streaks of length 2 and 1.
    assert_relative_eq!(ledger.metrics().drawdown_clustering, 1.5);
}

#[test]
fn test_regime_split() {
    let ledger = ledger_of(vec![
        override_draft("A", "", "10"),
        override_draft("B", "", "0"),
        override_draft("C", "", "-4"),
        override_draft("D", "", "-6"),
    ]);
    let snapshot = ledger.metrics();

    assert_relative_eq!(snapshot.avg_up_return, 5.0);
    assert_relative_eq!(snapshot.avg_down_return, -5.0);
}

// =============================================================================
// Journal File Round Trip
// =============================================================================

#[test]
fn test_journal_file_round_trip_preserves_metrics() {
    let path = std::env::temp_dir().join(format!(
        "trade_journal_integration_{}.csv",
        std::process::id()
    ));

    let mut ledger = ledger_of(vec![
        priced_draft("AAPL", "100", "110", "10"),
        priced_draft("MSFT", "50", "45", "20"),
    ]);
    ledger.add(TradeDraft {
        date: "2024-05-01".to_string(),
        symbol: "NVDA".to_string(),
        buy_price: "200".to_string(),
        quantity: "5".to_string(),
        stop_loss: "180".to_string(),
        profit_loss: "120".to_string(),
        notes: "held through earnings, sized down".to_string(),
        ..Default::default()
    });

    data::save_journal(&path, ledger.trades()).unwrap();
    let reloaded = data::load_ledger(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(reloaded.len(), ledger.len());
    assert_eq!(reloaded.metrics(), ledger.metrics());
}

#[test]
fn test_compute_matches_ledger_metrics() {
    let ledger = ledger_of(vec![
        priced_draft("AAPL", "100", "110", "10"),
        priced_draft("MSFT", "50", "45", "20"),
    ]);

    assert_eq!(metrics::compute(ledger.trades()), ledger.metrics());
}
