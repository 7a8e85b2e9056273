//! Portfolio metrics: one structured snapshot per ledger state
//!
//! `compute` is the single entry point: it resolves every trade once and
//! derives the aggregate, risk and distribution figures from that
//! canonical sequence. Pure function of the ledger content and order;
//! an empty ledger yields the all-zero default snapshot.

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::{distribution, resolver, risk, TradeRecord};

/// Average Gregorian year length in days, used for annualization.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Every portfolio figure derived from the current ledger snapshot.
///
/// Money fields are in account currency, `*_pct`/return fields in
/// percent, ratios dimensionless. `max_drawdown` is a cash decline and
/// therefore <= 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    // Profitability
    pub total_profit_loss: f64,
    pub total_trades: usize,
    pub win_rate: f64,
    pub avg_return: f64,

    // Capital and growth
    pub total_invested: f64,
    pub ending_value: f64,
    pub total_return_pct: f64,
    pub years_in_market: f64,
    pub investment_multiple: f64,
    pub cagr: f64,
    pub annualized_return: f64,

    // Risk
    pub max_drawdown: f64,
    pub volatility: f64,
    pub downside_deviation: f64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    pub rolling_sharpe: f64,
    pub risk_reward_ratio: f64,
    pub expectancy: f64,
    pub recovery_factor: f64,

    // Distribution
    pub skew: f64,
    pub kurtosis: f64,
    pub conditional_var: f64,
    pub drawdown_clustering: f64,
    pub avg_up_return: f64,
    pub avg_down_return: f64,
}

/// Recompute the full snapshot from the given records in ledger order.
pub fn compute(trades: &[TradeRecord]) -> MetricsSnapshot {
    if trades.is_empty() {
        return MetricsSnapshot::default();
    }

    let resolved = resolver::resolve_all(trades);
    let profits: Vec<f64> = resolved.iter().map(|r| r.profit_loss).collect();
    let percents: Vec<f64> = resolved.iter().map(|r| r.percent).collect();

    let total_profit_loss: f64 = profits.iter().sum();
    let winners = profits.iter().filter(|&&p| p > 0.0).count();
    let win_rate = (winners as f64 / trades.len() as f64) * 100.0;

    let total_invested: f64 = trades.iter().map(|t| t.buy_price * t.quantity).sum();
    let ending_value = total_invested + total_profit_loss;
    let total_return_pct = if total_invested > 0.0 {
        (total_profit_loss / total_invested) * 100.0
    } else {
        0.0
    };

    let years_in_market = years_in_market(trades);
    let investment_multiple = if total_invested > 0.0 {
        ending_value / total_invested
    } else {
        0.0
    };
    let annualized_return = if years_in_market > 0.0 {
        total_return_pct / years_in_market
    } else {
        0.0
    };

    let max_drawdown = risk::max_drawdown(&profits);

    MetricsSnapshot {
        total_profit_loss,
        total_trades: trades.len(),
        win_rate,
        avg_return: percents.iter().mean(),
        total_invested,
        ending_value,
        total_return_pct,
        years_in_market,
        investment_multiple,
        cagr: cagr(total_invested, ending_value, years_in_market),
        annualized_return,
        max_drawdown,
        volatility: risk::volatility(&percents),
        downside_deviation: risk::downside_deviation(&percents),
        sharpe_ratio: risk::sharpe_ratio(&percents),
        sortino_ratio: risk::sortino_ratio(&percents),
        rolling_sharpe: risk::rolling_sharpe(&percents),
        risk_reward_ratio: risk::risk_reward_ratio(trades),
        expectancy: risk::expectancy(&profits),
        recovery_factor: risk::recovery_factor(total_profit_loss, max_drawdown),
        skew: distribution::skew(&percents),
        kurtosis: distribution::kurtosis(&percents),
        conditional_var: distribution::conditional_var(&percents),
        drawdown_clustering: distribution::drawdown_clustering(&percents),
        avg_up_return: distribution::avg_up_return(&percents),
        avg_down_return: distribution::avg_down_return(&percents),
    }
}

/// Span between the earliest and latest parseable trade dates, in years.
/// Needs at least two parseable dates; invalid dates are skipped.
fn years_in_market(trades: &[TradeRecord]) -> f64 {
    let dates: Vec<chrono::NaiveDate> = trades.iter().filter_map(|t| t.trade_date()).collect();
    if dates.len() < 2 {
        return 0.0;
    }

    let first = dates.iter().copied().min().unwrap();
    let last = dates.iter().copied().max().unwrap();
    (last - first).num_days() as f64 / DAYS_PER_YEAR
}

/// Compound annual growth rate of ending value over invested capital.
/// Defined only for positive invested capital, a positive time span and a
/// positive growth ratio (a fractional power of a non-positive base has
/// no real value).
fn cagr(invested: f64, ending: f64, years: f64) -> f64 {
    if invested <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    let growth = ending / invested;
    if growth <= 0.0 {
        return 0.0;
    }
    growth.powf(1.0 / years) - 1.0
}
