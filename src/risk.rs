//! Risk engine: drawdown, volatility and risk-adjusted return ratios
//!
//! Every function is a single pass over the resolved sequence in ledger
//! order. Degenerate inputs (too few samples, zero variance, empty
//! subsets) fold to 0 rather than failing; only the Sortino no-loss case
//! carries a sentinel.

use statrs::statistics::Statistics;

use crate::TradeRecord;

/// Sortino ratio reported when no losing trade exists and the mean return
/// is positive. Stands in for an unbounded ratio; the report layer
/// displays it as infinity.
pub const SORTINO_UNBOUNDED: f64 = 999.0;

/// Number of most recent trades in the rolling Sharpe window.
pub const ROLLING_SHARPE_WINDOW: usize = 20;

/// Worst decline of cumulative profit below its running peak, walking the
/// resolved P/L sequence in ledger order. Cash terms, not percent: 0 for
/// an empty sequence, otherwise <= 0.
pub fn max_drawdown(profits: &[f64]) -> f64 {
    let mut cumulative = 0.0;
    let mut peak = 0.0;
    let mut max_dd = 0.0_f64;

    for pl in profits {
        cumulative += pl;
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = cumulative - peak;
        if drawdown < max_dd {
            max_dd = drawdown;
        }
    }

    max_dd
}

/// Population standard deviation of the percent-return sequence. Needs at
/// least two samples.
pub fn volatility(percents: &[f64]) -> f64 {
    if percents.len() < 2 {
        return 0.0;
    }
    percents.iter().population_std_dev()
}

/// Population standard deviation over the losing returns only; 0 when no
/// losing return exists.
pub fn downside_deviation(percents: &[f64]) -> f64 {
    let losses: Vec<f64> = percents.iter().copied().filter(|r| *r < 0.0).collect();
    if losses.is_empty() {
        return 0.0;
    }
    losses.iter().population_std_dev()
}

/// Mean percent return per unit of volatility, risk-free rate taken as 0.
/// Needs at least two samples and non-zero spread.
pub fn sharpe_ratio(percents: &[f64]) -> f64 {
    if percents.len() < 2 {
        return 0.0;
    }
    let std_dev = percents.iter().population_std_dev();
    if std_dev == 0.0 {
        return 0.0;
    }
    percents.iter().mean() / std_dev
}

/// Mean percent return per unit of downside deviation. With no losing
/// trade the ratio is unbounded: `SORTINO_UNBOUNDED` when the mean is
/// positive, 0 otherwise.
pub fn sortino_ratio(percents: &[f64]) -> f64 {
    if percents.len() < 2 {
        return 0.0;
    }

    let mean = percents.iter().mean();
    if !percents.iter().any(|r| *r < 0.0) {
        return if mean > 0.0 { SORTINO_UNBOUNDED } else { 0.0 };
    }

    let downside = downside_deviation(percents);
    if downside == 0.0 {
        return 0.0;
    }
    mean / downside
}

/// Sharpe ratio over only the most recent `ROLLING_SHARPE_WINDOW` trades,
/// ledger order preserved; same guards as the full-history Sharpe.
pub fn rolling_sharpe(percents: &[f64]) -> f64 {
    if percents.len() < 2 {
        return 0.0;
    }
    let window = percents.len().min(ROLLING_SHARPE_WINDOW);
    sharpe_ratio(&percents[percents.len() - window..])
}

/// Average reward-to-risk across trades that carry a usable entry, exit
/// and stop; 0 when no trade qualifies. Works on the raw price fields,
/// not the resolved sequence.
pub fn risk_reward_ratio(trades: &[TradeRecord]) -> f64 {
    let ratios: Vec<f64> = trades
        .iter()
        .filter(|t| t.buy_price > 0.0 && t.sell_price > 0.0 && t.stop_loss > 0.0)
        .filter_map(|t| {
            let risk = (t.buy_price - t.stop_loss).abs();
            if risk == 0.0 {
                return None;
            }
            Some((t.sell_price - t.buy_price).abs() / risk)
        })
        .collect();

    if ratios.is_empty() {
        return 0.0;
    }
    ratios.iter().mean()
}

/// Probability-weighted expected profit per trade over the resolved P/L
/// sequence: win fraction times average win minus loss fraction times
/// average loss magnitude.
pub fn expectancy(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }

    let total = profits.len() as f64;
    let wins: Vec<f64> = profits.iter().copied().filter(|p| *p > 0.0).collect();
    let losses: Vec<f64> = profits.iter().copied().filter(|p| *p < 0.0).collect();

    let avg_win = if wins.is_empty() {
        0.0
    } else {
        wins.iter().mean()
    };
    let avg_loss = if losses.is_empty() {
        0.0
    } else {
        losses.iter().mean()
    };

    let win_rate = wins.len() as f64 / total;
    let loss_rate = losses.len() as f64 / total;

    win_rate * avg_win - loss_rate * avg_loss.abs()
}

/// Total profit relative to the worst drawdown; 0 when there is no
/// drawdown to recover from.
pub fn recovery_factor(total_profit_loss: f64, max_drawdown: f64) -> f64 {
    if max_drawdown == 0.0 {
        return 0.0;
    }
    total_profit_loss / max_drawdown.abs()
}
