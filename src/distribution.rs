//! Distributional analytics over the resolved percent-return sequence
//!
//! Higher moments, the loss tail, loss-streak clustering and regime
//! averages. All functions fold degenerate inputs to 0.

use itertools::Itertools;
use statrs::statistics::Statistics;

/// Share of the return distribution treated as the loss tail.
pub const CVAR_TAIL: f64 = 0.05;

/// Third standardized moment (asymmetry). Needs more than two samples and
/// non-zero spread.
pub fn skew(percents: &[f64]) -> f64 {
    standardized_moment(percents, 3)
}

/// Fourth standardized moment (tail weight, not excess). Needs more than
/// three samples and non-zero spread.
pub fn kurtosis(percents: &[f64]) -> f64 {
    standardized_moment(percents, 4)
}

fn standardized_moment(percents: &[f64], order: i32) -> f64 {
    // Skew needs N > 2, kurtosis N > 3.
    if percents.len() <= order as usize - 1 {
        return 0.0;
    }

    let std_dev = percents.iter().population_std_dev();
    if std_dev == 0.0 {
        return 0.0;
    }

    let mean = percents.iter().mean();
    let n = percents.len() as f64;
    let central: f64 = percents.iter().map(|r| (r - mean).powi(order)).sum::<f64>() / n;

    central / std_dev.powi(order)
}

/// Mean of the worst `CVAR_TAIL` share of returns (at least one): the
/// expected loss once the tail is entered. 0 for an empty sequence.
pub fn conditional_var(percents: &[f64]) -> f64 {
    if percents.is_empty() {
        return 0.0;
    }

    let mut sorted = percents.to_vec();
    sorted.sort_by(f64::total_cmp);

    let tail = ((sorted.len() as f64 * CVAR_TAIL).floor() as usize).max(1);
    sorted[..tail].iter().mean()
}

/// Mean length of consecutive losing streaks in ledger order; 0 when no
/// losing trade exists.
pub fn drawdown_clustering(percents: &[f64]) -> f64 {
    let grouped = percents.iter().copied().chunk_by(|r| *r < 0.0);
    let streaks: Vec<usize> = grouped
        .into_iter()
        .filter(|(is_loss, _)| *is_loss)
        .map(|(_, streak)| streak.count())
        .collect();

    if streaks.is_empty() {
        return 0.0;
    }
    streaks.iter().map(|&len| len as f64).sum::<f64>() / streaks.len() as f64
}

/// Mean return across the non-negative regime; 0 when empty.
pub fn avg_up_return(percents: &[f64]) -> f64 {
    subset_mean(percents, |r| r >= 0.0)
}

/// Mean return across the losing regime; 0 when empty.
pub fn avg_down_return(percents: &[f64]) -> f64 {
    subset_mean(percents, |r| r < 0.0)
}

fn subset_mean(percents: &[f64], keep: impl Fn(f64) -> bool) -> f64 {
    let subset: Vec<f64> = percents.iter().copied().filter(|r| keep(*r)).collect();
    if subset.is_empty() {
        return 0.0;
    }
    subset.iter().mean()
}
