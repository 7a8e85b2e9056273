//! Text rendering of a metrics snapshot
//!
//! Renders the snapshot in four groups: headline figures, growth
//! metrics, risk metrics and quant-grade analysis. The unbounded
//! Sortino sentinel is displayed as infinity.

use crate::metrics::MetricsSnapshot;
use crate::risk::SORTINO_UNBOUNDED;

const WIDTH: usize = 60;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// ANSI styling used by a render pass; the plain palette is all empty.
#[derive(Clone, Copy)]
struct Palette {
    green: &'static str,
    red: &'static str,
    bold: &'static str,
    reset: &'static str,
}

impl Palette {
    fn plain() -> Self {
        Palette {
            green: "",
            red: "",
            bold: "",
            reset: "",
        }
    }

    fn ansi() -> Self {
        Palette {
            green: GREEN,
            red: RED,
            bold: BOLD,
            reset: RESET,
        }
    }

    fn by_sign(&self, value: f64) -> &'static str {
        if value < 0.0 {
            self.red
        } else {
            self.green
        }
    }
}

/// Render the snapshot as a plain text report.
pub fn render(snapshot: &MetricsSnapshot) -> String {
    render_with(snapshot, Palette::plain())
}

/// Render the snapshot with ANSI color codes for terminal display.
pub fn render_colored(snapshot: &MetricsSnapshot) -> String {
    render_with(snapshot, Palette::ansi())
}

fn render_with(s: &MetricsSnapshot, p: Palette) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}{}{}\n", p.bold, "=".repeat(WIDTH), p.reset));
    out.push_str(&format!("{}TRADING PERFORMANCE REPORT{}\n", p.bold, p.reset));
    out.push_str(&format!("{}{}{}\n", p.bold, "=".repeat(WIDTH), p.reset));

    line(&mut out, "Total P/L", &money(s.total_profit_loss), p.by_sign(s.total_profit_loss), p);
    line(&mut out, "Total Trades", &s.total_trades.to_string(), "", p);
    line(&mut out, "Win Rate", &format!("{:.1}%", s.win_rate), "", p);
    line(&mut out, "Avg Return", &format!("{:.2}%", s.avg_return), p.by_sign(s.avg_return), p);
    line(&mut out, "Max Drawdown", &money(s.max_drawdown), p.red, p);
    line(&mut out, "Sharpe Ratio", &format!("{:.2}", s.sharpe_ratio), p.by_sign(s.sharpe_ratio), p);
    line(&mut out, "Sortino Ratio", &sortino(s.sortino_ratio), p.by_sign(s.sortino_ratio), p);
    line(&mut out, "Rolling Sharpe", &format!("{:.2}", s.rolling_sharpe), p.by_sign(s.rolling_sharpe), p);
    line(&mut out, "Risk to Reward", &format!("{:.2}:1", s.risk_reward_ratio), "", p);
    line(&mut out, "Expectancy", &money(s.expectancy), p.by_sign(s.expectancy), p);
    line(&mut out, "Recovery Factor", &format!("{:.2}", s.recovery_factor), p.by_sign(s.recovery_factor), p);

    section(&mut out, "Growth Metrics", p);
    line(&mut out, "CAGR", &format!("{:.2}%", s.cagr * 100.0), p.by_sign(s.cagr), p);
    line(&mut out, "Investment Multiple", &format!("{:.2}x", s.investment_multiple), "", p);
    line(&mut out, "Annualized Return", &format!("{:.2}%", s.annualized_return), p.by_sign(s.annualized_return), p);
    line(&mut out, "Total Return", &format!("{:.2}%", s.total_return_pct), p.by_sign(s.total_return_pct), p);
    line(&mut out, "Years in Market", &format!("{:.2}", s.years_in_market), "", p);

    section(&mut out, "Risk Metrics", p);
    line(&mut out, "Volatility", &format!("{:.2}%", s.volatility), "", p);
    line(&mut out, "Downside Deviation", &format!("{:.2}%", s.downside_deviation), "", p);

    section(&mut out, "Quant Grade Analysis", p);
    line(
        &mut out,
        "Regime Returns",
        &format!("Up {:.2}% / Down {:.2}%", s.avg_up_return, s.avg_down_return),
        "",
        p,
    );
    line(&mut out, "Drawdown Clustering", &format!("{:.2} trades", s.drawdown_clustering), "", p);
    line(&mut out, "Skew / Kurtosis", &format!("{:.2} / {:.2}", s.skew, s.kurtosis), "", p);
    line(&mut out, "Conditional VaR (5%)", &format!("{:.2}%", s.conditional_var), p.by_sign(s.conditional_var), p);

    out.push_str(&format!("{}{}{}\n", p.bold, "=".repeat(WIDTH), p.reset));
    out
}

fn section(out: &mut String, title: &str, p: Palette) {
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!("{}{}{}\n", p.bold, title, p.reset));
}

fn line(out: &mut String, label: &str, value: &str, color: &str, p: Palette) {
    let reset = if color.is_empty() { "" } else { p.reset };
    out.push_str(&format!("{:<22} {}{}{}\n", format!("{}:", label), color, value, reset));
}

fn money(value: f64) -> String {
    format!("${:.2}", value)
}

fn sortino(value: f64) -> String {
    if value == SORTINO_UNBOUNDED {
        "∞".to_string()
    } else {
        format!("{:.2}", value)
    }
}
