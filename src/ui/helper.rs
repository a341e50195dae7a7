use alloy::primitives::U256;
use chrono::DateTime;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::client::TxSummary;

// ============================================================================
// Helper Functions
// ============================================================================

pub fn truncate_hash(hash: &str) -> String {
    if hash.len() > 20 {
        format!("{}...{}", &hash[..10], &hash[hash.len() - 6..])
    } else {
        hash.to_string()
    }
}

/// Wei to a decimal ETH string with a fixed number of fraction digits,
/// computed in integer arithmetic (truncating, never rounding up)
fn format_units(wei: U256, decimals: usize) -> String {
    let wei_str = wei.to_string();
    // Pad so there is always at least one whole-part digit ahead of the
    // 18 fractional wei digits
    let padded = format!("{wei_str:0>19}");
    let (whole, frac) = padded.split_at(padded.len() - 18);
    format!("{whole}.{}", &frac[..decimals])
}

/// Account balance, 8 fraction digits ("1.00000000")
pub fn format_balance_eth(wei: U256) -> String {
    format_units(wei, 8)
}

/// Transaction value with unit, 5 fraction digits ("0.05000 ETH")
pub fn format_eth(wei: U256) -> String {
    format!("{} ETH", format_units(wei, 5))
}

/// Fiat quote with thousands grouping ("≈ $3,870.79")
pub fn format_usd(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    format!("≈ ${}.{frac:02}", group_thousands(whole))
}

fn group_thousands(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000, n >= 1000));
        n /= 1000;
    }
    groups
        .iter()
        .rev()
        .map(|(g, padded)| {
            if *padded {
                format!("{g:03}")
            } else {
                g.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn format_kv_link(key: &str, value: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    };

    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), style),
    ])
}

/// Relative age for listings ("12 mins ago")
pub fn format_timestamp(ts: u64) -> String {
    use std::time::{Duration, UNIX_EPOCH};
    let datetime = UNIX_EPOCH + Duration::from_secs(ts);
    let secs_ago = std::time::SystemTime::now()
        .duration_since(datetime)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    if secs_ago < 60 {
        format!("{secs_ago} secs ago")
    } else if secs_ago < 3600 {
        format!("{} mins ago", secs_ago / 60)
    } else if secs_ago < 86400 {
        format!("{} hours ago", secs_ago / 3600)
    } else {
        format!("{} days ago", secs_ago / 86400)
    }
}

/// Absolute wall-clock form for detail screens ("2023-11-14 22:13:20 UTC")
pub fn format_timestamp_utc(ts: u64) -> String {
    match DateTime::from_timestamp(ts as i64, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("@{ts}"),
    }
}

pub fn format_gas(gas: u64) -> String {
    if gas >= 1_000_000 {
        format!("{:.2}M", gas as f64 / 1_000_000.0)
    } else if gas >= 1_000 {
        format!("{:.2}K", gas as f64 / 1_000.0)
    } else {
        gas.to_string()
    }
}

/// Gas price in both units ("50.000 Gwei (50000000000 wei)")
pub fn format_gas_price(wei: u128) -> String {
    let gwei = wei as f64 / 1_000_000_000.0;
    format!("{gwei:.3} Gwei ({wei} wei)")
}

pub fn format_tx_list_item<'a>(index: usize, tx: &TxSummary, selected: bool) -> ListItem<'a> {
    let to_display = match &tx.to {
        Some(to) => truncate_hash(to),
        None => "[Contract Create]".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{index:>3} "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(truncate_hash(&tx.hash), Style::default().fg(Color::Gray)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(truncate_hash(&tx.from), Style::default().fg(Color::Cyan)),
        Span::styled(" → ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{to_display:>19}"),
            if tx.to.is_some() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Magenta)
            },
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:>16}", format_eth(tx.value)),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let style = if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };

    ListItem::new(line).style(style)
}

pub fn format_tx_list_header<'a>() -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled("    ", Style::default()), // index space
        Span::styled(
            format!("{:^19}", "Hash"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:^19}", "From"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("   ", Style::default()), // arrow space
        Span::styled(
            format!("{:^19}", "To"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:>16}", "Value"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(line).style(Style::default())
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Length(height),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);

    horizontal[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
