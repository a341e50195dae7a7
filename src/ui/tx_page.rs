use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::TxResult;
use crate::ui::NAV_HELP_SIMPLE;

pub fn draw_tx_result(frame: &mut Frame, result: &TxResult) {
    let area = frame.area();
    let details = &result.details;

    let chunks = Layout::vertical([
        Constraint::Min(20),   // Tx info
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 📄 Transaction ");

    // Link indices must match TxDetails::nav_links: from, then to, then block
    let mut link_idx = 0;

    let mut lines = vec![format_kv("Hash", &details.hash)];

    // Status with a colored badge
    let (status_badge, status_color) = if details.success {
        ("✓ Success", Color::Green)
    } else {
        ("✗ Failed", Color::Red)
    };
    lines.push(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(status_badge, Style::default().fg(status_color)),
    ]));

    lines.push(format_kv("Type", &details.tx_type.label()));

    // From (always a link)
    lines.push(format_kv_link(
        "From",
        &details.from,
        result.selected_link == link_idx,
    ));
    link_idx += 1;

    // To, or contract creation when absent
    if let Some(to) = &details.to {
        lines.push(format_kv_link(
            "To",
            to,
            result.selected_link == link_idx,
        ));
        link_idx += 1;
    } else {
        lines.push(format_kv("To", "Contract Creation"));
    }

    lines.push(Line::from(""));
    lines.push(format_kv("Value", &format_eth(details.value)));
    lines.push(format_kv("Transaction Fee", &format_eth(details.fee)));

    if let Some(gp) = details.gas_price {
        lines.push(format_kv("Gas Price", &format_gas_price(gp)));
    }
    lines.push(format_kv(
        "Effective Gas Price",
        &format_gas_price(details.effective_gas_price),
    ));
    lines.push(format_kv("Gas Limit", &format_gas(details.gas_limit)));
    lines.push(format_kv(
        "Gas Used",
        &format!(
            "{} ({:.2}%)",
            format_gas(details.gas_used),
            (details.gas_used as f64 / details.gas_limit as f64) * 100.0
        ),
    ));

    lines.push(Line::from(""));
    lines.push(format_kv("Nonce", &details.nonce.to_string()));

    // Block (navigable link), or pending when not yet mined
    if let Some(block_num) = details.block_number {
        lines.push(format_kv_link(
            "Block",
            &format!("#{block_num}"),
            result.selected_link == link_idx,
        ));
        link_idx += 1;
    } else {
        lines.push(format_kv("Block", "Pending"));
    }

    if let Some(idx) = details.tx_index {
        lines.push(format_kv("Position in Block", &idx.to_string()));
    }

    if let Some(ts) = details.timestamp {
        lines.push(format_kv(
            "Timestamp",
            &format!("{} ({})", format_timestamp_utc(ts), format_timestamp(ts)),
        ));
    }

    // Input data, truncated for long calldata
    lines.push(Line::from(""));
    if details.input == "0x" {
        lines.push(format_kv("Input Data", "0x (empty)"));
    } else {
        let display_data = if details.input.len() > 66 {
            format!(
                "{}...{}",
                &details.input[..34],
                &details.input[details.input.len() - 32..]
            )
        } else {
            details.input.clone()
        };
        lines.push(format_kv("Input Data", &display_data));
    }

    let _ = link_idx;

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(NAV_HELP_SIMPLE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
