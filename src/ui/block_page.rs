use super::helper::*;

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::BlockResult;
use crate::ui::NAV_HELP;

pub fn draw_block_result(frame: &mut Frame, result: &BlockResult) {
    let area = frame.area();
    let info = &result.details.info;
    let padded = padded_rect(area, 1);

    let block_info_height: u16 = 12;

    // Transaction list: at most 10 rows plus header, trailing note, borders
    let tx_list_height = (result.visible_transactions().len() as u16 + 4)
        .min(padded.height.saturating_sub(block_info_height + 1))
        .max(5);

    let chunks = Layout::vertical([
        Constraint::Length(padded.height.saturating_sub(tx_list_height + 1)),
        Constraint::Length(tx_list_height),
        Constraint::Length(1), // Nav help
    ])
    .split(padded);

    // Block info section
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📦 Block #{} ", info.number));

    // Gas usage percentage and bar
    let gas_pct = (info.gas_used as f64 / info.gas_limit as f64) * 100.0;
    let bar_width = 20;
    let filled = ((gas_pct / 100.0) * bar_width as f64) as usize;
    let gas_bar = format!(
        "[{}{}] {:.2}%",
        "█".repeat(filled.min(bar_width)),
        "░".repeat(bar_width.saturating_sub(filled)),
        gas_pct
    );

    let mut lines = vec![
        format_kv("Hash", &info.hash),
        format_kv_link(
            "Parent Block",
            &format!("#{}", info.number.saturating_sub(1)),
            !result.list_mode,
        ),
        format_kv(
            "Timestamp",
            &format!(
                "{} ({})",
                format_timestamp_utc(info.timestamp),
                format_timestamp(info.timestamp)
            ),
        ),
        format_kv("Miner", &info.miner),
        Line::from(""),
        format_kv("Transactions", &info.tx_count.to_string()),
    ];

    lines.push(Line::from(vec![
        Span::styled("Gas Used: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format_gas(info.gas_used), Style::default().fg(Color::White)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_gas(info.gas_limit),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {gas_bar}"),
            Style::default().fg(if gas_pct > 90.0 {
                Color::Red
            } else if gas_pct > 70.0 {
                Color::Yellow
            } else {
                Color::Green
            }),
        ),
    ]));
    lines.push(format_kv(
        "Base Fee",
        &info
            .base_fee
            .map(|f| format_gas_price(f as u128))
            .unwrap_or_else(|| "N/A".to_string()),
    ));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    // Transaction list section
    let tx_title = if result.list_mode {
        format!(
            " Transactions ({}) [selected] ",
            result.details.transactions.len()
        )
    } else {
        format!(
            " Transactions ({}) [Tab to select] ",
            result.details.transactions.len()
        )
    };

    let tx_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if result.list_mode {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(tx_title);

    if result.details.transactions.is_empty() {
        let empty_msg = Paragraph::new("No transactions in this block")
            .block(tx_block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty_msg, chunks[1]);
    } else {
        // Header first, then the visible rows
        let mut items: Vec<ListItem> = vec![format_tx_list_header()];

        items.extend(
            result
                .visible_transactions()
                .iter()
                .enumerate()
                .map(|(i, tx)| {
                    let is_selected = result.list_mode && i == result.selected_index;
                    format_tx_list_item(i, tx, is_selected)
                }),
        );

        let hidden = result.hidden_tx_count();
        if hidden > 0 {
            items.push(
                ListItem::new(format!("    + {hidden} more transactions not shown..."))
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }

        let list = List::new(items).block(tx_block);
        frame.render_widget(list, chunks[1]);
    }

    // Navigation help
    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}
