use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::AddressResult;
use crate::client::AssetTransfer;
use crate::ui::NAV_HELP_SIMPLE;

pub fn draw_address_result(frame: &mut Frame, result: &AddressResult) {
    let area = frame.area();
    let details = &result.details;

    let chunks = Layout::vertical([
        Constraint::Length(8), // Address info
        Constraint::Min(5),    // Transfer feed
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 👤 Address ");

    let balance_usd = wei_to_eth_f64(details.balance) * details.eth_usd;

    let lines = vec![
        format_kv("Address", &details.address),
        Line::from(""),
        Line::from(vec![
            Span::styled("ETH Balance: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} ETH", format_balance_eth(details.balance)),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Value: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format_usd(balance_usd), Style::default().fg(Color::Yellow)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    draw_transfer_feed(frame, result, chunks[1]);

    let help = Paragraph::new(NAV_HELP_SIMPLE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_transfer_feed(frame: &mut Frame, result: &AddressResult, area: ratatui::layout::Rect) {
    let transfers = &result.details.transfers;

    let feed_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Recent Activity ({}) ", transfers.len()));

    if transfers.is_empty() {
        let empty_msg = Paragraph::new("No transfers found for this address")
            .block(feed_block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty_msg, area);
        return;
    }

    // Window the feed around the selection when it overflows the area
    let visible_count = (area.height.saturating_sub(3)) as usize; // -2 borders, -1 header
    let start = if result.selected_index >= visible_count {
        result.selected_index + 1 - visible_count
    } else {
        0
    };

    let mut items: Vec<ListItem> = vec![transfer_list_header()];

    items.extend(
        transfers
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_count)
            .map(|(i, transfer)| {
                transfer_list_item(i, transfer, i == result.selected_index)
            }),
    );

    let list = List::new(items).block(feed_block);
    frame.render_widget(list, area);
}

fn transfer_list_header<'a>() -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled("    ", Style::default()),
        Span::styled(
            format!("{:^19}", "Hash"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:>9}", "Block"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:^10}", "Date"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:^19}", "From"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("{:^19}", "To"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:>16}", "Amount"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(line).style(Style::default())
}

fn transfer_list_item<'a>(index: usize, transfer: &AssetTransfer, selected: bool) -> ListItem<'a> {
    let block_display = transfer
        .block_number()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());

    let to_display = match &transfer.to {
        Some(to) => truncate_hash(to),
        None => "[Contract Create]".to_string(),
    };

    let amount_display = match (transfer.value, &transfer.asset) {
        (Some(value), Some(asset)) => format!("{value:.5} {asset}"),
        (Some(value), None) => format!("{value:.5}"),
        _ => "—".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{index:>3} "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            truncate_hash(&transfer.hash),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{block_display:>9}"),
            Style::default().fg(Color::White),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            transfer.date().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            truncate_hash(&transfer.from),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" → ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{to_display:>19}"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{amount_display:>16}"),
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

/// Lossy wei-to-ETH conversion, only for fiat display
fn wei_to_eth_f64(wei: alloy::primitives::U256) -> f64 {
    wei.to_string().parse::<f64>().unwrap_or(0.0) / 1e18
}
