mod address_page;
mod block_page;
mod helper;
mod tx_page;

use address_page::draw_address_result;
use block_page::draw_block_result;
use helper::*;
use tx_page::draw_tx_result;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Screen, HOME_TX_PREVIEW};
use crate::client::{BlockDetails, HOME_BLOCK_COUNT};

const TITLE_ART: &str = r#"
 ██████╗██╗  ██╗ █████╗ ██╗███╗   ██╗███████╗ ██████╗ ██████╗ ██████╗ ███████╗
██╔════╝██║  ██║██╔══██╗██║████╗  ██║██╔════╝██╔════╝██╔═══██╗██╔══██╗██╔════╝
██║     ███████║███████║██║██╔██╗ ██║███████╗██║     ██║   ██║██████╔╝█████╗
██║     ██╔══██║██╔══██║██║██║╚██╗██║╚════██║██║     ██║   ██║██╔═══╝ ██╔══╝
╚██████╗██║  ██║██║  ██║██║██║ ╚████║███████║╚██████╗╚██████╔╝██║     ███████╗
 ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝╚═╝  ╚═══╝╚══════╝ ╚═════╝ ╚═════╝ ╚═╝     ╚══════╝
"#;

const NAV_HELP: &str = "↑↓ navigate • Enter select • Tab toggle • b back • h home • Esc quit";
const NAV_HELP_SIMPLE: &str = "↑↓ navigate • Enter select • b back • h home • Esc quit";
const NAV_HELP_NO_LIST: &str = "b back • h home • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Home => draw_home(frame, app),
        Screen::Loading(msg) => draw_loading(frame, msg),
        Screen::BlockResult(result) => draw_block_result(frame, result),
        Screen::TxResult(result) => draw_tx_result(frame, result),
        Screen::AddressResult(result) => draw_address_result(frame, result),
        Screen::Error(msg) => draw_error(frame, msg),
    }
}

fn draw_home(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.needs_setup() {
        draw_key_setup(frame, app, area);
    } else {
        draw_search_home(frame, app, area);
    }
}

fn draw_key_setup(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(9), // Title
        Constraint::Length(1), // Subtitle
        Constraint::Length(3), // Spacing
        Constraint::Length(5), // Key input box
        Constraint::Length(2), // Spacing
        Constraint::Length(1), // Help
        Constraint::Min(0),    // Padding
    ])
    .split(area);

    // Title
    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Terminal Ethereum Explorer")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    // API key input box
    let key_area = centered_rect(70, chunks[3]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" ⚡ API Key Required ")
        .title_style(Style::default().fg(Color::Yellow));

    let inner_area = block.inner(key_area);
    frame.render_widget(block, key_area);

    // Input field inside the box
    let input_chunks = Layout::vertical([
        Constraint::Length(1), // Label
        Constraint::Length(1), // Input
    ])
    .split(inner_area);

    let label = Paragraph::new(format!(
        "Enter your Alchemy API key (network: {}):",
        app.config.network
    ))
    .style(Style::default().fg(Color::White));
    frame.render_widget(label, input_chunks[0]);

    let inner_width = input_chunks[1].width as usize;
    let scroll = app.key_input.visual_scroll(inner_width);

    let display_text = if app.key_input.value().is_empty() {
        Span::styled("your-api-key", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.key_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text).scroll((0, scroll as u16));
    frame.render_widget(input, input_chunks[1]);

    // Cursor
    let cursor_x =
        input_chunks[1].x + (app.key_input.visual_cursor().saturating_sub(scroll)) as u16;
    let cursor_y = input_chunks[1].y;
    if cursor_x < input_chunks[1].x + input_chunks[1].width {
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    let help = Paragraph::new("Press Enter to connect • Esc to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn draw_search_home(frame: &mut Frame, app: &App, area: Rect) {
    let recent_searches = app.get_recent_searches();
    let has_history = !recent_searches.is_empty();

    // History section height (max 5 items + 2 for border)
    let history_height = if has_history {
        (recent_searches.len().min(5) + 2) as u16
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(9),              // Title
        Constraint::Length(1),              // Subtitle
        Constraint::Length(2),              // Spacing
        Constraint::Length(3),              // Search bar
        Constraint::Length(1),              // Spacing
        Constraint::Length(history_height), // History
        Constraint::Length(1),              // Spacing
        Constraint::Length(1),              // Network status
        Constraint::Length(1),              // Help
        Constraint::Min(0),                 // Latest blocks
    ])
    .split(area);

    // Title
    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Terminal Ethereum Explorer")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    // Search bar
    let search_area = centered_rect(60, chunks[3]);
    let search_selected = app.selected_history_index.is_none();
    draw_search_bar_with_selection(frame, app, search_area, search_selected);

    // History section
    if has_history {
        let history_area = centered_rect(60, chunks[5]);
        draw_history_list(frame, app, history_area);
    }

    // Network status
    let network_status = Line::from(vec![
        Span::styled("Network: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.config.network.clone(), Style::default().fg(Color::Green)),
    ]);
    let network_widget = Paragraph::new(network_status).alignment(Alignment::Center);
    frame.render_widget(network_widget, chunks[7]);

    let help_text = if has_history {
        "Enter search • ↑↓ history • Del remove • Esc quit"
    } else {
        "Enter to search • Esc to quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[8]);

    draw_latest_blocks(frame, app, chunks[9]);
}

/// Home-screen feed of the most recent blocks, each with a short
/// transaction preview
fn draw_latest_blocks(frame: &mut Frame, app: &App, area: Rect) {
    if area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Latest {HOME_BLOCK_COUNT} Blocks "));

    let mut lines: Vec<Line> = Vec::new();

    if let Some(err) = &app.home_error {
        lines.push(Line::from(err.clone()).fg(Color::Red));
    } else if let Some(blocks) = &app.latest_blocks {
        for details in blocks {
            lines.extend(block_preview_lines(details));
        }
    } else {
        lines.push(Line::from("Loading latest blocks...").fg(Color::DarkGray));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn block_preview_lines(details: &BlockDetails) -> Vec<Line<'static>> {
    let info = &details.info;
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("Block #{}", info.number),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled(
            format!("  {} txs", info.tx_count),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  Gas: {}", format_gas(info.gas_used)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  {}", format_timestamp(info.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    for tx in details.transactions.iter().take(HOME_TX_PREVIEW) {
        let to_display = match &tx.to {
            Some(to) => truncate_hash(to),
            None => "[Contract Create]".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(truncate_hash(&tx.hash), Style::default().fg(Color::Gray)),
            Span::styled("  ", Style::default()),
            Span::styled(truncate_hash(&tx.from), Style::default().fg(Color::Cyan)),
            Span::styled(" → ", Style::default().fg(Color::DarkGray)),
            Span::styled(to_display, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {}", format_eth(tx.value)),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    if info.tx_count == 0 {
        lines.push(Line::from("  (no transactions)").fg(Color::DarkGray));
    }

    lines.push(Line::from(""));
    lines
}

fn draw_search_bar_with_selection(frame: &mut Frame, app: &App, area: Rect, selected: bool) {
    let border_color = if selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Search by Address / Txn Hash / Block",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    // Only show cursor if search bar is selected
    if selected {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < area.x + area.width - 1 {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn draw_history_list(frame: &mut Frame, app: &App, area: Rect) {
    let recent_searches = app.get_recent_searches();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recent Searches ");

    let items: Vec<ListItem> = recent_searches
        .iter()
        .enumerate()
        .take(5)
        .map(|(i, query)| {
            let is_selected = app.selected_history_index == Some(i);
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };

            // Truncate long queries
            let display = if query.len() > 60 {
                format!("{}...", &query[..57])
            } else {
                query.clone()
            };

            ListItem::new(format!(" {display}")).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_loading(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Loading ");

    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let idx = (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
        / 100) as usize
        % spinner_frames.len();

    let text = format!("{} {}", spinner_frames[idx], msg);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));

    let centered = centered_rect_fixed(50, 5, area);
    frame.render_widget(paragraph, centered);
}

fn draw_error(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let padded = padded_rect(area, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ❌ Error ");

    // Split message into lines and format them
    let mut lines: Vec<Line> = msg
        .lines()
        .map(|line| Line::from(line.to_string()).fg(Color::Red))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(NAV_HELP_NO_LIST).fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: false });

    frame.render_widget(paragraph, padded);
}
