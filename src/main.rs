use chainscope::app::{App, NavLink};
use chainscope::client::{AddressDetails, BlockDetails, TxDetails, HOME_BLOCK_COUNT};
use chainscope::config::Config;
use chainscope::price::PriceClient;
use chainscope::search::SearchQuery;
use chainscope::ui;

use alloy::primitives::{Address, TxHash};
use anyhow::Result;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

const HOME_FETCH_ERROR: &str = "Failed to fetch blockchain data. Check API key or network.";
const BLOCK_FETCH_ERROR: &str = "Failed to fetch block. Please check the number or try again.";
const TX_FETCH_ERROR: &str = "Transaction not found or failed to fetch.";
const ADDRESS_FETCH_ERROR: &str = "Failed to load address data. Please verify address.";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let price = PriceClient::new()?;

    run_tui(config, price).await?;

    Ok(())
}

/// Messages from async fetch tasks back to the main loop. Each carries the
/// request generation it belongs to; stale generations are dropped.
enum AsyncMessage {
    Home(u64, Result<Vec<BlockDetails>>),
    Block(u64, Result<BlockDetails>),
    Tx(u64, Result<TxDetails>),
    Address(u64, Result<AddressDetails>),
}

async fn run_tui(config: Config, price: PriceClient) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(10);

    // Fetch the home feed on startup (only if an API key is configured)
    if app.has_client() {
        refresh_home_blocks(&mut app, tx.clone());
    }

    let result = run_event_loop(&mut terminal, &mut app, &price, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    price: &PriceClient,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    let mut last_home_refresh = std::time::Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Periodically refresh the home feed (every 12 seconds ~ 1 block)
        if app.is_on_home()
            && app.has_client()
            && last_home_refresh.elapsed() > std::time::Duration::from_secs(12)
        {
            last_home_refresh = std::time::Instant::now();
            refresh_home_blocks(app, tx.clone());
        }

        // Check for async results; anything from a superseded generation is
        // a response to a request the user already navigated away from
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AsyncMessage::Home(seq, result) => {
                    if !app.is_current_request(seq) {
                        continue;
                    }
                    match result {
                        Ok(blocks) => app.set_home_blocks(blocks),
                        Err(_) => app.set_home_error(HOME_FETCH_ERROR.to_string()),
                    }
                }
                AsyncMessage::Block(seq, result) => {
                    if !app.is_current_request(seq) {
                        continue;
                    }
                    match result {
                        Ok(details) => app.set_block_result(details),
                        // {:#} gives the full error chain from anyhow
                        Err(e) => app.set_error(format!("{BLOCK_FETCH_ERROR}\n\n{e:#}")),
                    }
                }
                AsyncMessage::Tx(seq, result) => {
                    if !app.is_current_request(seq) {
                        continue;
                    }
                    match result {
                        Ok(details) => app.set_tx_result(details),
                        Err(e) => app.set_error(format!("{TX_FETCH_ERROR}\n\n{e:#}")),
                    }
                }
                AsyncMessage::Address(seq, result) => {
                    if !app.is_current_request(seq) {
                        continue;
                    }
                    match result {
                        Ok(details) => app.set_address_result(details),
                        Err(e) => app.set_error(format!("{ADDRESS_FETCH_ERROR}\n\n{e:#}")),
                    }
                }
            }
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global keys
                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    _ => {}
                }

                // Screen-specific keys
                if app.is_on_home() {
                    if app.needs_setup() {
                        // API key setup mode
                        match key.code {
                            KeyCode::Enter => match app.submit_api_key() {
                                Ok(()) => {
                                    refresh_home_blocks(app, tx.clone());
                                }
                                Err(e) => {
                                    app.set_error(e);
                                }
                            },
                            KeyCode::Esc => {}
                            _ => {
                                app.key_input.handle_event(&ev);
                            }
                        }
                    } else {
                        // Normal search mode with history
                        match key.code {
                            KeyCode::Enter => {
                                // Check if a history item is selected
                                if let Some(query) = app.get_selected_history_query() {
                                    app.clear_history_selection();
                                    // Add to history again to move it to top
                                    let _ = app.config.add_recent_search(query.clone());
                                    execute_search(app, &query, price, tx.clone());
                                } else if let Some(query) = app.submit_search() {
                                    execute_search(app, &query, price, tx.clone());
                                }
                            }
                            KeyCode::Up => {
                                app.select_history_prev();
                            }
                            KeyCode::Down => {
                                app.select_history_next();
                            }
                            KeyCode::Delete | KeyCode::Backspace
                                if app.selected_history_index.is_some() =>
                            {
                                app.delete_selected_history();
                            }
                            KeyCode::Esc => {}
                            _ => {
                                // Only handle text input when history not selected
                                if app.selected_history_index.is_none() {
                                    app.search_input.handle_event(&ev);
                                } else {
                                    // Any other key clears history selection and goes to search
                                    app.clear_history_selection();
                                    app.search_input.handle_event(&ev);
                                }
                            }
                        }
                    }
                } else if !app.is_loading() {
                    match key.code {
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.select_prev();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.select_next();
                        }
                        KeyCode::Tab => {
                            app.toggle_mode();
                        }
                        KeyCode::Enter => {
                            if let Some(link) = app.get_selected_link() {
                                navigate_to_link(app, link, price, tx.clone());
                            }
                        }
                        KeyCode::Backspace | KeyCode::Char('b') => {
                            app.go_back();
                        }
                        KeyCode::Char('h') => {
                            app.go_home();
                            last_home_refresh = std::time::Instant::now();
                            refresh_home_blocks(app, tx.clone());
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn refresh_home_blocks(app: &mut App, tx: mpsc::Sender<AsyncMessage>) {
    let Some(client) = app.client.clone() else {
        return;
    };

    let seq = app.begin_request();
    tokio::spawn(async move {
        let result = client.get_recent_blocks(HOME_BLOCK_COUNT).await;
        let _ = tx.send(AsyncMessage::Home(seq, result)).await;
    });
}

fn navigate_to_link(app: &mut App, link: NavLink, price: &PriceClient, tx: mpsc::Sender<AsyncMessage>) {
    match link {
        NavLink::Address(addr) => {
            execute_search(app, &addr, price, tx);
        }
        NavLink::Block(num) => {
            execute_search(app, &num.to_string(), price, tx);
        }
        NavLink::Transaction(hash) => {
            execute_search(app, &hash, price, tx);
        }
    }
}

fn execute_search(app: &mut App, query: &str, price: &PriceClient, tx: mpsc::Sender<AsyncMessage>) {
    let parsed = SearchQuery::parse(query);

    if parsed == SearchQuery::Empty {
        return;
    }

    if let SearchQuery::Invalid(reason) = parsed {
        app.set_error(reason);
        return;
    }

    let Some(client) = app.client.clone() else {
        app.set_error("No API key configured.".into());
        return;
    };

    match parsed {
        SearchQuery::BlockNumber(num) => {
            app.set_loading(&format!("Fetching block {num}..."));
            let seq = app.begin_request();
            tokio::spawn(async move {
                let result = client.get_block_with_transactions(num).await;
                let _ = tx.send(AsyncMessage::Block(seq, result)).await;
            });
        }
        SearchQuery::TxHash(hash) => {
            app.set_loading("Fetching transaction...");
            let seq = app.begin_request();
            tokio::spawn(async move {
                let result = async {
                    let hash: TxHash = hash.parse()?;
                    client.get_transaction(hash).await
                }
                .await;
                let _ = tx.send(AsyncMessage::Tx(seq, result)).await;
            });
        }
        SearchQuery::Address(addr) => {
            app.set_loading("Fetching address...");
            let seq = app.begin_request();
            let price = price.clone();
            tokio::spawn(async move {
                let result = async {
                    let addr: Address = addr.parse()?;
                    client.get_address_overview(addr, &price).await
                }
                .await;
                let _ = tx.send(AsyncMessage::Address(seq, result)).await;
            });
        }
        SearchQuery::Empty | SearchQuery::Invalid(_) => unreachable!(),
    }
}
