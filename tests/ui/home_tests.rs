//! Home page UI tests

use super::*;
use chainscope::app::Screen;

#[test]
fn test_home_screen_shows_title() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 40);

    // Banner art plus the subtitle
    assert!(buffer_contains(&buffer, "Terminal Ethereum Explorer"));
}

#[test]
fn test_home_screen_shows_search_bar() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(
        &buffer,
        "Search by Address / Txn Hash / Block"
    ));
}

#[test]
fn test_home_screen_shows_network() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "eth-sepolia"));
}

#[test]
fn test_home_screen_shows_recent_searches() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, "12345678"));
}

#[test]
fn test_home_screen_without_key_shows_setup() {
    let app = create_test_app(Screen::Home, false);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "API Key Required"));
    assert!(buffer_contains(&buffer, "Press Enter to connect"));
}

#[test]
fn test_home_screen_shows_latest_blocks_loading() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 50);

    // No fetch has completed yet
    assert!(buffer_contains(&buffer, "Latest 5 Blocks"));
    assert!(buffer_contains(&buffer, "Loading latest blocks..."));
}

#[test]
fn test_home_screen_shows_block_feed() {
    let mut app = create_test_app(Screen::Home, true);
    app.set_home_blocks(vec![
        mock_block_details(2),
        mock_block_details(0),
    ]);
    let buffer = render_to_buffer(&app, 110, 50);

    assert!(buffer_contains(&buffer, "Block #19000000"));
    assert!(buffer_contains(&buffer, "2 txs"));
    // Per-tx preview shows values with 5 fraction digits
    assert!(buffer_contains(&buffer, "1.00000 ETH"));
}

#[test]
fn test_home_screen_block_feed_shows_gas_used() {
    let mut app = create_test_app(Screen::Home, true);
    app.set_home_blocks(vec![mock_block_details(2)]);
    let buffer = render_to_buffer(&app, 110, 50);

    // 15M gas used in the mock block header
    assert!(buffer_contains(&buffer, "Gas: 15.00M"));
}

#[test]
fn test_home_screen_block_feed_previews_at_most_five_txs() {
    let mut app = create_test_app(Screen::Home, true);
    app.set_home_blocks(vec![mock_block_details(8)]);
    let buffer = render_to_buffer(&app, 110, 50);
    let content = buffer_to_string(&buffer);

    // Mock tx hashes are 0x0000..., 0x0001..., indexed in order; the sixth
    // (0x0005...) must not appear
    assert!(content.contains("0x00041111"));
    assert!(!content.contains("0x00051111"));
}

#[test]
fn test_home_screen_shows_feed_error() {
    let mut app = create_test_app(Screen::Home, true);
    app.set_home_error("Failed to fetch blockchain data. Check API key or network.".to_string());
    let buffer = render_to_buffer(&app, 100, 50);

    assert!(buffer_contains(
        &buffer,
        "Failed to fetch blockchain data. Check API key or network."
    ));
}
