//! Block page UI tests

use super::*;
use chainscope::app::{BlockResult, Screen};

fn block_screen(tx_count: usize, list_mode: bool) -> Screen {
    Screen::BlockResult(BlockResult {
        details: mock_block_details(tx_count),
        selected_index: 0,
        list_mode,
    })
}

#[test]
fn test_block_screen_shows_block_number() {
    let app = create_test_app(block_screen(3, true), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Block #19000000"));
}

#[test]
fn test_block_screen_shows_header_fields() {
    let app = create_test_app(block_screen(3, false), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Hash"));
    assert!(buffer_contains(&buffer, "Miner"));
    assert!(buffer_contains(&buffer, "95222290"));
    // Parent block link
    assert!(buffer_contains(&buffer, "#18999999"));
}

#[test]
fn test_block_screen_shows_gas_info() {
    let app = create_test_app(block_screen(3, false), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Gas Used"));
    assert!(buffer_contains(&buffer, "15.00M"));
    assert!(buffer_contains(&buffer, "30.00M"));
}

#[test]
fn test_block_screen_list_mode_shows_transactions() {
    let app = create_test_app(block_screen(3, true), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Transactions (3)"));
    assert!(buffer_contains(&buffer, "0x00001111"));
    assert!(buffer_contains(&buffer, "1.00000 ETH"));
}

#[test]
fn test_block_screen_truncates_long_tx_list() {
    // 12 transactions: 10 shown, 2 summarized
    let app = create_test_app(block_screen(12, true), true);
    let buffer = render_to_buffer(&app, 120, 40);
    let content = buffer_to_string(&buffer);

    assert!(content.contains("Transactions (12)"));
    assert!(content.contains("0x00091111"));
    assert!(!content.contains("0x000a1111"));
    assert!(content.contains("+ 2 more transactions not shown..."));
}

#[test]
fn test_block_screen_no_truncation_note_when_all_shown() {
    let app = create_test_app(block_screen(3, true), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(!buffer_contains(&buffer, "more transactions not shown"));
}

#[test]
fn test_block_screen_empty_block() {
    let app = create_test_app(block_screen(0, true), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "No transactions in this block"));
}
