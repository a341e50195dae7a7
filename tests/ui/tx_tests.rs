//! Transaction page UI tests

use super::*;
use chainscope::app::{Screen, TxResult};
use chainscope::client::TxType;

fn tx_screen(details: chainscope::client::TxDetails) -> Screen {
    Screen::TxResult(TxResult {
        details,
        selected_link: 0,
    })
}

#[test]
fn test_tx_screen_shows_hash_and_status() {
    let app = create_test_app(tx_screen(mock_tx_details()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "0xaaaa1111"));
    assert!(buffer_contains(&buffer, "Success"));
}

#[test]
fn test_tx_screen_failed_status() {
    let mut details = mock_tx_details();
    details.success = false;
    let app = create_test_app(tx_screen(details), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Failed"));
    assert!(!buffer_contains(&buffer, "Success"));
}

#[test]
fn test_tx_screen_shows_type_label() {
    let app = create_test_app(tx_screen(mock_tx_details()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Type 2 (EIP-1559)"));
}

#[test]
fn test_tx_screen_legacy_type_label() {
    let mut details = mock_tx_details();
    details.tx_type = TxType::Legacy;
    let app = create_test_app(tx_screen(details), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Type 0 (EIP-Legacy)"));
}

#[test]
fn test_tx_screen_shows_value_and_fee() {
    let app = create_test_app(tx_screen(mock_tx_details()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "1.50000 ETH"));
    assert!(buffer_contains(&buffer, "Transaction Fee"));
    // 65000 * 48 gwei = 0.00312 ETH
    assert!(buffer_contains(&buffer, "0.00312 ETH"));
}

#[test]
fn test_tx_screen_shows_gas_details() {
    let app = create_test_app(tx_screen(mock_tx_details()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "50.000 Gwei (50000000000 wei)"));
    assert!(buffer_contains(&buffer, "48.000 Gwei (48000000000 wei)"));
    assert!(buffer_contains(&buffer, "65.00K"));
}

#[test]
fn test_tx_screen_shows_block_and_position() {
    let app = create_test_app(tx_screen(mock_tx_details()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "#19000000"));
    assert!(buffer_contains(&buffer, "Position in Block"));
    assert!(buffer_contains(&buffer, "Nonce"));
}

#[test]
fn test_tx_screen_contract_creation() {
    let mut details = mock_tx_details();
    details.to = None;
    let app = create_test_app(tx_screen(details), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Contract Creation"));
}

#[test]
fn test_tx_screen_empty_input_data() {
    let app = create_test_app(tx_screen(mock_tx_details()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "0x (empty)"));
}

#[test]
fn test_tx_screen_long_input_data_truncated() {
    let mut details = mock_tx_details();
    details.input = format!("0x{}", "ab".repeat(100));
    let app = create_test_app(tx_screen(details), true);
    let buffer = render_to_buffer(&app, 120, 40);
    let content = buffer_to_string(&buffer);

    assert!(content.contains("0xabababab"));
    assert!(content.contains("..."));
    assert!(!content.contains("ab".repeat(100).as_str()));
}

#[test]
fn test_tx_screen_pending_block() {
    let mut details = mock_tx_details();
    details.block_number = None;
    details.timestamp = None;
    let app = create_test_app(tx_screen(details), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Pending"));
}
