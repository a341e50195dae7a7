//! Address page UI tests

use super::*;
use chainscope::app::{AddressResult, Screen};

fn address_screen(details: chainscope::client::AddressDetails) -> Screen {
    Screen::AddressResult(AddressResult {
        details,
        selected_index: 0,
    })
}

#[test]
fn test_address_screen_shows_address() {
    let app = create_test_app(address_screen(mock_address_details()), true);
    let buffer = render_to_buffer(&app, 130, 40);

    assert!(buffer_contains(
        &buffer,
        "0x1111111111111111111111111111111111111111"
    ));
}

#[test]
fn test_address_screen_shows_balance_eight_decimals() {
    let app = create_test_app(address_screen(mock_address_details()), true);
    let buffer = render_to_buffer(&app, 130, 40);

    assert!(buffer_contains(&buffer, "1.00000000 ETH"));
}

#[test]
fn test_address_screen_shows_fiat_value() {
    // 1 ETH at $3,870.79
    let app = create_test_app(address_screen(mock_address_details()), true);
    let buffer = render_to_buffer(&app, 130, 40);

    assert!(buffer_contains(&buffer, "≈ $3,870.79"));
}

#[test]
fn test_address_screen_shows_transfer_feed() {
    let app = create_test_app(address_screen(mock_address_details()), true);
    let buffer = render_to_buffer(&app, 130, 40);

    assert!(buffer_contains(&buffer, "Recent Activity (3)"));
    assert!(buffer_contains(&buffer, "0x0000ffff"));
    assert!(buffer_contains(&buffer, "0.50000 ETH"));
    // Date column from the transfer metadata
    assert!(buffer_contains(&buffer, "2024-05-28"));
}

#[test]
fn test_address_screen_empty_feed() {
    let mut details = mock_address_details();
    details.transfers.clear();
    let app = create_test_app(address_screen(details), true);
    let buffer = render_to_buffer(&app, 130, 40);

    assert!(buffer_contains(&buffer, "Recent Activity (0)"));
    assert!(buffer_contains(&buffer, "No transfers found for this address"));
}

#[test]
fn test_address_screen_fractional_balance() {
    let mut details = mock_address_details();
    // 2 ETH
    details.balance = alloy::primitives::U256::from(2u64)
        * alloy::primitives::U256::from(10u64).pow(alloy::primitives::U256::from(18));
    let app = create_test_app(address_screen(details), true);
    let buffer = render_to_buffer(&app, 130, 40);

    assert!(buffer_contains(&buffer, "2.00000000 ETH"));
    assert!(buffer_contains(&buffer, "≈ $7,741.58"));
}

#[test]
fn test_address_screen_caps_feed_at_twenty_five() {
    let mut details = mock_address_details();
    details.transfers = mock_transfers(25);
    let app = create_test_app(address_screen(details), true);
    let buffer = render_to_buffer(&app, 130, 50);

    assert!(buffer_contains(&buffer, "Recent Activity (25)"));
}
