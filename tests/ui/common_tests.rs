//! Loading and error screen UI tests

use super::*;
use chainscope::app::Screen;

#[test]
fn test_loading_screen_shows_message() {
    let app = create_test_app(Screen::Loading("Fetching block 19000000...".to_string()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Loading"));
    assert!(buffer_contains(&buffer, "Fetching block 19000000..."));
}

#[test]
fn test_error_screen_shows_message() {
    let app = create_test_app(
        Screen::Error("Transaction not found or failed to fetch.".to_string()),
        true,
    );
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Error"));
    assert!(buffer_contains(
        &buffer,
        "Transaction not found or failed to fetch."
    ));
}

#[test]
fn test_error_screen_shows_nav_help() {
    let app = create_test_app(Screen::Error("boom".to_string()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "b back"));
    assert!(buffer_contains(&buffer, "h home"));
}

#[test]
fn test_error_screen_multiline_message() {
    let msg = "Failed to fetch block. Please check the number or try again.\n\nBlock 999999999 not found";
    let app = create_test_app(Screen::Error(msg.to_string()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(
        &buffer,
        "Failed to fetch block. Please check the number or try again."
    ));
    assert!(buffer_contains(&buffer, "Block 999999999 not found"));
}
