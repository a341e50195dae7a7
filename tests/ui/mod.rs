//! UI rendering tests for chainscope
//!
//! These tests ensure the UI renders correctly by comparing against expected buffer output.
//! Run with: cargo test --test ui_tests

pub mod address_tests;
pub mod block_tests;
pub mod common_tests;
pub mod home_tests;
pub mod tx_tests;

use chainscope::app::{App, Screen};
use chainscope::client::{
    AddressDetails, AssetTransfer, BlockDetails, BlockInfo, TransferMetadata, TxDetails,
    TxSummary, TxType,
};
use chainscope::config::Config;
use chainscope::ui::draw;

use alloy::primitives::U256;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

// ==================== Test Data Builders ====================

pub fn mock_config() -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        network: "eth-sepolia".to_string(),
        recent_searches: vec![
            "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            "12345678".to_string(),
        ],
    }
}

pub fn mock_config_no_key() -> Config {
    Config {
        api_key: None,
        network: "eth-sepolia".to_string(),
        recent_searches: vec![],
    }
}

pub fn mock_block_info(tx_count: usize) -> BlockInfo {
    BlockInfo {
        number: 19000000,
        hash: "0xabc123def456789abc123def456789abc123def456789abc123def456789abcd".to_string(),
        parent_hash: "0xdef456789abc123def456789abc123def456789abc123def456789abc123def4"
            .to_string(),
        timestamp: 1700000000,
        miner: "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5".to_string(),
        gas_used: 15_000_000,
        gas_limit: 30_000_000,
        base_fee: Some(30_000_000_000),
        tx_count,
    }
}

pub fn mock_tx_summaries(count: usize) -> Vec<TxSummary> {
    (0..count)
        .map(|i| TxSummary {
            hash: format!("0x{:04x}{}", i, "1111222233334444555566667777888899990000aaaabbbbccccdddd"),
            from: format!("0x{:040x}", i + 1),
            to: Some(format!("0x{:040x}", i + 100)),
            value: U256::from(1_000_000_000_000_000_000u128), // 1 ETH
        })
        .collect()
}

pub fn mock_block_details(tx_count: usize) -> BlockDetails {
    BlockDetails {
        info: mock_block_info(tx_count),
        transactions: mock_tx_summaries(tx_count),
    }
}

pub fn mock_tx_details() -> TxDetails {
    TxDetails {
        hash: "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeee0000".to_string(),
        from: "0x1111111111111111111111111111111111111111".to_string(),
        to: Some("0x2222222222222222222222222222222222222222".to_string()),
        value: U256::from(1_500_000_000_000_000_000u128), // 1.5 ETH
        gas_limit: 100000,
        gas_price: Some(50_000_000_000),
        gas_used: 65000,
        effective_gas_price: 48_000_000_000,
        nonce: 42,
        block_number: Some(19000000),
        tx_index: Some(5),
        timestamp: Some(1700000000),
        success: true,
        tx_type: TxType::Eip1559,
        input: "0x".to_string(),
        fee: U256::from(65000u64) * U256::from(48_000_000_000u128),
    }
}

pub fn mock_transfers(count: usize) -> Vec<AssetTransfer> {
    (0..count)
        .map(|i| AssetTransfer {
            hash: format!("0x{:04x}{}", i, "ffff222233334444555566667777888899990000aaaabbbbccccdddd"),
            block_num: format!("{:#x}", 19000000 - i as u64),
            from: "0x1111111111111111111111111111111111111111".to_string(),
            to: Some("0x2222222222222222222222222222222222222222".to_string()),
            value: Some(0.5),
            asset: Some("ETH".to_string()),
            metadata: TransferMetadata {
                block_timestamp: format!("2024-05-{:02}T12:00:00.000Z", 28 - i.min(27)),
            },
        })
        .collect()
}

pub fn mock_address_details() -> AddressDetails {
    AddressDetails {
        address: "0x1111111111111111111111111111111111111111".to_string(),
        balance: U256::from(10u64).pow(U256::from(18)), // exactly 1 ETH
        eth_usd: 3870.79,
        transfers: mock_transfers(3),
    }
}

pub fn create_test_app(screen: Screen, with_key: bool) -> App {
    let config = if with_key {
        mock_config()
    } else {
        mock_config_no_key()
    };
    let mut app = App::new(config);
    app.screen = screen;
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
#[allow(dead_code)]
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
