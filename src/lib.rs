//! chainscope - Terminal Ethereum block explorer
//!
//! Search by block number, address, or transaction hash and browse the
//! results as navigable detail screens.

pub mod app;
pub mod client;
pub mod config;
pub mod price;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use app::{AddressResult, App, BlockResult, NavLink, Screen, TxResult};
pub use config::Config;
