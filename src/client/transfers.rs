//! Asset-transfer history: query types for the provider's
//! `alchemy_getAssetTransfers` extension and the merge that builds the
//! per-address recent-activity feed.

use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records requested per direction (provider-side bound)
pub const TRANSFER_QUERY_LIMIT: u64 = 50;

/// Entries kept in the merged feed
pub const RECENT_ACTIVITY_LIMIT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    /// Transfers sent from the address
    Sent,
    /// Transfers received by the address
    Received,
}

/// Request body for `alchemy_getAssetTransfers`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferQuery {
    from_block: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_address: Option<String>,
    category: Vec<&'static str>,
    /// Hex-encoded record count
    max_count: String,
    with_metadata: bool,
    order: &'static str,
}

impl TransferQuery {
    pub fn new(direction: TransferDirection, address: Address) -> Self {
        let addr = format!("{address:?}");
        let (from_address, to_address) = match direction {
            TransferDirection::Sent => (Some(addr), None),
            TransferDirection::Received => (None, Some(addr)),
        };

        Self {
            from_block: "0x0",
            from_address,
            to_address,
            category: vec!["external", "erc20", "internal"],
            max_count: format!("{TRANSFER_QUERY_LIMIT:#x}"),
            with_metadata: true,
            order: "desc",
        }
    }
}

/// Response envelope for `alchemy_getAssetTransfers`
#[derive(Debug, Deserialize)]
pub struct TransferPage {
    pub transfers: Vec<AssetTransfer>,
}

/// A provider-indexed value movement (distinct from a raw transaction)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfer {
    pub hash: String,
    /// Hex-encoded block number
    pub block_num: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    /// Value in whole asset units, as reported by the provider
    #[serde(default)]
    pub value: Option<f64>,
    /// Asset symbol ("ETH", "USDC", ...)
    #[serde(default)]
    pub asset: Option<String>,
    pub metadata: TransferMetadata,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferMetadata {
    /// ISO-8601 block timestamp, e.g. "2024-05-01T12:00:00.000Z"
    pub block_timestamp: String,
}

impl AssetTransfer {
    /// Block timestamp parsed to an instant; None if the provider sent
    /// something unparsable
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.metadata
            .block_timestamp
            .parse::<DateTime<Utc>>()
            .ok()
    }

    pub fn block_number(&self) -> Option<u64> {
        u64::from_str_radix(self.block_num.trim_start_matches("0x"), 16).ok()
    }

    /// Calendar date portion of the block timestamp, for the "Age" column
    pub fn date(&self) -> &str {
        self.metadata
            .block_timestamp
            .split('T')
            .next()
            .unwrap_or(&self.metadata.block_timestamp)
    }
}

/// Merge the sent and received feeds into one time-ordered list.
///
/// The union is re-sorted as a whole: both inputs are individually
/// descending, but they are not guaranteed to interleave correctly.
/// Truncation happens after sorting; truncating each side first could drop
/// genuinely newer records from the other side.
pub fn merge_recent_transfers(
    sent: Vec<AssetTransfer>,
    received: Vec<AssetTransfer>,
) -> Vec<AssetTransfer> {
    let mut all = sent;
    all.extend(received);
    all.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    all.truncate(RECENT_ACTIVITY_LIMIT);
    all
}
