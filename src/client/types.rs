use alloy::{
    consensus::{Transaction as TxTrait, Typed2718},
    network::TransactionResponse,
    primitives::U256,
};

use super::transfers::AssetTransfer;

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct BlockInfo {
    pub number: u64,
    pub hash: String,
    pub parent_hash: String,
    pub timestamp: u64,
    pub miner: String,
    pub gas_used: u64,
    pub gas_limit: u64,
    pub base_fee: Option<u64>,
    pub tx_count: usize,
}

impl BlockInfo {
    pub fn from_block(block: &alloy::rpc::types::Block) -> Self {
        Self {
            number: block.header.number,
            hash: format!("{:?}", block.header.hash),
            parent_hash: format!("{:?}", block.header.parent_hash),
            timestamp: block.header.timestamp,
            miner: format!("{:?}", block.header.beneficiary),
            gas_used: block.header.gas_used,
            gas_limit: block.header.gas_limit,
            base_fee: block.header.base_fee_per_gas,
            tx_count: block.transactions.len(),
        }
    }
}

/// Lightweight transaction row for block and home listings
#[derive(Debug, Clone)]
pub struct TxSummary {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: U256,
}

impl TxSummary {
    pub fn from_tx(tx: &alloy::rpc::types::Transaction) -> Self {
        Self {
            hash: format!("{:?}", tx.tx_hash()),
            from: format!("{:?}", tx.from()),
            to: tx.to().map(|a| format!("{a:?}")),
            value: tx.value(),
        }
    }
}

/// A block header together with its full transaction list
#[derive(Debug, Clone)]
pub struct BlockDetails {
    pub info: BlockInfo,
    pub transactions: Vec<TxSummary>,
}

/// Transaction envelope type, labelled the way the explorer displays it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Legacy,
    Eip1559,
    Other(u8),
}

impl TxType {
    pub fn from_type_byte(ty: u8) -> Self {
        match ty {
            0 => TxType::Legacy,
            2 => TxType::Eip1559,
            n => TxType::Other(n),
        }
    }

    pub fn label(&self) -> String {
        match self {
            TxType::Legacy => "Type 0 (EIP-Legacy)".to_string(),
            TxType::Eip1559 => "Type 2 (EIP-1559)".to_string(),
            TxType::Other(n) => format!("Type {n} (EIP-Legacy)"),
        }
    }
}

/// Transaction, its receipt, and the containing block's timestamp,
/// flattened into one display model
#[derive(Debug, Clone)]
pub struct TxDetails {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: Option<u128>,
    pub gas_used: u64,
    pub effective_gas_price: u128,
    pub nonce: u64,
    pub block_number: Option<u64>,
    pub tx_index: Option<u64>,
    pub timestamp: Option<u64>,
    pub success: bool,
    pub tx_type: TxType,
    pub input: String,
    /// gas_used * effective_gas_price, in wei
    pub fee: U256,
}

impl TxDetails {
    pub fn from_parts(
        tx: &alloy::rpc::types::Transaction,
        receipt: &alloy::rpc::types::TransactionReceipt,
        timestamp: Option<u64>,
    ) -> Self {
        let fee = U256::from(receipt.gas_used) * U256::from(receipt.effective_gas_price);

        Self {
            hash: format!("{:?}", tx.tx_hash()),
            from: format!("{:?}", tx.from()),
            to: tx.to().map(|a| format!("{a:?}")),
            value: tx.value(),
            gas_limit: tx.gas_limit(),
            gas_price: <_ as TransactionResponse>::gas_price(tx),
            gas_used: receipt.gas_used,
            effective_gas_price: receipt.effective_gas_price,
            nonce: tx.nonce(),
            block_number: tx.block_number(),
            tx_index: receipt.transaction_index,
            timestamp,
            success: receipt.status(),
            tx_type: TxType::from_type_byte(tx.ty()),
            input: format!("{}", tx.input()),
            fee,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.success {
            "Success"
        } else {
            "Failed"
        }
    }
}

/// Derived per-address view: balance, fiat quote, and the merged
/// recent-activity feed
#[derive(Debug, Clone)]
pub struct AddressDetails {
    pub address: String,
    pub balance: U256,
    pub eth_usd: f64,
    pub transfers: Vec<AssetTransfer>,
}
