mod transfers;
mod types;

pub use transfers::*;
pub use types::*;

use alloy::{
    eips::BlockNumberOrTag,
    network::{Ethereum, TransactionResponse},
    primitives::{Address, TxHash, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
};
use anyhow::{anyhow, Context, Result};
use futures::future::try_join_all;
use std::time::Duration;
use tokio::time::sleep;

use crate::price::PriceClient;

type HttpProvider = RootProvider<Ethereum>;

/// Blocks shown on the home screen
pub const HOME_BLOCK_COUNT: usize = 5;

/// Read-only handle to the blockchain-data provider, with retry logic for
/// rate-limited endpoints. Cheap to clone; each view gets its own copy.
#[derive(Clone)]
pub struct ExplorerClient {
    provider: HttpProvider,
    max_retries: u32,
    base_delay: Duration,
}

impl ExplorerClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = endpoint.parse().context("Invalid RPC endpoint URL")?;
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_http(url);

        Ok(Self {
            provider,
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        })
    }

    async fn with_retry<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if attempt < self.max_retries && is_retryable(&e) {
                        let delay = self.base_delay * 2_u32.pow(attempt);
                        sleep(delay).await;
                        attempt += 1;
                    } else {
                        return Err(e);
                    }
                }
            }
        }
    }

    pub async fn get_latest_block_number(&self) -> Result<u64> {
        self.with_retry(|| async {
            self.provider
                .get_block_number()
                .await
                .context("Failed to fetch latest block number")
        })
        .await
    }

    /// Fetch a block with full transaction bodies
    pub async fn get_block_with_transactions(&self, number: u64) -> Result<BlockDetails> {
        self.with_retry(|| async {
            let block = self
                .provider
                .get_block_by_number(BlockNumberOrTag::Number(number))
                .full()
                .await
                .with_context(|| format!("RPC call get_block_by_number({number}) failed"))?
                .ok_or_else(|| anyhow!("Block {number} not found (RPC returned null)"))?;

            let transactions = block.transactions.txns().map(TxSummary::from_tx).collect();

            Ok(BlockDetails {
                info: BlockInfo::from_block(&block),
                transactions,
            })
        })
        .await
        .with_context(|| format!("Failed to fetch block #{number}"))
    }

    /// The most recent `count` blocks with transactions, fetched concurrently
    pub async fn get_recent_blocks(&self, count: usize) -> Result<Vec<BlockDetails>> {
        let latest = self.get_latest_block_number().await?;

        let fetches = recent_block_numbers(latest, count)
            .into_iter()
            .map(|number| self.get_block_with_transactions(number));

        try_join_all(fetches).await
    }

    /// Fetch a transaction and everything its detail screen needs.
    ///
    /// Two-stage pipeline: transaction and receipt are independent and run
    /// concurrently; the containing block (for the timestamp) depends on the
    /// transaction's block number and runs after.
    pub async fn get_transaction(&self, hash: TxHash) -> Result<TxDetails> {
        let (tx, receipt) = self
            .with_retry(|| async {
                tokio::try_join!(
                    async {
                        self.provider
                            .get_transaction_by_hash(hash)
                            .await
                            .with_context(|| {
                                format!("RPC call get_transaction_by_hash({hash:?}) failed")
                            })?
                            .ok_or_else(|| {
                                anyhow!("Transaction {hash:?} not found (RPC returned null)")
                            })
                    },
                    async {
                        self.provider
                            .get_transaction_receipt(hash)
                            .await
                            .with_context(|| {
                                format!("RPC call get_transaction_receipt({hash:?}) failed")
                            })?
                            .ok_or_else(|| {
                                anyhow!("Receipt for {hash:?} not found (transaction may be pending)")
                            })
                    }
                )
            })
            .await
            .with_context(|| format!("Failed to fetch transaction {hash:?}"))?;

        let timestamp = match tx.block_number() {
            Some(number) => Some(self.get_block_timestamp(number).await?),
            None => None,
        };

        Ok(TxDetails::from_parts(&tx, &receipt, timestamp))
    }

    async fn get_block_timestamp(&self, number: u64) -> Result<u64> {
        self.with_retry(|| async {
            let block = self
                .provider
                .get_block_by_number(BlockNumberOrTag::Number(number))
                .await
                .with_context(|| format!("RPC call get_block_by_number({number}) failed"))?
                .ok_or_else(|| anyhow!("Block {number} not found (RPC returned null)"))?;
            Ok(block.header.timestamp)
        })
        .await
    }

    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        self.with_retry(|| async {
            self.provider
                .get_balance(address)
                .await
                .with_context(|| format!("RPC call get_balance({address:?}) failed"))
        })
        .await
    }

    /// Transfer history for one direction, bounded to the provider's most
    /// recent matching records in descending order
    pub async fn get_asset_transfers(
        &self,
        direction: TransferDirection,
        address: Address,
    ) -> Result<Vec<AssetTransfer>> {
        self.with_retry(|| async {
            let query = TransferQuery::new(direction, address);
            let page: TransferPage = self
                .provider
                .raw_request("alchemy_getAssetTransfers".into(), [query])
                .await
                .context("RPC call alchemy_getAssetTransfers failed")?;
            Ok(page.transfers)
        })
        .await
        .with_context(|| format!("Failed to fetch transfer history for {address:?}"))
    }

    /// Everything the address screen needs: balance, fiat quote, and the
    /// merged recent-activity feed. The four sub-requests are independent
    /// and jointly awaited; if any one fails the whole overview fails.
    pub async fn get_address_overview(
        &self,
        address: Address,
        price: &PriceClient,
    ) -> Result<AddressDetails> {
        let (balance, sent, received, eth_usd) = tokio::try_join!(
            self.get_balance(address),
            self.get_asset_transfers(TransferDirection::Sent, address),
            self.get_asset_transfers(TransferDirection::Received, address),
            price.eth_usd(),
        )?;

        Ok(AddressDetails {
            address: format!("{address:?}"),
            balance,
            eth_usd,
            transfers: merge_recent_transfers(sent, received),
        })
    }
}

/// Descending block numbers for the home feed, clamped so a young chain
/// never yields the same block twice
fn recent_block_numbers(latest: u64, count: usize) -> Vec<u64> {
    let available = (latest + 1).min(count as u64);
    (0..available).map(|i| latest - i).collect()
}

/// Retry on rate limits and transient network errors
fn is_retryable(e: &anyhow::Error) -> bool {
    let msg = format!("{e:#}").to_lowercase();
    [
        "rate",
        "limit",
        "429",
        "too many",
        "timeout",
        "timed out",
        "connection",
        "unavailable",
        "502",
        "503",
        "504",
    ]
    .iter()
    .any(|needle| msg.contains(needle))
}
