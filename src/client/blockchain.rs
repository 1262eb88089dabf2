use log::debug;
use serde_json::Value;

use super::NodeClient;
use crate::http::SdkError;

/// Block count used when the caller has no preference.
pub const DEFAULT_LATEST_BLOCKS: u32 = 10;

impl NodeClient {
    /// Retrieves chain-wide state: height, difficulty, latest hash and so on.
    pub async fn get_blockchain_info(&self) -> Result<Value, SdkError> {
        debug!("HTTP: Requesting blockchain info");
        self.get("/blockchain/info").await
    }

    /// Fetches one block by hash or by height.
    ///
    /// An identifier made only of ASCII digits is treated as a block index and
    /// goes to `/blockchain/block-by-index/{n}`; anything else is treated as a
    /// hash and goes to `/blockchain/block/{hash}`. The empty string counts as
    /// a hash. Use [`get_block_by_hash`](Self::get_block_by_hash) for hashes
    /// that happen to be all digits.
    ///
    /// ```rust,no_run
    /// # async fn example(client: strat::client::NodeClient) -> Result<(), strat::http::SdkError> {
    /// let genesis = client.get_block("0").await?;
    /// let by_hash = client.get_block("00000abc").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_block(&self, identifier: &str) -> Result<Value, SdkError> {
        if is_block_index(identifier) {
            self.fetch_block(format!("/blockchain/block-by-index/{identifier}")).await
        } else {
            self.get_block_by_hash(identifier).await
        }
    }

    /// Fetches a block by hash, without guessing from the identifier's shape.
    pub async fn get_block_by_hash(&self, hash: &str) -> Result<Value, SdkError> {
        self.fetch_block(format!("/blockchain/block/{hash}")).await
    }

    pub async fn get_block_by_index(&self, index: u64) -> Result<Value, SdkError> {
        self.fetch_block(format!("/blockchain/block-by-index/{index}")).await
    }

    /// Returns the `count` most recent blocks.
    pub async fn get_latest_blocks(&self, count: u32) -> Result<Value, SdkError> {
        self.get(&format!("/blockchain/blocks?limit={count}")).await
    }

    async fn fetch_block(&self, path: String) -> Result<Value, SdkError> {
        debug!(path = &*path; "HTTP: Requesting block");
        self.get(&path).await
    }
}

fn is_block_index(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}
