use log::{debug, info};
use serde_json::Value;

use super::NodeClient;
use super::types::SendTransactionRequest;
use crate::http::SdkError;
use crate::log::{mask_amount, mask_string};

/// Page size used for history listings when the caller has no preference.
pub const DEFAULT_HISTORY_PAGE: u32 = 50;

impl NodeClient {
    pub async fn get_transaction(&self, tx_id: &str) -> Result<Value, SdkError> {
        debug!(tx_id = tx_id; "HTTP: Requesting transaction");
        self.get(&format!("/transactions/{tx_id}")).await
    }

    /// Submits a transfer to the node.
    ///
    /// `private_key` is sent to the node as-is in the request body; signing
    /// happens on the node side. Only use this against a node you trust, over
    /// a transport you trust.
    ///
    /// # Errors
    ///
    /// Besides transport failures, the node commonly rejects transfers with a
    /// 400 and an `error` text such as `insufficient funds`, surfaced as
    /// [`SdkError::Api`].
    pub async fn send_transaction(
        &self,
        from_address: &str,
        to_address: &str,
        amount: f64,
        private_key: &str,
    ) -> Result<Value, SdkError> {
        info!(
            target: "audit",
            from = &*mask_string(from_address),
            to = &*mask_string(to_address),
            amount = &*mask_amount(amount);
            "HTTP: Submitting transaction"
        );
        let body = SendTransactionRequest {
            from_address,
            to_address,
            amount,
            private_key,
        };
        let result = self.post("/transactions/send", &body).await?;
        info!(target: "audit", "HTTP: Transaction submitted successfully");
        Ok(result)
    }

    /// Lists transactions touching `address`, newest first, one page at a time.
    pub async fn get_transaction_history(&self, address: &str, limit: u32, offset: u32) -> Result<Value, SdkError> {
        debug!(
            address = &*mask_string(address),
            limit = limit,
            offset = offset;
            "HTTP: Requesting transaction history"
        );
        self.get(&format!("/transactions/history/{address}?limit={limit}&offset={offset}"))
            .await
    }

    pub async fn get_pending_transactions(&self) -> Result<Value, SdkError> {
        self.get("/transactions/pending").await
    }
}
