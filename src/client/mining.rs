// Mining control and mempool inspection.

use log::info;
use reqwest::Method;
use serde_json::Value;

use super::NodeClient;
use super::types::StartMiningRequest;
use crate::http::SdkError;
use crate::log::mask_string;

impl NodeClient {
    pub async fn get_mining_info(&self) -> Result<Value, SdkError> {
        self.get("/mining/info").await
    }

    /// Starts the node's miner, crediting rewards to `miner_address`.
    pub async fn start_mining(&self, miner_address: &str) -> Result<Value, SdkError> {
        info!(target: "audit", miner = &*mask_string(miner_address); "HTTP: Starting miner");
        self.post("/mining/start", &StartMiningRequest { miner_address }).await
    }

    pub async fn stop_mining(&self) -> Result<Value, SdkError> {
        info!(target: "audit", "HTTP: Stopping miner");
        self.http_client.execute(Method::POST, "/mining/stop", None).await
    }

    pub async fn get_mining_stats(&self, address: &str) -> Result<Value, SdkError> {
        self.get(&format!("/mining/stats/{address}")).await
    }

    pub async fn get_mempool_info(&self) -> Result<Value, SdkError> {
        self.get("/mempool/stats").await
    }

    pub async fn get_mempool_transactions(&self) -> Result<Value, SdkError> {
        self.get("/mempool/transactions").await
    }
}
