use serde_json::Value;

use super::NodeClient;
use crate::http::SdkError;

/// Rich-list length used when the caller has no preference.
pub const DEFAULT_RICHLIST_LIMIT: u32 = 100;

impl NodeClient {
    /// Explorer view of an address: balance, transaction count and recent activity.
    pub async fn search_address(&self, address: &str) -> Result<Value, SdkError> {
        self.get(&format!("/explorer/address/{address}")).await
    }

    pub async fn get_rich_list(&self, limit: u32) -> Result<Value, SdkError> {
        self.get(&format!("/explorer/richlist?limit={limit}")).await
    }

    pub async fn get_network_stats(&self) -> Result<Value, SdkError> {
        self.get("/explorer/stats").await
    }
}
