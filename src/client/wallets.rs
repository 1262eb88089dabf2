use log::{debug, info};
use serde_json::Value;

use super::NodeClient;
use super::types::RegisterRequest;
use crate::http::SdkError;
use crate::log::mask_string;

impl NodeClient {
    /// Registers a new user on the node, which creates a wallet for it.
    pub async fn create_wallet(&self, username: &str, password: &str) -> Result<Value, SdkError> {
        info!(target: "audit", username = &*mask_string(username); "HTTP: Registering wallet");
        self.post("/auth/register", &RegisterRequest { username, password }).await
    }

    /// Returns the spendable balance of `address` in display units.
    ///
    /// # Errors
    ///
    /// Fails with [`SdkError::MissingField`] if the node's answer has no
    /// numeric `balance` field.
    pub async fn get_balance(&self, address: &str) -> Result<f64, SdkError> {
        debug!(address = &*mask_string(address); "HTTP: Requesting balance");
        let result = self.get(&format!("/wallets/balance/{address}")).await?;
        result
            .get("balance")
            .and_then(Value::as_f64)
            .ok_or(SdkError::MissingField("balance"))
    }

    pub async fn get_wallet_info(&self, address: &str) -> Result<Value, SdkError> {
        self.get(&format!("/wallets/{address}")).await
    }

    pub async fn get_utxos(&self, address: &str) -> Result<Value, SdkError> {
        self.get(&format!("/wallets/utxos/{address}")).await
    }
}
