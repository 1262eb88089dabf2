//! High-level client for the STRAT node API.
//!
//! [`NodeClient`] is the catalog of domain operations. Each method formats a
//! path and, for writes, a JSON body, then hands both to the transport in
//! [`crate::http`]. Methods are grouped by API area across the submodules of
//! this module; they all live on the same type.
//!
//! # Example
//!
//! ```rust,no_run
//! use strat::client::NodeClient;
//! use strat::config::ClientConfig;
//!
//! # async fn example() -> Result<(), strat::http::SdkError> {
//! let client = NodeClient::new(ClientConfig::default())?;
//!
//! let info = client.get_blockchain_info().await?;
//! println!("Height: {}", info["height"]);
//!
//! let balance = client.get_balance("0x1234567890abcdef1234567890abcdef12345678").await?;
//! println!("Balance: {balance} STRAT");
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```

mod blockchain;
mod contracts;
mod explorer;
mod governance;
mod mining;
mod nft;
mod staking;
mod transactions;
mod types;
mod wallets;

use std::time::Duration;

use log::{debug, warn};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::http::{HttpClient, SdkError};

pub use blockchain::DEFAULT_LATEST_BLOCKS;
pub use contracts::DEFAULT_CONTRACT_PAGE;
pub use explorer::DEFAULT_RICHLIST_LIMIT;
pub use transactions::DEFAULT_HISTORY_PAGE;

/// Client for one STRAT node.
///
/// Every catalog method issues exactly one HTTP request and returns the node's
/// JSON answer (or, for [`get_balance`](Self::get_balance), a single number).
/// Failures of any kind come back as [`SdkError`]; nothing is retried.
///
/// # Thread Safety
///
/// `NodeClient` is `Send + Sync`. Calls made concurrently from several tasks
/// each own their request and response, so one instance can be shared behind
/// an `Arc` without extra locking.
///
/// # Shutdown
///
/// [`close`](Self::close) releases the connection pool. It is meant to be
/// called once, when the client is no longer needed; every call after it
/// fails with [`SdkError::Closed`].
pub struct NodeClient {
    /// The underlying HTTP client that handles request/response processing.
    http_client: HttpClient,
}

impl NodeClient {
    /// Validates `config` and builds the connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidConfig`] if the configuration fails
    /// [`ClientConfig::validate`] or the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        let http_client = HttpClient::new(config)?;
        debug!(
            base_url:% = http_client.base_url(),
            authenticated = http_client.config().auth_token.is_some();
            "Node client created"
        );
        Ok(Self { http_client })
    }

    /// Client for `http://localhost:3000` with no token and a 30 second timeout.
    pub fn with_defaults() -> Result<Self, SdkError> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        self.http_client.config()
    }

    /// Returns the node address as a string, e.g. `"http://localhost:3000/"`.
    pub fn get_address(&self) -> String {
        self.http_client.base_url().to_string()
    }

    /// Sends a raw request to `path` under the API prefix.
    ///
    /// An escape hatch for endpoints the catalog does not cover. Only GET,
    /// POST, PUT and DELETE are accepted; any other verb fails with
    /// [`SdkError::UnsupportedMethod`] without touching the network.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, SdkError> {
        self.http_client.execute(method, path, body).await
    }

    /// Queries the node's `/health` endpoint, which sits outside the API prefix.
    pub async fn health_check(&self) -> Result<Value, SdkError> {
        self.http_client.execute_root(Method::GET, "/health", None).await
    }

    /// Queries the root of the API prefix, where the node reports its name and version.
    pub async fn get_api_version(&self) -> Result<Value, SdkError> {
        self.get("").await
    }

    /// Checks if the node is online and reachable.
    ///
    /// Runs [`health_check`](Self::health_check) and reports success as `true`;
    /// the failure, if any, is logged rather than returned.
    pub async fn is_online(&self) -> bool {
        match self.health_check().await {
            Ok(_) => {
                debug!("Node is online");
                true
            },
            Err(e) => {
                warn!(
                    error:% = e;
                    "Node is offline"
                );
                false
            },
        }
    }

    /// Round-trip time of the most recent completed exchange, if any.
    pub async fn get_last_request_latency(&self) -> Option<Duration> {
        self.http_client.get_latency().await
    }

    /// Releases the underlying connections.
    ///
    /// After this returns the client must not be used again: every request
    /// fails with [`SdkError::Closed`]. Calling `close` twice is harmless.
    pub async fn close(&self) {
        self.http_client.close().await;
    }

    pub async fn is_closed(&self) -> bool {
        self.http_client.is_closed().await
    }

    async fn get(&self, path: &str) -> Result<Value, SdkError> {
        self.http_client.execute(Method::GET, path, None).await
    }

    /// Non-finite floats in `body` encode as `null`; the node decides what that means.
    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, SdkError> {
        let body = serde_json::to_value(body).map_err(SdkError::RequestEncoding)?;
        self.http_client.execute(Method::POST, path, Some(body)).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::MockServer;

    use super::NodeClient;
    use crate::config::ClientConfig;

    pub const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

    pub async fn client_with_mock() -> (MockServer, NodeClient) {
        let mock_server = MockServer::start().await;
        let config = ClientConfig::default().with_base_url(&mock_server.uri()).unwrap();
        let client = NodeClient::new(config).unwrap();
        (mock_server, client)
    }
}
