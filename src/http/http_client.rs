use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use super::error::SdkError;
use super::middleware::RequestLogger;
use crate::config::ClientConfig;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const UNKNOWN_ERROR: &str = "Unknown error";

/// Performs single request/response exchanges against one node.
///
/// Holds the validated configuration and the connection pool. The pool lives
/// behind a lock only so that [`close`](Self::close) can release it; every
/// other field is read-only after construction.
pub(crate) struct HttpClient {
    config: ClientConfig,
    client: RwLock<Option<ClientWithMiddleware>>,
    last_latency: RwLock<Option<Duration>>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        config.validate()?;

        let inner_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .user_agent(concat!("strat-sdk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SdkError::InvalidConfig(format!("could not build HTTP client: {e}")))?;

        let client = reqwest_middleware::ClientBuilder::new(inner_client)
            .with(RequestLogger)
            .build();

        Ok(Self {
            config,
            client: RwLock::new(Some(client)),
            last_latency: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Sends one request to `path` under the API prefix.
    pub async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, SdkError> {
        let url = Url::parse(&format!("{}{}{}", self.config.root(), self.config.api_prefix, path))?;
        self.send_request(method, url, body).await
    }

    /// Sends one request to `path` directly under the base URL, bypassing the
    /// API prefix. The node serves `/health` this way.
    pub async fn execute_root(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, SdkError> {
        let url = Url::parse(&format!("{}{}", self.config.root(), path))?;
        self.send_request(method, url, body).await
    }

    async fn send_request(&self, method: Method, url: Url, body: Option<Value>) -> Result<Value, SdkError> {
        if !matches!(method, Method::GET | Method::POST | Method::PUT | Method::DELETE) {
            return Err(SdkError::UnsupportedMethod(method));
        }

        // Cloning shares the pool; the lock is released before the request goes out.
        let client = self.client.read().await.clone().ok_or(SdkError::Closed)?;

        let mut req = match method {
            Method::GET | Method::DELETE => {
                if body.is_some() {
                    warn!(method:% = method; "HTTP: Dropping body on a bodiless request");
                }
                client.request(method, url)
            },
            _ => {
                let payload = body.unwrap_or_else(|| Value::Object(Default::default()));
                client
                    .request(method, url)
                    .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                    .body(payload.to_string())
            },
        };

        if let Some(token) = &self.config.auth_token {
            req = req.bearer_auth(token);
        }

        let start = Instant::now();
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        self.update_latency(start.elapsed()).await;

        if !status.is_success() {
            let message = extract_error_message(&text);
            debug!(
                status = status.as_u16(),
                reason = &*message;
                "HTTP: Node returned an error"
            );
            return Err(SdkError::Api { status, message });
        }

        parse_body(&text)
    }

    /// Releases the connection pool. Later requests fail with [`SdkError::Closed`].
    pub async fn close(&self) {
        if self.client.write().await.take().is_some() {
            debug!("HTTP: Client closed");
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.client.read().await.is_none()
    }

    async fn update_latency(&self, duration: Duration) {
        *self.last_latency.write().await = Some(duration);
    }

    pub async fn get_latency(&self) -> Option<Duration> {
        *self.last_latency.read().await
    }
}

/// Pulls the node's `error` field out of a failure body, if there is one.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut fields)) => match fields.remove("error") {
            Some(Value::String(message)) => message,
            Some(Value::Null) | None => UNKNOWN_ERROR.to_string(),
            Some(other) => other.to_string(),
        },
        _ => UNKNOWN_ERROR.to_string(),
    }
}

fn parse_body(body: &str) -> Result<Value, SdkError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(SdkError::MalformedResponse)
}
