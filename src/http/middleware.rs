use std::time::Instant;

use http::Extensions;
use log::{debug, trace, warn};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Logs every exchange and its outcome. Request bodies are never logged, since
/// they routinely carry private keys.
pub(crate) struct RequestLogger;

#[async_trait::async_trait]
impl Middleware for RequestLogger {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let host = req.url().host_str().unwrap_or_default().to_string();
        trace!(
            method:% = method,
            path = req.url().path();
            "HTTP: Sending request"
        );

        let start = Instant::now();
        let result = next.run(req, extensions).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(resp) => debug!(
                method:% = method,
                host = &*host,
                status = resp.status().as_u16(),
                elapsed_ms = elapsed_ms;
                "HTTP: Response received"
            ),
            Err(e) => warn!(
                method:% = method,
                host = &*host,
                error:% = e,
                elapsed_ms = elapsed_ms;
                "HTTP: Request failed"
            ),
        }

        result
    }
}
