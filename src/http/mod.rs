//! Transport layer for STRAT node communication.
//!
//! Every catalog method in [`crate::client`] funnels through the dispatcher in
//! this module, which performs exactly one HTTP exchange per call and turns
//! whatever happens into either a JSON value or an [`SdkError`].
//!
//! # Behaviour
//!
//! - **Verbs**: GET, POST, PUT and DELETE only; anything else is rejected
//!   before the network is touched.
//! - **Authentication**: `Authorization: Bearer <token>` is attached if and
//!   only if a token was configured.
//! - **Bodies**: POST and PUT always carry a JSON body (`{}` when the caller
//!   has none); GET and DELETE never do.
//! - **No retries**: a failed exchange is reported as-is. There is no backoff
//!   and no caching.
//!
//! # Error Handling
//!
//! - Network failures (connection refused, timeouts) keep the original
//!   `reqwest` error as their source
//! - Non-2xx answers become [`SdkError::Api`] with the node's `error` text,
//!   or `Unknown error` when the body has none
//! - Success bodies that are not JSON become [`SdkError::MalformedResponse`]

mod error;
mod http_client;
mod middleware;

pub use error::SdkError;
pub use http_client::JSON_CONTENT_TYPE;
pub(crate) use http_client::HttpClient;
