//! Typed async client for the STRAT blockchain node's HTTP/JSON API.
//!
//! - [`client::NodeClient`]: the catalog of node operations
//! - [`http`]: the single dispatcher every operation goes through, and [`http::SdkError`]
//! - [`units`]: offline address checks and wei conversions
//! - [`config`]: connection settings and the file/environment loader

pub mod cli;
pub mod client;
pub mod config;
pub mod http;
pub mod log;
pub mod units;

pub use crate::client::NodeClient;
pub use crate::config::ClientConfig;
pub use crate::http::SdkError;
pub use crate::units::{from_wei, is_valid_address, to_wei};
