//! Client configuration: the typed [`ClientConfig`] and the file/environment
//! loader used by the command-line front end.

mod client;
mod loader;

pub use client::{ClientConfig, DEFAULT_API_PREFIX, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use loader::{client_config, get_default_config, load_configuration, write_config_to};
