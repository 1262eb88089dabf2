pub mod structured_console_encoder;

use std::fmt::Display;
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

use crate::log::structured_console_encoder::StructuredConsoleEncoderDeserializer;

const EXTERNAL_CONFIG_PATH: &str = "log4rs.yml";

/// Initializes logging for the command-line front end.
///
/// Uses `log4rs.yml` from the working directory when it exists, otherwise the
/// embedded defaults. Library users wire up their own logger instead.
pub fn init_logging() -> anyhow::Result<()> {
    let mut deserializers = Deserializers::default();
    deserializers.insert("structured_console", StructuredConsoleEncoderDeserializer);

    let path = Path::new(EXTERNAL_CONFIG_PATH);
    if path.exists() {
        log4rs::init_file(path, deserializers)
            .map_err(|e| anyhow::anyhow!("Failed to load external {}: {}", EXTERNAL_CONFIG_PATH, e))?;
        info!(
            path = EXTERNAL_CONFIG_PATH;
            "Logging initialized from external configuration"
        );
        return Ok(());
    }

    let yaml_content = include_str!("../../resources/default_log4rs.yml");
    let raw_config: RawConfig = serde_yaml::from_str(yaml_content)?;

    let (appenders, errors) = raw_config.appenders_lossy(&deserializers);
    if !errors.is_empty() {
        anyhow::bail!("Errors parsing embedded appenders: {:?}", errors);
    }

    let config = Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())?;

    log4rs::init_config(config)?;

    debug!("Logging initialized from embedded defaults (no external log4rs.yml found)");
    Ok(())
}

const REVEAL_PII_VAR: &str = "STRAT_REVEAL_PII";

/// Whether addresses and amounts may appear unmasked in logs. Read once per process.
fn reveal_pii() -> bool {
    static REVEAL: OnceLock<bool> = OnceLock::new();

    *REVEAL.get_or_init(|| {
        std::env::var(REVEAL_PII_VAR)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false)
    })
}

/// Shortens an address to its first and last six characters for logging.
///
/// Values of twelve characters or fewer collapse to `***`. Returned unchanged
/// when `STRAT_REVEAL_PII` is set.
pub fn mask_string(s: &str) -> String {
    if reveal_pii() {
        return s.to_string();
    }

    let chars: Vec<char> = s.chars().collect();
    match chars.len() {
        0..=12 => "***".to_string(),
        n => {
            let head: String = chars[..6].iter().collect();
            let tail: String = chars[n - 6..].iter().collect();
            format!("{head}...{tail}")
        },
    }
}

/// Amounts are hidden entirely unless `STRAT_REVEAL_PII` is set.
pub fn mask_amount<T: Display>(amount: T) -> String {
    if reveal_pii() {
        amount.to_string()
    } else {
        "<REDACTED>".to_string()
    }
}
