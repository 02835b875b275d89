//! Loading [`PortalConfig`] at startup.

use portal::PortalConfig;

/// Environment variable overriding `[submit] delay_ms`.
pub const SUBMIT_DELAY_ENV: &str = "CIPHERLUMA_SUBMIT_DELAY_MS";

/// `cipherluma.toml` from the working directory, with `.env` / environment
/// overrides applied on top.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> PortalConfig {
    dotenvy::dotenv().ok();
    let config = read_config_file(std::path::Path::new(PortalConfig::filename()));
    apply_overrides(config, std::env::var(SUBMIT_DELAY_ENV).ok())
}

/// The browser has no environment or file system; defaults apply.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> PortalConfig {
    PortalConfig::default()
}

/// A missing file is the default configuration; an unreadable or malformed
/// one is logged and ignored.
#[cfg(not(target_arch = "wasm32"))]
fn read_config_file(path: &std::path::Path) -> PortalConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => PortalConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            PortalConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => PortalConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read config file");
            PortalConfig::default()
        }
    }
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn apply_overrides(config: PortalConfig, delay_ms: Option<String>) -> PortalConfig {
    let Some(raw) = delay_ms else {
        return config;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) => config.with_submit_delay(ms),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "ignoring invalid {}", SUBMIT_DELAY_ENV);
            config
        }
    }
}
