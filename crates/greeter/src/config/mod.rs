//! Server config loader (strict parsing).

pub mod schema;

use std::fs;

use greeter_core::error::{GreeterError, Result};

pub use schema::{ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GreeterError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Load from `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    if fs::metadata(path).is_ok() {
        load_from_file(path)
    } else {
        Ok(ServerConfig::default())
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| GreeterError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply the `PORT` environment variable, if set, over the configured
/// listen address. The host part is kept as configured.
pub fn apply_env_overrides(cfg: &mut ServerConfig) -> Result<()> {
    let Ok(port) = std::env::var("PORT") else {
        return Ok(());
    };
    let port: u16 = port
        .parse()
        .map_err(|e| GreeterError::BadRequest(format!("PORT must be a port number: {e}")))?;

    let host = cfg
        .server
        .listen
        .rsplit_once(':')
        .map(|(h, _)| h.to_string())
        .unwrap_or_else(|| cfg.server.listen.clone());
    cfg.server.listen = format!("{host}:{port}");
    cfg.validate()
}
