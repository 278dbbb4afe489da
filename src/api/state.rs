use anyhow::Result;

use crate::core::AppConfig;
use crate::tutor::Gateway;

/// Shared by every request and never mutated after startup, so it
/// lives behind a plain `Arc` with no lock.
pub struct AppState {
    pub config: AppConfig,
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let gateway = Gateway::new(&config)?;
        Ok(Self { config, gateway })
    }
}
