//! Panel configuration
//!
//! panel.toml is validated and encoded with postcard by build.rs; the
//! bytes are compiled in and decoded once at startup.

use defmt::*;
use iconlcd_core::PanelConfig;

/// Encoded configuration produced by build.rs
const PANEL_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/panel.bin"));

/// Configuration loading errors
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Deserialization failed
    Deserialize,
}

/// Decode a postcard-encoded panel configuration
pub fn decode(bytes: &[u8]) -> Result<PanelConfig, ConfigError> {
    postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
}

/// Embedded panel configuration, or the defaults if it cannot be decoded
pub fn load() -> PanelConfig {
    match decode(PANEL_CONFIG) {
        Ok(config) => {
            info!("Panel config: {}", config);
            config
        }
        Err(e) => {
            warn!("Embedded panel config unreadable ({}), using defaults", e);
            PanelConfig::default()
        }
    }
}
