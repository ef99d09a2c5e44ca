use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "regiomap.toml";
pub const ENV_PREFIX: &str = "REGIOMAP_";

pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    /// Defaults, then `regiomap.toml` (or `$REGIOMAP_CONFIG`), then
    /// `REGIOMAP_*` environment variables.
    pub fn new() -> Self {
        let path = std::env::var_os("REGIOMAP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(DashboardConfig::default()))
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"])),
        }
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn load(&self) -> Result<DashboardConfig> {
        let config: DashboardConfig = self.figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
