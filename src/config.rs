use crate::error::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_BASENAME: &str = "librarydb";
pub const DEFAULT_DATABASE_PATH: &str = "LibraryDB.sql";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: String,
    pub log_level: String,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            log_level: crate::logging::default_log_level().to_string(),
            log_dir: dirs::data_local_dir()
                .map(|dir| dir.join(CONFIG_BASENAME).join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
                .to_string_lossy()
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `librarydb.toml` in the working directory, then
    /// `LIBRARYDB_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_BASENAME)
    }

    pub fn load_from(basename: &str) -> Result<Self> {
        let s = Config::builder()
            .add_source(File::with_name(basename).required(false))
            .add_source(Environment::with_prefix("LIBRARYDB"))
            .build()?;
        Ok(s.try_deserialize()?)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = PathBuf::from(format!("{}.toml", CONFIG_BASENAME));
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }
}
