//! Persisted client settings (`settings.json`).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::launcher::PlayerCommand;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5011/";
const SETTINGS_FILE: &str = "settings.json";
const CONFIG_DIR_ENV: &str = "CATALOG_CONFIG_DIR";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub version: u32,

    pub base_url: String,

    /// Whole-request HTTP timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Replaces the built-in player chain when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<PlayerCommand>,
}

fn default_timeout_secs() -> u64 {
    crate::gateway::DEFAULT_TIMEOUT.as_secs()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
            players: Vec::new(),
        }
    }
}

impl ClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Clone, Debug)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SETTINGS_FILE),
        }
    }

    /// `$CATALOG_CONFIG_DIR`, else the platform config dir plus `catalog/`.
    pub fn discover() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::in_dir(Path::new(&dir)));
        }
        let base = dirs::config_dir()
            .context("no config directory on this platform (set CATALOG_CONFIG_DIR)")?;
        Ok(Self::in_dir(&base.join("catalog")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults.
    pub fn load(&self) -> Result<ClientSettings> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ClientSettings::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()));
            }
        };
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", self.path.display()))
    }

    pub fn save(&self, settings: &ClientSettings) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(settings).context("serialize settings")?;
        write_atomic(&self.path, &bytes)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
