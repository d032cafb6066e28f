use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "diet";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DietConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub db_file: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// Total width of the progress bar, borders included.
    pub bar_width: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().into_owned(),
            db_file: "db.json".into(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { bar_width: 80 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

/// Per-OS application data directory.
///
/// `~/Library/Application Support/diet` on macOS, `%APPDATA%\diet` on Windows,
/// `~/.diet` everywhere else.
pub fn default_data_dir() -> PathBuf {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        if let Some(dir) = dirs::data_dir() {
            return dir.join(APP_NAME);
        }
    }
    home_dir().join(format!(".{APP_NAME}"))
}

/// Returns the default config file path: `<data dir>/config.toml`
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.toml")
}

impl DietConfig {
    /// Read `config.toml` from the data directory, if the user created one.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Settings from `path`, or the built-in ones when the file is absent.
    /// `DIET_*` variables win over both.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: DietConfig = match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("invalid config in {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DietConfig::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", path.display()))
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// `DIET_DIR` relocates the store, `DIET_DB_FILE` renames it, and
    /// `DIET_LOG_LEVEL` takes a tracing filter directive.
    fn apply_env_overrides(&mut self) {
        let overrides = [
            ("DIET_DIR", &mut self.storage.data_dir),
            ("DIET_DB_FILE", &mut self.storage.db_file),
            ("DIET_LOG_LEVEL", &mut self.log.level),
        ];
        for (var, field) in overrides {
            if let Ok(val) = std::env::var(var) {
                *field = val;
            }
        }
    }

    /// Where `db.json` lives once `~` is expanded.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.data_dir).join(&self.storage.db_file)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else {
        PathBuf::from(path)
    }
}

// Falls back to the working directory when no home can be resolved.
fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
