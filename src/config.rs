use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Initial window placement and frame behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
    /// Width of the invisible border band treated as a resize handle
    pub resize_margin: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            x: 2,
            y: 1,
            width: 96,
            height: 32,
            min_width: 64,
            min_height: 26,
            resize_margin: 1,
        }
    }
}

/// Translation service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_secs: 10,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub gateway: GatewayConfig,
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            gateway: GatewayConfig::default(),
            log_level: "info".to_string(),
            tick_rate_ms: 50,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".aleut-translator"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults.
    ///
    /// On first run the defaults are written out so they can be edited.
    pub fn load() -> Config {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };

        if path.exists() {
            return Self::load_from(&path);
        }

        let config = Config::default();
        if let Err(e) = config.save() {
            log::warn!("Could not write default config: {}", e);
        }
        config
    }

    pub fn load_from(path: &Path) -> Config {
        if !path.exists() {
            return Config::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|contents| serde_json::from_str(&contents).map_err(anyhow::Error::from));

        match parsed {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
