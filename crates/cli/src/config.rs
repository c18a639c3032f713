//! Launcher configuration management

use anyhow::{Context, Result};
use device::{DEFAULT_FIRE_DELAY_SECS, FireDelay, TurretProfile};
use protocol::{BAY_CAPACITY, DEFAULT_H_AMP, DEFAULT_V_AMP};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LauncherConfig {
    #[serde(default)]
    pub launcher: LauncherSettings,
    #[serde(default)]
    pub turret: TurretSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Default log level, overridable with --log-level or RUST_LOG
    #[serde(default = "LauncherSettings::default_log_level")]
    pub log_level: String,
    /// Default pause between shots in seconds
    #[serde(default = "LauncherSettings::default_delay_secs")]
    pub default_delay_secs: u64,
}

impl LauncherSettings {
    fn default_log_level() -> String {
        "info".to_string()
    }

    fn default_delay_secs() -> u64 {
        DEFAULT_FIRE_DELAY_SECS
    }
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            default_delay_secs: Self::default_delay_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretSettings {
    /// Horizontal movement amplitude (opaque device semantics)
    #[serde(default = "TurretSettings::default_h_amp")]
    pub h_amp: u8,
    /// Vertical movement amplitude (opaque device semantics)
    #[serde(default = "TurretSettings::default_v_amp")]
    pub v_amp: u8,
    /// Number of physical missile bays
    #[serde(default = "TurretSettings::default_bay_capacity")]
    pub bay_capacity: u8,
}

impl TurretSettings {
    fn default_h_amp() -> u8 {
        DEFAULT_H_AMP
    }

    fn default_v_amp() -> u8 {
        DEFAULT_V_AMP
    }

    fn default_bay_capacity() -> u8 {
        BAY_CAPACITY
    }
}

impl Default for TurretSettings {
    fn default() -> Self {
        Self {
            h_amp: Self::default_h_amp(),
            v_amp: Self::default_v_amp(),
            bay_capacity: Self::default_bay_capacity(),
        }
    }
}

impl LauncherConfig {
    /// Default configuration file path under the user config directory.
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("missilectl").join("config.toml")
        } else {
            PathBuf::from("missilectl.toml")
        }
    }

    /// Load configuration from a specific path.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Load from the default path, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring bad config {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to a path, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("failed to serialize configuration")?;
        fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Turret profile handed to the launcher facade.
    pub fn turret_profile(&self) -> TurretProfile {
        TurretProfile {
            h_amp: self.turret.h_amp,
            v_amp: self.turret.v_amp,
            bay_capacity: self.turret.bay_capacity,
        }
    }

    /// Configured default inter-shot delay.
    pub fn fire_delay(&self) -> FireDelay {
        FireDelay::Seconds(self.launcher.default_delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_device_constants() {
        let config = LauncherConfig::default();
        assert_eq!(config.turret.h_amp, 4);
        assert_eq!(config.turret.v_amp, 2);
        assert_eq!(config.turret.bay_capacity, 3);
        assert_eq!(config.launcher.default_delay_secs, 5);
        assert_eq!(config.launcher.log_level, "info");
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = LauncherConfig::default();
        config.turret.h_amp = 6;
        config.launcher.default_delay_secs = 1;

        config.save(&path).unwrap();
        let loaded = LauncherConfig::load(&path).unwrap();

        assert_eq!(loaded.turret.h_amp, 6);
        assert_eq!(loaded.launcher.default_delay_secs, 1);
        assert_eq!(loaded.turret.bay_capacity, 3);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let partial = "[turret]\nv_amp = 9\n";
        let config: LauncherConfig = toml::from_str(partial).unwrap();
        assert_eq!(config.turret.v_amp, 9);
        assert_eq!(config.turret.h_amp, 4);
        assert_eq!(config.launcher.log_level, "info");
    }

    #[test]
    fn test_profile_and_delay_mapping() {
        let config = LauncherConfig::default();
        assert_eq!(config.turret_profile(), TurretProfile::default());
        assert_eq!(config.fire_delay(), FireDelay::Seconds(5));
    }
}
