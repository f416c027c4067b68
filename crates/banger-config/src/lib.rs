//! # Banger Configuration
//!
//! User defaults for font, spacing and missing-character handling.
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`BANGER_FONT`, `BANGER_SPACING`, `BANGER_MISSING`)
//! 3. User config (~/.config/banger/config.toml)
//! 4. Built-in defaults

use banger_core::{BannerOptions, MissingCharPolicy, DEFAULT_FONT};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "BANGER_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("com", "MarcinOrlowski", "banger")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/banger"))
}

/// Default configuration file location
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Banner defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Font used when none is given on the command line
    pub font: String,
    /// Columns between characters; the font's own default when unset
    pub spacing: Option<usize>,
    /// Handling of characters the font cannot draw
    pub missing: MissingCharPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            spacing: None,
            missing: MissingCharPolicy::default(),
        }
    }
}

impl Config {
    /// Load from the default location.
    ///
    /// A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
        }
        Self::layered(&path)
    }

    /// Load from an explicitly chosen `path`, which must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Config file {} does not exist", path.display());
        }
        Self::layered(path)
    }

    /// `path` layered over the defaults, with environment overrides
    fn layered(path: &Path) -> anyhow::Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX));

        let config: Config = figment.extract()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Rendering options described by this configuration
    pub fn banner_options(&self) -> BannerOptions {
        BannerOptions::default()
            .with_spacing(self.spacing)
            .with_missing(self.missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.font, "quadrant");
        assert_eq!(config.spacing, None);
        assert_eq!(config.missing, MissingCharPolicy::Skip);
        assert_eq!(config.banner_options(), BannerOptions::default());
    }

    #[test]
    fn test_missing_default_file_gives_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::layered(Path::new("nope.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = Config::load_from(Path::new("nope.toml")).unwrap_err();
            assert!(err.to_string().contains("nope.toml does not exist"));
            Ok(())
        });
    }

    #[test]
    fn test_file_values() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    font = "quadrant"
                    spacing = 2
                    missing = "strict"
                "#,
            )?;
            let config = Config::load_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.font, "quadrant");
            assert_eq!(config.spacing, Some(2));
            assert_eq!(config.missing, MissingCharPolicy::Strict);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "font = \"quadrant\"\nspacing = 2\n")?;
            jail.set_env("BANGER_FONT", "block");
            jail.set_env("BANGER_SPACING", "0");
            let config = Config::load_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.font, "block");
            assert_eq!(config.spacing, Some(0));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "missing = \"sometimes\"\n")?;
            assert!(Config::load_from(Path::new("config.toml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_save_writes_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            font: "block".to_string(),
            spacing: Some(3),
            missing: MissingCharPolicy::Strict,
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("font = \"block\""));
        assert!(content.contains("missing = \"strict\""));
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }
}
