//! Configuration for movedesk
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/movedesk/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::pricing::PricingRates;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Gallery items revealed per "show more" activation
    pub gallery_page_size: usize,

    /// Estimator tariff
    pub pricing: PricingRates,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            use_theme_background: true,
            gallery_page_size: 3,
            pricing: PricingRates::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is unset
    pub level: String,
    /// Write rotating JSON log files in addition to the in-app buffer
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "movedesk".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [gallery] section
    pub gallery: Option<FileGallery>,

    /// Optional [pricing] section
    pub pricing: Option<FilePricing>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileGallery {
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FilePricing {
    pub base_fee: Option<u32>,
    pub per_room: Option<u32>,
    pub free_km: Option<u32>,
    pub per_km: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/movedesk/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("movedesk").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Render the config as a TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# movedesk configuration
# Values here are overridden by environment variables (MOVEDESK_THEME, RUST_LOG).

# Theme: "auto", "dracula", "nord", "gruvbox"
theme = "{theme}"
use_theme_background = {bg}

[gallery]
# Items revealed per "show more"
page_size = {page_size}

[pricing]
# Estimator tariff in SAR
base_fee = {base_fee}
per_room = {per_room}
free_km = {free_km}
per_km = {per_km}

[logging]
# Filter level when RUST_LOG is unset: error, warn, info, debug, trace
level = "{level}"
# Write rotating JSON log files in addition to the in-app log buffer
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# Rotation: "hourly", "daily", "never"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme,
            bg = self.use_theme_background,
            page_size = self.gallery_page_size,
            base_fee = self.pricing.base_fee,
            per_room = self.pricing.per_room,
            free_km = self.pricing.free_km,
            per_km = self.pricing.per_km,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = match self.logging.file_rotation {
                LogRotation::Hourly => "hourly",
                LogRotation::Daily => "daily",
                LogRotation::Never => "never",
            },
        )
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults while the
    /// user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run: movedesk config --reset\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Config file doesn't exist - use defaults
                FileConfig::default()
            }
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_sources(file, std::env::var("MOVEDESK_THEME").ok())
    }

    /// Merge a file config with environment overrides
    fn from_sources(file: FileConfig, env_theme: Option<String>) -> Self {
        let defaults = Config::default();

        let theme = env_theme
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        let gallery_page_size = file
            .gallery
            .and_then(|g| g.page_size)
            .filter(|&n| n > 0)
            .unwrap_or(defaults.gallery_page_size);

        let pricing = {
            let f = file.pricing.unwrap_or_default();
            PricingRates {
                base_fee: f.base_fee.unwrap_or(defaults.pricing.base_fee),
                per_room: f.per_room.unwrap_or(defaults.pricing.per_room),
                free_km: f.free_km.unwrap_or(defaults.pricing.free_km),
                per_km: f.per_km.unwrap_or(defaults.pricing.per_km),
            }
        };

        let logging = {
            let f = file.logging.unwrap_or_default();
            LoggingConfig {
                level: f.level.unwrap_or(defaults.logging.level),
                file_enabled: f.file_enabled.unwrap_or(defaults.logging.file_enabled),
                file_dir: f
                    .file_dir
                    .map(PathBuf::from)
                    .unwrap_or(defaults.logging.file_dir),
                file_prefix: f.file_prefix.unwrap_or(defaults.logging.file_prefix),
                file_rotation: f
                    .file_rotation
                    .map(|s| LogRotation::parse(&s))
                    .unwrap_or(defaults.logging.file_rotation),
            }
        };

        Self {
            theme,
            use_theme_background,
            gallery_page_size,
            pricing,
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_round_trips() {
        let template = Config::default().to_toml();
        let file: FileConfig = toml::from_str(&template).expect("template parses");
        let config = Config::from_sources(file, None);
        assert_eq!(config.theme, "auto");
        assert_eq!(config.gallery_page_size, 3);
        assert_eq!(config.pricing.base_fee, 100);
        assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    }

    #[test]
    fn env_theme_beats_file() {
        let file: FileConfig = toml::from_str(r#"theme = "nord""#).unwrap();
        let config = Config::from_sources(file, Some("gruvbox".to_string()));
        assert_eq!(config.theme, "gruvbox");
    }

    #[test]
    fn partial_pricing_section_keeps_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            [pricing]
            per_km = 7
            "#,
        )
        .unwrap();
        let config = Config::from_sources(file, None);
        assert_eq!(config.pricing.per_km, 7);
        assert_eq!(config.pricing.base_fee, 100);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let file: FileConfig = toml::from_str(
            r#"
            [gallery]
            page_size = 0
            "#,
        )
        .unwrap();
        let config = Config::from_sources(file, None);
        assert_eq!(config.gallery_page_size, 3);
    }

    #[test]
    fn rotation_parsing() {
        assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
        assert_eq!(LogRotation::parse("weird"), LogRotation::Daily);
    }
}
