//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (include_str! from magic_color.toml)
//! 2. `~/.config/magic_color/magic_color.toml`
//! 3. `./magic_color.toml`
//! 4. `MAGIC_COLOR__<SECTION>__<KEY>` environment variables
//!
//! Files other than the bundled defaults are optional.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use magic_color_error::{ConfigError, MagicColorError, MagicColorResult};
use magic_color_gallery::DEFAULT_GALLERY_KEY;
use magic_color_models::GeminiSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../magic_color.toml");

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the gallery file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Key the gallery is stored under
    pub gallery_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            gallery_key: DEFAULT_GALLERY_KEY.to_string(),
        }
    }
}

impl StorageSettings {
    /// The configured data directory, or the platform data directory.
    ///
    /// # Errors
    ///
    /// Fails when nothing is configured and the platform has no data
    /// directory.
    pub fn resolve_data_dir(&self) -> MagicColorResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("magic_color"))
            .ok_or_else(|| ConfigError::missing_setting("storage.data_dir").into())
    }
}

/// Top-level Magic Color configuration.
///
/// # Example
///
/// ```no_run
/// use magic_color::MagicColorConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MagicColorConfig::load()?;
/// println!("model: {}", config.gemini.model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MagicColorConfig {
    /// Gemini client settings
    pub gemini: GeminiSettings,
    /// Gallery storage settings
    pub storage: StorageSettings,
}

impl MagicColorConfig {
    /// Load the bundled defaults merged with user files and the environment.
    #[instrument]
    pub fn load() -> MagicColorResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/magic_color/magic_color.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("magic_color").required(false))
            .add_source(
                Environment::with_prefix("MAGIC_COLOR")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Load the bundled defaults overridden by a single file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MagicColorResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Parse a TOML document on top of the bundled defaults.
    pub fn from_toml_str(toml: &str) -> MagicColorResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> MagicColorResult<Self> {
        builder
            .build()
            .map_err(|e| {
                MagicColorError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MagicColorError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
