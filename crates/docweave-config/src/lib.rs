use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", config_path.display())]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", config_path.display())]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// What the converter writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Outline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub nested_link_emphasis: bool,
    pub harvest_definitions_in_code: bool,
}

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    /// Directory local image paths are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_root: Option<PathBuf>,
    pub parser: ParserSettings,
}

impl Config {
    /// Reads `config_path`, or `Ok(None)` when there is no file there.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let path = config_path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(Some(config))
    }

    /// Reads the file at [`config_path`](Self::config_path).
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Parses TOML text, expanding `~` and `$VARS` in `image_root`.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        if let Some(root) = config.image_root.take() {
            config.image_root = Some(Self::expand_path(&root).unwrap_or(root));
        }
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let path = config_path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `~/.config/docweave/config.toml`
    pub fn config_path() -> PathBuf {
        let dir = shellexpand::tilde("~/.config/docweave");
        Path::new(dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables; `None` when a variable is unset.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
