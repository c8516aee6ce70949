//! Command-line interface configuration
//!
//! [espefuse] reads its defaults from an `espefuse.toml` file. The file is
//! searched for in the current directory, then in its parent, and finally in
//! the user's configuration directory. Command-line arguments always take
//! precedence over configured values.
//!
//! ```toml
//! chip  = "esp32s3"
//! image = "board.efuse.toml"
//! ```
//!
//! [espefuse]: https://crates.io/crates/espefuse

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::debug;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{Chip, Error};

const CONFIG_FILE: &str = "espefuse.toml";

/// Configured defaults of the command-line interface
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target device
    #[serde(default)]
    pub chip: Option<Chip>,
    /// Image file backing the virtual device
    #[serde(default)]
    pub image: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the configuration file, if one exists.
    pub fn load() -> Result<Self> {
        let path = Self::find_config_path(CONFIG_FILE)?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file results in the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No configuration found at {}", path.display());
            return Ok(Self::default());
        }

        let raw_data = read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config from {}", path.display()))?;
        let config = Self::parse(&raw_data)
            .wrap_err_with(|| format!("Failed to parse config at {}", path.display()))?;

        debug!("Config: {:#?}", &config);
        Ok(config)
    }

    fn parse(raw_data: &str) -> Result<Self> {
        toml::from_str(raw_data).into_diagnostic()
    }

    /// Target device, preferring the one given on the command line.
    pub fn chip(&self, overridden: Option<Chip>) -> Result<Chip, Error> {
        overridden.or(self.chip).ok_or(Error::ChipNotSelected)
    }

    /// Image file, preferring the one given on the command line.
    ///
    /// Falls back to a file named after the chip in the current directory.
    pub fn image(&self, overridden: Option<PathBuf>, chip: Chip) -> PathBuf {
        overridden
            .or_else(|| self.image.clone())
            .unwrap_or_else(|| PathBuf::from(format!("{chip}.efuse.toml")))
    }

    fn find_config_path(filename: &str) -> Result<PathBuf, Error> {
        let local_config = std::env::current_dir()?.join(filename);
        if local_config.exists() {
            return Ok(local_config);
        }
        if let Some(parent_folder) = std::env::current_dir()?.parent() {
            let workspace_config = parent_folder.join(filename);
            if workspace_config.exists() {
                return Ok(workspace_config);
            }
        }

        match ProjectDirs::from("rs", "esp", "espefuse") {
            Some(project_dirs) => Ok(project_dirs.config_dir().join(filename)),
            None => Ok(local_config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let config = Config::parse("chip = \"esp32s2\"\nimage = \"dev.toml\"\n").unwrap();
        assert_eq!(config.chip, Some(Chip::Esp32s2));
        assert_eq!(config.image, Some(PathBuf::from("dev.toml")));

        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert!(Config::parse("chip = \"esp8266\"").is_err());
        assert!(Config::parse("baudrate = 115200").is_err());
    }

    #[test]
    fn command_line_takes_precedence() {
        let config = Config {
            chip: Some(Chip::Esp32),
            image: Some(PathBuf::from("configured.toml")),
        };

        assert_eq!(config.chip(None).unwrap(), Chip::Esp32);
        assert_eq!(config.chip(Some(Chip::Esp32s3)).unwrap(), Chip::Esp32s3);
        assert_eq!(
            config.image(Some(PathBuf::from("cli.toml")), Chip::Esp32),
            PathBuf::from("cli.toml")
        );
        assert_eq!(
            config.image(None, Chip::Esp32),
            PathBuf::from("configured.toml")
        );

        assert!(matches!(
            Config::default().chip(None),
            Err(Error::ChipNotSelected)
        ));
        assert_eq!(
            Config::default().image(None, Chip::Esp32s3),
            PathBuf::from("esp32s3.efuse.toml")
        );
    }

    #[test]
    fn missing_file_is_default() {
        let config = Config::load_from(Path::new("does/not/exist/espefuse.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
