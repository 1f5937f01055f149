mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use plocar::engine::config::{DecodeConfig, DecodeConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDecodeConfig {
    verbose: Option<bool>,
    #[serde(rename = "max-elements")]
    max_elements: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    decode: Option<PartialDecodeConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves each setting as CLI flag, then config file, then built-in default.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<DecodeConfig> {
        let defaults = DefaultsConfig::default();
        let decode = self.decode.unwrap_or_default();

        let verbose = cli.verbose_decode || decode.verbose.unwrap_or(defaults.verbose);
        let max_elements = cli
            .max_elements
            .or(decode.max_elements)
            .unwrap_or(defaults.max_elements);

        let config = DecodeConfigBuilder::new()
            .verbose(verbose)
            .max_elements(max_elements)
            .build()?;
        debug!("Final decode configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use plocar::engine::config::DEFAULT_MAX_ELEMENTS;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["plocar"];
        argv.extend_from_slice(args);
        argv.push("info");
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = PartialConfig::default().merge_with_cli(&cli(&[])).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.max_elements, DEFAULT_MAX_ELEMENTS);
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plocar.toml");
        fs::write(&path, "[decode]\nverbose = true\nmax-elements = 4096\n").unwrap();

        let config = PartialConfig::load(Some(&path))
            .unwrap()
            .merge_with_cli(&cli(&[]))
            .unwrap();
        assert!(config.verbose);
        assert_eq!(config.max_elements, 4096);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plocar.toml");
        fs::write(&path, "[decode]\nmax-elements = 4096\n").unwrap();

        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&cli(&["--max-elements", "128", "--verbose-decode"]))
            .unwrap();
        assert!(config.verbose);
        assert_eq!(config.max_elements, 128);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plocar.toml");
        fs::write(&path, "[decode]\nprecision = 8\n").unwrap();

        let result = PartialConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn zero_ceiling_is_a_configuration_error() {
        let result = PartialConfig::default().merge_with_cli(&cli(&["--max-elements", "0"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PartialConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
