use thiserror::Error;

/// Default ceiling on the number of complex PLO elements a header may request
/// (2^28 elements, 4 GiB of `complex128`).
pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 28;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Settings for one decode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Promotes the header summary and per-stage notes from `debug` to `info` level.
    pub verbose: bool,
    /// Upper bound on `nion * ns * nk * nb * nlmmax`.
    pub max_elements: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

#[derive(Default)]
pub struct DecodeConfigBuilder {
    verbose: Option<bool>,
    max_elements: Option<usize>,
}

impl DecodeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }
    pub fn max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }

    pub fn build(self) -> Result<DecodeConfig, ConfigError> {
        let defaults = DecodeConfig::default();
        let max_elements = self.max_elements.unwrap_or(defaults.max_elements);
        if max_elements == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_elements",
                reason: "must be greater than zero",
            });
        }
        Ok(DecodeConfig {
            verbose: self.verbose.unwrap_or(defaults.verbose),
            max_elements,
        })
    }
}
