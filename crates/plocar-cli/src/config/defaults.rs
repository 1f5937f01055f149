use plocar::engine::config::DEFAULT_MAX_ELEMENTS;

pub struct DefaultsConfig {
    pub verbose: bool,
    pub max_elements: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}
