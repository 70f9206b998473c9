use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Map independent sections and bug instances on the rayon pool.
    /// Has no effect when built without `parallel-processing`.
    #[serde(default = "ConfigHelper::default_parallel")]
    pub parallel: bool,

    /// Minimum number of `BugInstance` elements before they are mapped in parallel.
    #[serde(default = "ConfigHelper::default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl ParserConfig {
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            parallel_threshold: ConfigHelper::default_parallel_threshold(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            parallel: ConfigHelper::default_parallel(),
            parallel_threshold: ConfigHelper::default_parallel_threshold(),
        }
    }
}
