use serde::{Deserialize, Serialize};
use crate::structs::config::parser_config::ParserConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}
