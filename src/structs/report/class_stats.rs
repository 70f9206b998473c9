use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStats {
    pub class_name: String,
    pub source_file: String,
    pub interface: String,
    pub size: i64,
    pub bugs: i64,
}
