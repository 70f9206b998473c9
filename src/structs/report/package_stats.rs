use serde::{Deserialize, Serialize};
use crate::structs::report::class_stats::ClassStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageStats {
    pub package: String,
    pub total_bugs: String,
    pub total_types: String,
    pub total_size: String,
    pub classstats: Vec<ClassStats>,
}
