use serde::{Deserialize, Serialize};
use crate::structs::report::find_bugs_profile::FindBugsProfile;
use crate::structs::report::package_stats::PackageStats;

/// Aggregate statistics for a run.
///
/// Every scalar is kept as the raw attribute string, numeric-looking or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindBugsSummary {
    pub timestamp: String,
    pub total_classes: String,
    pub referenced_classes: String,
    pub total_bugs: String,
    pub total_size: String,
    pub num_packages: String,
    pub java_version: String,
    pub vm_version: String,
    pub cpu_seconds: String,
    pub clock_seconds: String,
    pub peak_mbytes: String,
    pub alloc_mbytes: String,
    pub gc_seconds: String,
    pub priority_1: String,
    pub priority_2: String,
    pub priority_3: String,
    pub packagestats: Vec<PackageStats>,
    pub findbugsprofile: FindBugsProfile,
}
