use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::structs::report::bug_class::BugClass;
use crate::structs::report::bug_method::BugMethod;
use crate::structs::report::source_line::SourceLine;

/// One reported finding.
///
/// `strings` holds the `<String role=".." value=".."/>` children keyed by
/// role, in the order each role was first seen. A repeated role keeps its
/// original position but takes the later value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugInstance {
    #[serde(rename = "type")]
    pub bug_type: String,
    pub priority: String,
    pub rank: String,
    pub abbrev: String,
    pub category: String,
    pub strings: IndexMap<String, String>,
    pub bug_class: BugClass,
    pub bug_method: BugMethod,
    pub sourcelines: Vec<SourceLine>,
}
