use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::structs::report::bug_instance::BugInstance;
use crate::structs::report::errors::Errors;
use crate::structs::report::find_bugs_summary::FindBugsSummary;
use crate::structs::report::placeholders::{ClassFeatures, History};
use crate::structs::report::project::Project;

/// Root of a parsed report.
///
/// Optional sections are `None` only when their element is absent from the
/// document; an empty element still yields `Some`. `buginstances` is always
/// present and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugCollection {
    pub version: String,
    pub sequence: i64,
    /// Epoch milliseconds, `-1` when absent.
    pub timestamp: i64,
    pub analysis_timestamp: i64,
    pub release: String,
    pub project: Option<Project>,
    pub buginstances: Vec<BugInstance>,
    pub errors: Option<Errors>,
    pub findbugssummary: Option<FindBugsSummary>,
    pub classfeatures: Option<ClassFeatures>,
    pub history: Option<History>,
}

impl BugCollection {
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        Self::millis_to_utc(self.timestamp)
    }

    pub fn analysis_timestamp_utc(&self) -> Option<DateTime<Utc>> {
        Self::millis_to_utc(self.analysis_timestamp)
    }

    pub fn count_by_category(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for bug in &self.buginstances {
            *counts.entry(bug.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn count_by_priority(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for bug in &self.buginstances {
            *counts.entry(bug.priority.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
        if millis < 0 {
            return None;
        }
        Utc.timestamp_millis_opt(millis).single()
    }
}
