use serde::{Deserialize, Serialize};

/// Analysis errors and classes the analyzer could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Errors {
    pub num_errors: i64,
    pub num_missingclasses: i64,
    pub errors: Vec<ReportErrorEntry>,
    pub missingclasses: Vec<String>,
}

/// Placeholder for an `<Error>` element. Its content is not mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportErrorEntry {}
