use serde::{Deserialize, Serialize};

/// A span of source and bytecode tied to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    pub classname: String,
    pub start: i64,
    pub end: i64,
    pub start_bytecode: i64,
    pub end_bytecode: i64,
    pub sourcefile: String,
    pub sourcepath: String,
}

impl SourceLine {
    /// Number of source lines covered, when both ends are known.
    pub const fn line_span(&self) -> Option<i64> {
        if self.start < 0 || self.end < self.start {
            return None;
        }
        Some(self.end - self.start + 1)
    }
}
