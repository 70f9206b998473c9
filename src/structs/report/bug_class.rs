use serde::{Deserialize, Serialize};
use crate::structs::report::source_line::SourceLine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugClass {
    pub classname: String,
    pub sourcelines: Vec<SourceLine>,
}
