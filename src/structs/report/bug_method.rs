use serde::{Deserialize, Serialize};
use crate::structs::report::source_line::SourceLine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugMethod {
    pub classname: String,
    pub name: String,
    pub signature: String,
    pub is_static: bool,
    pub sourcelines: Vec<SourceLine>,
}

impl BugMethod {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.classname, self.name)
    }
}
