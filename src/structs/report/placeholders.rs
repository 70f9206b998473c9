use serde::{Deserialize, Serialize};

/// Present whenever the report carries a `<ClassFeatures>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassFeatures {}

/// Present whenever the report carries a `<History>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct History {}
