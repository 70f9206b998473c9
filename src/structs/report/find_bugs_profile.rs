use serde::{Deserialize, Serialize};
use crate::structs::report::class_profile::ClassProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindBugsProfile {
    pub classprofiles: Vec<ClassProfile>,
}
