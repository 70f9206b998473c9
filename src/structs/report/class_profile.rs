use serde::{Deserialize, Serialize};

/// Timing for one analysis class (detector or engine pass).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassProfile {
    pub name: String,
    pub total_milliseconds: i64,
    pub invocations: i64,
    pub avg_microseconds_per_invocation: i64,
    pub max_microseconds_per_invocation: i64,
    pub standard_deviation_microseconds_per_invocation: i64,
}
