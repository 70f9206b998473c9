use crate::config::constants::DEFAULT_PARALLEL_THRESHOLD;

pub struct ConfigHelper;

impl ConfigHelper {
    pub const fn default_parallel() -> bool {
        true
    }

    pub const fn default_parallel_threshold() -> usize {
        DEFAULT_PARALLEL_THRESHOLD
    }
}
