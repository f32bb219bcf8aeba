use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::location::DEFAULT_MIN_LOOKUP_LEN;

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Behavior knobs for [`crate::FormController`].
///
/// Every key is optional when deserialized; missing keys take the defaults
/// below.
///
/// | key                  | default | meaning |
/// |----------------------|---------|---------|
/// | `submit_delay_ms`    | `2000`  | simulated submit latency |
/// | `lock_while_loading` | `false` | reject edits during the submit delay |
/// | `zip_lookup_min_len` | `3`     | shortest ZIP that is looked up |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub submit_delay_ms: u64,
    pub lock_while_loading: bool,
    pub zip_lookup_min_len: usize,
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            lock_while_loading: false,
            zip_lookup_min_len: DEFAULT_MIN_LOOKUP_LEN,
        }
    }
}
