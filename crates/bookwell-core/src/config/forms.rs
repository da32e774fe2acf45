//! Form validation configuration.

use serde::{Deserialize, Serialize};

/// Form validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Quiet period before a pending field validation runs, in
    /// milliseconds. Each keystroke restarts the window.
    #[serde(default = "default_debounce_delay")]
    pub debounce_delay_ms: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            debounce_delay_ms: default_debounce_delay(),
        }
    }
}

fn default_debounce_delay() -> u64 {
    300
}
