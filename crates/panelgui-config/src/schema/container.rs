//! Container bounds configuration.

use serde::{Deserialize, Serialize};

/// Size of the area panels live in, before the host reports real bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Container width in pixels (valid range: 120-10000).
    pub width: u32,
    /// Container height in pixels (valid range: 80-10000).
    pub height: u32,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 360,
        }
    }
}
