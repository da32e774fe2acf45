//! Route targets used by the navigation collaborator.

use serde::{Deserialize, Serialize};

/// Route targets the session lifecycle redirects to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Unauthenticated landing route. Logout always redirects here.
    #[serde(default = "default_landing")]
    pub landing: String,
    /// Main authenticated route.
    #[serde(default = "default_home")]
    pub home: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            landing: default_landing(),
            home: default_home(),
        }
    }
}

fn default_landing() -> String {
    "/".to_string()
}

fn default_home() -> String {
    "/appointments".to_string()
}
