//! How a project's configuration is pushed to the device

use std::fmt;

use serde::{Deserialize, Serialize};

/// Endpoint used to apply a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    /// `POST /api/config/load` with the full project as the body
    #[default]
    ConfigLoad,
    /// `POST /api/project/{id}/load` with an empty body
    ProjectLoad,
}

impl fmt::Display for ApplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyMode::ConfigLoad => write!(f, "config_load"),
            ApplyMode::ProjectLoad => write!(f, "project_load"),
        }
    }
}
