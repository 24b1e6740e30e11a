//! Response envelopes of the projects REST API
//!
//! Every endpoint answers `{"success": bool, ...}`. A body that decodes but
//! reports `success: false` (or omits `data`) is a failed request, the same
//! as a non-2xx status.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::project::Project;

/// Message shown when a failed apply carries no explanation
pub const GENERIC_APPLY_ERROR: &str = "Unknown error while loading configuration";

/// Server-supplied pagination metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    #[serde(
        default,
        rename = "totalPages",
        alias = "total_pages",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_pages: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// `GET /api/projects` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectsEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: Option<Vec<Project>>,

    #[serde(default)]
    pub pagination: Option<PaginationMeta>,

    /// Bare total count, used when `pagination` is absent
    #[serde(default)]
    pub total: Option<u64>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

/// A successfully decoded page of projects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub pagination: Option<PaginationMeta>,
    pub total: Option<u64>,
}

impl ProjectsEnvelope {
    /// Validate the envelope and extract the page
    pub fn into_page(self) -> Result<ProjectPage> {
        if !self.success {
            let reason = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "success is false".to_string());
            return Err(Error::protocol(reason));
        }

        let projects = self
            .data
            .ok_or_else(|| Error::protocol("missing data"))?;

        Ok(ProjectPage {
            projects,
            pagination: self.pagination,
            total: self.total,
        })
    }
}

/// `POST /api/config/load` and `POST /api/project/{id}/load` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl LoadResponse {
    /// Convert into the server's confirmation message, or a rejection
    pub fn into_result(self) -> Result<Option<String>> {
        if self.success {
            return Ok(self.message);
        }

        let message = self
            .message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_APPLY_ERROR.to_string());
        Err(Error::rejected(message))
    }
}
