//! Project domain payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp_from_millis;

/// A domain attached to a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDomain {
    /// Domain name, also its id within the project
    pub name: String,

    /// Branch the domain is auto-assigned to; `None` means production
    #[serde(default)]
    pub git_branch: Option<String>,

    /// Target domain when this domain redirects
    #[serde(default)]
    pub redirect: Option<String>,

    /// 301, 302, 307 or 308
    #[serde(default)]
    pub redirect_status_code: Option<u16>,

    /// Owning project
    #[serde(default)]
    pub project_id: String,

    /// Creation time in Unix milliseconds
    #[serde(default)]
    pub created_at: i64,

    /// Last update time in Unix milliseconds
    #[serde(default)]
    pub updated_at: i64,
}

impl ProjectDomain {
    /// Creation time, if reported
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_from_millis(self.created_at)
    }

    /// Last update time, if reported
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        timestamp_from_millis(self.updated_at)
    }
}

/// Payload for attaching or editing a project domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateProjectDomain {
    /// Domain name, also its id within the project
    pub name: String,

    /// Target domain to redirect to
    pub redirect: Option<String>,

    /// 301, 302, 307 or 308
    pub redirect_status_code: Option<u16>,

    /// Branch to auto-assign the domain to
    pub git_branch: Option<String>,
}
