//! Project payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::timestamp_from_millis;

/// A Vercel project as returned by `GET /v1/projects/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Internal project id
    pub id: String,

    /// Project name
    pub name: String,

    /// User or team owning the project
    #[serde(default)]
    pub account_id: String,

    /// Creation time in milliseconds since the epoch
    #[serde(default)]
    pub created_at: i64,

    /// Last update time in milliseconds since the epoch
    #[serde(default)]
    pub updated_at: i64,

    /// Framework preset; `None` means no preset
    #[serde(default)]
    pub framework: Option<String>,

    /// Whether deployment sources and logs are public
    #[serde(default)]
    pub public_source: Option<bool>,

    /// Command run in place of the detected install step
    #[serde(default)]
    pub install_command: Option<String>,

    /// Command run in place of the detected build step
    #[serde(default)]
    pub build_command: Option<String>,

    /// Command used by `vercel dev`
    #[serde(default)]
    pub dev_command: Option<String>,

    /// Directory holding the build output
    #[serde(default)]
    pub output_directory: Option<String>,

    /// Region serverless functions run in
    #[serde(default)]
    pub serverless_function_region: Option<String>,

    /// Subdirectory of the repository holding the project
    #[serde(default)]
    pub root_directory: Option<String>,

    /// Node.js major version, e.g. `18.x`
    #[serde(default)]
    pub node_version: Option<String>,

    /// Connected git repository
    #[serde(default)]
    pub link: Option<ProjectLink>,

    /// Production domains
    #[serde(default)]
    pub alias: Vec<ProjectAlias>,
}

impl Project {
    /// Branch whose pushes produce production deployments
    pub fn production_branch(&self) -> Option<&str> {
        self.link
            .as_ref()
            .and_then(|link| link.production_branch.as_deref())
    }

    /// Production domains, flattened to their names
    pub fn alias_domains(&self) -> Vec<String> {
        self.alias.iter().map(|a| a.domain.clone()).collect()
    }

    /// Creation time, if reported
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_from_millis(self.created_at)
    }

    /// Last update time, if reported
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        timestamp_from_millis(self.updated_at)
    }
}

/// Git link of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    /// Git provider (`github`, `gitlab`, `bitbucket`)
    #[serde(rename = "type", default)]
    pub provider: Option<String>,

    /// `owner/name` of the linked repository
    #[serde(default)]
    pub repo: Option<String>,

    /// Branch deployed to production
    #[serde(default)]
    pub production_branch: Option<String>,
}

/// A production domain of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAlias {
    /// Domain name
    pub domain: String,
}

/// Supported git providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitProvider {
    /// GitHub
    Github,
    /// GitLab
    Gitlab,
    /// Bitbucket
    Bitbucket,
}

impl GitProvider {
    /// Wire name of the provider
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Bitbucket => "bitbucket",
        }
    }
}

impl fmt::Display for GitProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GitProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "gitlab" => Ok(Self::Gitlab),
            "bitbucket" => Ok(Self::Bitbucket),
            other => Err(format!(
                "unknown git provider '{other}', expected github, gitlab or bitbucket"
            )),
        }
    }
}

/// Repository connected at project creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRepository {
    /// Git provider hosting the repository
    #[serde(rename = "type")]
    pub provider: GitProvider,

    /// `owner/name`
    pub repo: String,
}

/// Build and runtime settings shared by create and update payloads
///
/// Unset fields are left out of the payload so the API keeps its own
/// detection for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Framework preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    /// Whether deployment sources and logs are public
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_source: Option<bool>,

    /// Command run in place of the detected install step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,

    /// Command run in place of the detected build step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,

    /// Command used by `vercel dev`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_command: Option<String>,

    /// Directory holding the build output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,

    /// Region serverless functions run in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless_function_region: Option<String>,

    /// Subdirectory of the repository holding the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<String>,

    /// Node.js major version, e.g. `18.x`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_version: Option<String>,
}

impl ProjectSettings {
    /// True when no setting is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Payload of `POST /v6/projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    /// Project name
    pub name: String,

    /// Repository to connect
    pub git_repository: GitRepository,

    /// Build and runtime settings
    #[serde(flatten)]
    pub settings: ProjectSettings,
}

/// Payload of `PATCH /v2/projects/{id}`
///
/// The production branch lives behind a separate endpoint, so `branch` is
/// never part of the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    /// New project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Build and runtime settings
    #[serde(flatten)]
    pub settings: ProjectSettings,

    /// New production branch, sent to the branch endpoint
    #[serde(skip)]
    pub branch: Option<String>,
}

impl UpdateProject {
    /// True when there is nothing to send to the settings endpoint
    pub fn has_no_settings(&self) -> bool {
        self.name.is_none() && self.settings.is_empty()
    }
}

/// Payload of `PATCH /v4/projects/{id}/branch`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBranch {
    /// Branch to deploy to production
    pub branch: String,
}
