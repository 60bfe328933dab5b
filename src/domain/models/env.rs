//! Project environment variable payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::timestamp_from_millis;

/// Kind of value stored in a project environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    /// Literal value
    Plain,
    /// Id of a Vercel secret
    Secret,
    /// Name of a system environment variable
    System,
    /// Literal value stored encrypted at rest
    Encrypted,
    /// Write-only literal value
    Sensitive,
}

impl EnvType {
    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Secret => "secret",
            Self::System => "system",
            Self::Encrypted => "encrypted",
            Self::Sensitive => "sensitive",
        }
    }
}

impl fmt::Display for EnvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "secret" => Ok(Self::Secret),
            "system" => Ok(Self::System),
            "encrypted" => Ok(Self::Encrypted),
            "sensitive" => Ok(Self::Sensitive),
            other => Err(format!(
                "unknown env type '{other}', expected plain, secret, system, encrypted or sensitive"
            )),
        }
    }
}

/// Deployment environment a variable applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvTarget {
    /// `vercel dev` and local development
    Development,
    /// Preview deployments
    Preview,
    /// Production deployments
    Production,
}

impl EnvTarget {
    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Preview => "preview",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for EnvTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "preview" => Ok(Self::Preview),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "unknown env target '{other}', expected development, preview or production"
            )),
        }
    }
}

/// A project environment variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Env {
    /// How `value` is interpreted
    #[serde(rename = "type")]
    pub env_type: EnvType,

    /// Id assigned by Vercel
    pub id: String,

    /// Variable name
    pub key: String,

    /// Value, secret id or system variable name
    #[serde(default)]
    pub value: String,

    /// Deployment environments the variable applies to
    #[serde(default)]
    pub target: Vec<EnvTarget>,

    /// Only set for preview-only variables
    #[serde(default)]
    pub git_branch: Option<String>,

    /// Integration configuration that owns the variable
    #[serde(default)]
    pub configuration_id: Option<String>,

    /// Creation time in Unix milliseconds
    #[serde(default)]
    pub created_at: i64,

    /// Last update time in Unix milliseconds
    #[serde(default)]
    pub updated_at: i64,
}

impl Env {
    /// Creation time, if reported
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_from_millis(self.created_at)
    }

    /// Last update time, if reported
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        timestamp_from_millis(self.updated_at)
    }
}

/// Body of `GET /v6/projects/{id}/env`
///
/// Entries stay raw so that one variable of an unexpected shape does not
/// fail the lookup of another. Only the selected entry is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadEnvResponse {
    /// Every variable of the project, undecoded
    #[serde(default)]
    pub envs: Vec<serde_json::Value>,
}

impl ReadEnvResponse {
    /// Decode the entry whose `id` is `env_id`, if listed
    pub fn find(self, env_id: &str) -> Option<Result<Env, serde_json::Error>> {
        self.envs
            .into_iter()
            .find(|env| env.get("id").and_then(serde_json::Value::as_str) == Some(env_id))
            .map(serde_json::from_value)
    }
}

/// Payload for creating or editing an environment variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateEnv {
    /// How `value` is interpreted
    #[serde(rename = "type")]
    pub env_type: EnvType,

    /// Variable name
    pub key: String,

    /// Literal value, secret id or system variable name depending on `env_type`
    pub value: String,

    /// Deployment environments the variable applies to
    pub target: Vec<EnvTarget>,

    /// Only accepted when `target` is exactly `[preview]`
    pub git_branch: Option<String>,
}
