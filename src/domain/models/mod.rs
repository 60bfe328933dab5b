//! Vercel API payloads and provider configuration

pub mod config;
pub mod env;
pub mod project;
pub mod project_domain;

pub use config::{ApiConfig, Config, LoggingConfig, RateLimitConfig};
pub use env::{CreateOrUpdateEnv, Env, EnvTarget, EnvType, ReadEnvResponse};
pub use project::{
    CreateProject, GitProvider, GitRepository, Project, ProjectAlias, ProjectLink,
    ProjectSettings, UpdateBranch, UpdateProject,
};
pub use project_domain::{CreateOrUpdateProjectDomain, ProjectDomain};

use chrono::{DateTime, Utc};

/// Convert a Vercel millisecond timestamp, treating 0 as unset
pub(crate) fn timestamp_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}
