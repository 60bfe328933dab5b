//! Port traits between the resource lifecycle layer and the Vercel API
//!
//! The lifecycle services only see these traits, so tests can swap the HTTP
//! handlers for in-memory doubles.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::models::{
    CreateOrUpdateEnv, CreateOrUpdateProjectDomain, CreateProject, Env, Project, ProjectDomain,
    UpdateProject,
};
use crate::infrastructure::vercel::VercelError;

/// Project CRUD
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Create a project and return it as stored
    async fn create(
        &self,
        cancel: &CancellationToken,
        project: &CreateProject,
        team_id: Option<&str>,
    ) -> Result<Project, VercelError>;

    /// Fetch a project by id
    async fn read(
        &self,
        cancel: &CancellationToken,
        id: &str,
        team_id: Option<&str>,
    ) -> Result<Project, VercelError>;

    /// Apply changed settings, then the production branch if one is given
    async fn update(
        &self,
        cancel: &CancellationToken,
        id: &str,
        update: &UpdateProject,
        team_id: Option<&str>,
    ) -> Result<(), VercelError>;

    /// Point production deployments at `branch`
    async fn update_production_branch(
        &self,
        cancel: &CancellationToken,
        id: &str,
        branch: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError>;

    async fn delete(
        &self,
        cancel: &CancellationToken,
        id: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError>;
}

/// Project environment variable CRUD
#[async_trait]
pub trait EnvApi: Send + Sync {
    async fn create(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        payload: &CreateOrUpdateEnv,
        team_id: Option<&str>,
    ) -> Result<Env, VercelError>;

    /// Fetch one variable; a missing id is reported as `not_found`
    async fn read(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        env_id: &str,
        team_id: Option<&str>,
    ) -> Result<Env, VercelError>;

    async fn update(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        env_id: &str,
        payload: &CreateOrUpdateEnv,
        team_id: Option<&str>,
    ) -> Result<Env, VercelError>;

    async fn delete(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        env_id: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError>;
}

/// Project domain CRUD
#[async_trait]
pub trait ProjectDomainApi: Send + Sync {
    async fn create(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        payload: &CreateOrUpdateProjectDomain,
        team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError>;

    async fn read(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        name: &str,
        team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError>;

    async fn update(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        name: &str,
        payload: &CreateOrUpdateProjectDomain,
        team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError>;

    async fn delete(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        name: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError>;
}
