//! Project endpoints

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::models::{CreateProject, Project, UpdateBranch, UpdateProject};
use crate::domain::ports::ProjectApi;
use crate::infrastructure::vercel::{ApiRequest, VercelClient, VercelError};

/// Projects endpoints
///
/// <https://vercel.com/docs/rest-api/endpoints/projects>
pub struct ProjectHandler {
    client: Arc<VercelClient>,
}

impl ProjectHandler {
    /// Create a project handler over a shared client
    pub const fn new(client: Arc<VercelClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectApi for ProjectHandler {
    async fn create(
        &self,
        cancel: &CancellationToken,
        project: &CreateProject,
        team_id: Option<&str>,
    ) -> Result<Project, VercelError> {
        let request = ApiRequest::post("/v6/projects").team(team_id).json(project);
        self.client.request(request, cancel).await
    }

    async fn read(
        &self,
        cancel: &CancellationToken,
        id: &str,
        team_id: Option<&str>,
    ) -> Result<Project, VercelError> {
        let request = ApiRequest::get(format!("/v1/projects/{id}")).team(team_id);
        self.client.request(request, cancel).await
    }

    async fn update(
        &self,
        cancel: &CancellationToken,
        id: &str,
        update: &UpdateProject,
        team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        if update.has_no_settings() {
            debug!(project_id = id, "No project settings changed");
        } else {
            let request = ApiRequest::patch(format!("/v2/projects/{id}"))
                .team(team_id)
                .json(update);
            self.client.execute(request, cancel).await?;
        }

        if let Some(branch) = update.branch.as_deref().filter(|b| !b.is_empty()) {
            self.update_production_branch(cancel, id, branch, team_id)
                .await?;
        }

        Ok(())
    }

    async fn update_production_branch(
        &self,
        cancel: &CancellationToken,
        id: &str,
        branch: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        let request = ApiRequest::patch(format!("/v4/projects/{id}/branch"))
            .team(team_id)
            .json(&UpdateBranch {
                branch: branch.to_string(),
            });
        self.client.execute(request, cancel).await
    }

    async fn delete(
        &self,
        cancel: &CancellationToken,
        id: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        let request = ApiRequest::delete(format!("/v1/projects/{id}")).team(team_id);
        self.client.execute(request, cancel).await
    }
}
