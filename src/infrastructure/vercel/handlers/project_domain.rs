//! Project domain endpoints

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::domain::models::{CreateOrUpdateProjectDomain, ProjectDomain};
use crate::domain::ports::ProjectDomainApi;
use crate::infrastructure::vercel::{ApiRequest, VercelClient, VercelError};

/// Project domain endpoints
pub struct ProjectDomainHandler {
    client: Arc<VercelClient>,
}

impl ProjectDomainHandler {
    /// Create a project domain handler over a shared client
    pub const fn new(client: Arc<VercelClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectDomainApi for ProjectDomainHandler {
    async fn create(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        payload: &CreateOrUpdateProjectDomain,
        team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError> {
        let request = ApiRequest::post(format!("/v8/projects/{project_id}/domains"))
            .team(team_id)
            .json(payload);
        self.client.request(request, cancel).await
    }

    async fn read(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        name: &str,
        team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError> {
        let request =
            ApiRequest::get(format!("/v8/projects/{project_id}/domains/{name}")).team(team_id);
        self.client.request(request, cancel).await
    }

    async fn update(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        name: &str,
        payload: &CreateOrUpdateProjectDomain,
        team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError> {
        let request = ApiRequest::patch(format!("/v1/projects/{project_id}/domains/{name}"))
            .team(team_id)
            .json(payload);
        self.client.request(request, cancel).await
    }

    async fn delete(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        name: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        let request =
            ApiRequest::delete(format!("/v8/projects/{project_id}/domains/{name}")).team(team_id);
        self.client.execute(request, cancel).await
    }
}
