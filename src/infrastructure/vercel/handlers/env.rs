//! Environment variable endpoints

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::domain::models::{CreateOrUpdateEnv, Env, ReadEnvResponse};
use crate::domain::ports::EnvApi;
use crate::infrastructure::vercel::{ApiRequest, VercelClient, VercelError};

/// Project environment variable endpoints
pub struct EnvHandler {
    client: Arc<VercelClient>,
}

impl EnvHandler {
    /// Create an environment variable handler over a shared client
    pub const fn new(client: Arc<VercelClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EnvApi for EnvHandler {
    async fn create(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        payload: &CreateOrUpdateEnv,
        team_id: Option<&str>,
    ) -> Result<Env, VercelError> {
        let request = ApiRequest::post(format!("/v6/projects/{project_id}/env"))
            .team(team_id)
            .json(payload);
        self.client.request(request, cancel).await
    }

    // No single-variable endpoint exists; list and pick by id
    async fn read(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        env_id: &str,
        team_id: Option<&str>,
    ) -> Result<Env, VercelError> {
        let request = ApiRequest::get(format!("/v6/projects/{project_id}/env")).team(team_id);
        let response: ReadEnvResponse = self.client.request(request, cancel).await?;

        response
            .find(env_id)
            .ok_or_else(|| {
                VercelError::not_found(format!(
                    "environment variable {env_id} not found in project {project_id}"
                ))
            })?
            .map_err(VercelError::Decode)
    }

    async fn update(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        env_id: &str,
        payload: &CreateOrUpdateEnv,
        team_id: Option<&str>,
    ) -> Result<Env, VercelError> {
        let request = ApiRequest::patch(format!("/v6/projects/{project_id}/env/{env_id}"))
            .team(team_id)
            .json(payload);
        self.client.request(request, cancel).await
    }

    async fn delete(
        &self,
        cancel: &CancellationToken,
        project_id: &str,
        env_id: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        let request =
            ApiRequest::delete(format!("/v8/projects/{project_id}/env/{env_id}")).team(team_id);
        self.client.execute(request, cancel).await
    }
}
