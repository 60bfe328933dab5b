//! Provider entry point wiring configuration to client and resources

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::env_resource::EnvResource;
use super::project_domain_resource::ProjectDomainResource;
use super::project_resource::ProjectResource;
use super::resource::Resource;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::vercel::{
    EnvHandler, ProjectDomainHandler, ProjectHandler, VercelClient, VercelClientConfig,
    VercelError,
};

/// Resource type names served by [`VercelProvider::resource`]
pub const RESOURCE_TYPES: [&str; 3] = [
    ProjectResource::TYPE_NAME,
    EnvResource::TYPE_NAME,
    ProjectDomainResource::TYPE_NAME,
];

/// Entry point wiring one shared client into every resource
///
/// All handlers hold the same `Arc<VercelClient>`, so the rate limit applies
/// across resource types.
///
/// # Example
/// ```no_run
/// use tokio_util::sync::CancellationToken;
/// use vercel_provider::services::{ResourceData, VercelProvider};
///
/// # async fn example() -> anyhow::Result<()> {
/// let provider = VercelProvider::from_env()?;
/// let resource = provider.resource("vercel_env").expect("registered");
///
/// let mut data = ResourceData::new()
///     .with("project_id", "prj_123")
///     .with("type", "plain")
///     .with("key", "API_URL")
///     .with("value", "https://api.acme.dev")
///     .with("target", vec!["production"]);
/// resource.create(&CancellationToken::new(), &mut data).await?;
/// # Ok(())
/// # }
/// ```
pub struct VercelProvider {
    client: Arc<VercelClient>,
    projects: Arc<ProjectHandler>,
    envs: Arc<EnvHandler>,
    project_domains: Arc<ProjectDomainHandler>,
}

impl VercelProvider {
    /// Build the client and handlers from a loaded configuration
    pub fn new(config: &Config) -> Result<Self, VercelError> {
        let client = Arc::new(VercelClient::new(VercelClientConfig::from(config))?);

        info!(resources = ?RESOURCE_TYPES, "Vercel provider configured");

        Ok(Self {
            projects: Arc::new(ProjectHandler::new(Arc::clone(&client))),
            envs: Arc::new(EnvHandler::new(Arc::clone(&client))),
            project_domains: Arc::new(ProjectDomainHandler::new(Arc::clone(&client))),
            client,
        })
    }

    /// Load configuration from `vercel.yaml` and `VERCEL_*`, then build
    pub fn from_env() -> Result<Self> {
        let config = ConfigLoader::load()?;
        Ok(Self::new(&config)?)
    }

    /// Shared API client
    pub fn client(&self) -> &Arc<VercelClient> {
        &self.client
    }

    /// Project endpoints
    pub fn projects(&self) -> &ProjectHandler {
        &self.projects
    }

    /// Environment variable endpoints
    pub fn envs(&self) -> &EnvHandler {
        &self.envs
    }

    /// Project domain endpoints
    pub fn project_domains(&self) -> &ProjectDomainHandler {
        &self.project_domains
    }

    /// Lifecycle implementation for `type_name`, if it is one of [`RESOURCE_TYPES`]
    pub fn resource(&self, type_name: &str) -> Option<Box<dyn Resource>> {
        match type_name {
            ProjectResource::TYPE_NAME => {
                Some(Box::new(ProjectResource::new(self.projects.clone())))
            }
            EnvResource::TYPE_NAME => Some(Box::new(EnvResource::new(self.envs.clone()))),
            ProjectDomainResource::TYPE_NAME => Some(Box::new(ProjectDomainResource::new(
                self.project_domains.clone(),
            ))),
            _ => None,
        }
    }
}
