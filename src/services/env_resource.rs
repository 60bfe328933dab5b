//! `vercel_env` lifecycle

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::resource::{team_id, ProviderError, Resource};
use super::resource_data::ResourceData;
use crate::domain::models::{CreateOrUpdateEnv, Env, EnvTarget, EnvType};
use crate::domain::ports::EnvApi;

/// Attributes whose change triggers an update call
const MUTABLE_ATTRIBUTES: [&str; 5] = ["type", "key", "value", "target", "git_branch"];

/// `vercel_env`: an environment variable of a project
pub struct EnvResource {
    api: Arc<dyn EnvApi>,
}

impl EnvResource {
    /// Terraform resource type name
    pub const TYPE_NAME: &'static str = "vercel_env";

    /// Create the resource over an API port
    pub fn new(api: Arc<dyn EnvApi>) -> Self {
        Self { api }
    }
}

/// Ids shared by every call: project, optional team
struct Scope {
    project_id: String,
    team_id: Option<String>,
}

impl Scope {
    fn of(data: &ResourceData) -> Result<Self, ProviderError> {
        Ok(Self {
            project_id: data.require_str("project_id")?.to_string(),
            team_id: team_id(data)?.map(str::to_string),
        })
    }
}

#[async_trait]
impl Resource for EnvResource {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    #[instrument(skip_all, err)]
    async fn create(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let scope = Scope::of(data)?;
        let payload = payload(data)?;

        let env = self
            .api
            .create(cancel, &scope.project_id, &payload, scope.team_id.as_deref())
            .await?;
        data.set_id(env.id);

        self.read(cancel, data).await
    }

    #[instrument(skip_all, fields(id = data.id()), err)]
    async fn read(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let scope = Scope::of(data)?;
        let id = data.require_id()?.to_string();

        match self
            .api
            .read(cancel, &scope.project_id, &id, scope.team_id.as_deref())
            .await
        {
            Ok(env) => {
                write_env(data, &env);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                warn!(
                    env_id = %id,
                    project_id = %scope.project_id,
                    "Environment variable no longer exists, removing from state"
                );
                data.clear_id();
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    #[instrument(skip_all, fields(id = data.id()), err)]
    async fn update(
        &self,
        cancel: &CancellationToken,
        prior: &ResourceData,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        if data.has_changes(prior, &MUTABLE_ATTRIBUTES) {
            let scope = Scope::of(data)?;
            let id = data.require_id()?.to_string();
            let payload = payload(data)?;

            self.api
                .update(
                    cancel,
                    &scope.project_id,
                    &id,
                    &payload,
                    scope.team_id.as_deref(),
                )
                .await?;
        } else {
            debug!("No environment variable attributes changed");
        }

        self.read(cancel, data).await
    }

    #[instrument(skip_all, fields(id = data.id()), err)]
    async fn delete(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let scope = Scope::of(data)?;
        let id = data.require_id()?.to_string();

        self.api
            .delete(cancel, &scope.project_id, &id, scope.team_id.as_deref())
            .await?;
        data.clear_id();
        Ok(())
    }
}

fn payload(data: &ResourceData) -> Result<CreateOrUpdateEnv, ProviderError> {
    let target = data
        .get_str_list("target")?
        .ok_or_else(|| ProviderError::MissingAttribute("target".to_string()))?
        .iter()
        .map(|t| {
            t.parse::<EnvTarget>()
                .map_err(|reason| ProviderError::InvalidAttribute {
                    attribute: "target".to_string(),
                    reason,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CreateOrUpdateEnv {
        env_type: data.require_parsed::<EnvType>("type")?,
        key: data.require_str("key")?.to_string(),
        value: data.require_str("value")?.to_string(),
        target,
        git_branch: data.get_non_empty_str("git_branch")?.map(str::to_string),
    })
}

fn write_env(data: &mut ResourceData, env: &Env) {
    data.set("type", env.env_type.as_str());
    data.set("key", env.key.as_str());
    data.set("value", env.value.as_str());
    data.set(
        "target",
        env.target.iter().map(EnvTarget::as_str).collect::<Vec<_>>(),
    );
    data.set_opt("git_branch", env.git_branch.as_deref());
    data.set("created_at", env.created_at);
    data.set("updated_at", env.updated_at);
}
