//! `vercel_project` lifecycle

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{instrument, warn};

use super::resource::{team_id, ProviderError, Resource};
use super::resource_data::ResourceData;
use crate::domain::models::{CreateProject, GitRepository, Project, ProjectSettings, UpdateProject};
use crate::domain::ports::ProjectApi;

/// `vercel_project`
pub struct ProjectResource {
    api: Arc<dyn ProjectApi>,
}

impl ProjectResource {
    /// Terraform resource type name
    pub const TYPE_NAME: &'static str = "vercel_project";

    /// Create the resource over an API port
    pub fn new(api: Arc<dyn ProjectApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Resource for ProjectResource {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    #[instrument(skip_all, err)]
    async fn create(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let team = team_id(data)?.map(str::to_string);
        let payload = CreateProject {
            name: data.require_str("name")?.to_string(),
            git_repository: git_repository(data)?,
            settings: settings(data, None)?,
        };
        let branch = data.get_non_empty_str("branch")?.map(str::to_string);

        let project = self.api.create(cancel, &payload, team.as_deref()).await?;
        data.set_id(project.id.as_str());

        if let Some(branch) = branch.filter(|b| project.production_branch() != Some(b.as_str())) {
            self.api
                .update_production_branch(cancel, &project.id, &branch, team.as_deref())
                .await?;
        }

        self.read(cancel, data).await
    }

    #[instrument(skip_all, fields(id = data.id()), err)]
    async fn read(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let id = data.require_id()?.to_string();
        let team = team_id(data)?.map(str::to_string);

        let project = match self.api.read(cancel, &id, team.as_deref()).await {
            Ok(project) => project,
            Err(err) if err.is_not_found() => {
                warn!(project_id = %id, "Project no longer exists, removing from state");
                data.clear_id();
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        write_project(data, &project);
        Ok(())
    }

    #[instrument(skip_all, fields(id = data.id()), err)]
    async fn update(
        &self,
        cancel: &CancellationToken,
        prior: &ResourceData,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let id = data.require_id()?.to_string();
        let team = team_id(data)?.map(str::to_string);

        let mut update = UpdateProject {
            settings: settings(data, Some(prior))?,
            ..Default::default()
        };
        if data.has_change(prior, "name") {
            update.name = Some(data.require_str("name")?.to_string());
        }
        if data.has_change(prior, "branch") {
            update.branch = data.get_non_empty_str("branch")?.map(str::to_string);
        }

        self.api.update(cancel, &id, &update, team.as_deref()).await?;

        self.read(cancel, data).await
    }

    #[instrument(skip_all, fields(id = data.id()), err)]
    async fn delete(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let id = data.require_id()?.to_string();
        let team = team_id(data)?.map(str::to_string);

        self.api.delete(cancel, &id, team.as_deref()).await?;
        data.clear_id();
        Ok(())
    }
}

/// `git_repository` is a one element list of `{type, repo}`
fn git_repository(data: &ResourceData) -> Result<GitRepository, ProviderError> {
    let value = data
        .get("git_repository")
        .ok_or_else(|| ProviderError::MissingAttribute("git_repository".to_string()))?;

    let invalid = |reason: String| ProviderError::InvalidAttribute {
        attribute: "git_repository".to_string(),
        reason,
    };

    let mut repos: Vec<GitRepository> =
        serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?;
    match repos.len() {
        1 => Ok(repos.remove(0)),
        n => Err(invalid(format!("expected exactly one repository, got {n}"))),
    }
}

/// Build settings from attributes
///
/// With `prior` set only the attributes that changed since then are included.
fn settings(
    data: &ResourceData,
    prior: Option<&ResourceData>,
) -> Result<ProjectSettings, ProviderError> {
    let include = |key: &str| prior.map_or(true, |prior| data.has_change(prior, key));
    let string = |key: &str| -> Result<Option<String>, ProviderError> {
        if include(key) {
            Ok(data.get_str(key)?.map(str::to_string))
        } else {
            Ok(None)
        }
    };

    Ok(ProjectSettings {
        framework: string("framework")?,
        public_source: if include("public_source") {
            data.get_bool("public_source")?
        } else {
            None
        },
        install_command: string("install_command")?,
        build_command: string("build_command")?,
        dev_command: string("dev_command")?,
        output_directory: string("output_directory")?,
        serverless_function_region: string("serverless_function_region")?,
        root_directory: string("root_directory")?,
        node_version: string("node_version")?,
    })
}

fn write_project(data: &mut ResourceData, project: &Project) {
    data.set("name", project.name.as_str());
    data.set("account_id", project.account_id.as_str());
    data.set_opt("branch", project.production_branch());
    data.set("created_at", project.created_at);
    data.set("updated_at", project.updated_at);

    data.set_opt("framework", project.framework.clone());
    data.set_opt("public_source", project.public_source);
    data.set_opt("install_command", project.install_command.clone());
    data.set_opt("build_command", project.build_command.clone());
    data.set_opt("dev_command", project.dev_command.clone());
    data.set_opt("output_directory", project.output_directory.clone());
    data.set_opt(
        "serverless_function_region",
        project.serverless_function_region.clone(),
    );
    data.set_opt("root_directory", project.root_directory.clone());
    data.set_opt("node_version", project.node_version.clone());

    data.set("alias", project.alias_domains());
}
