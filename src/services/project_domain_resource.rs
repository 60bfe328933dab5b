//! `vercel_project_domain` lifecycle

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::resource::{team_id, ProviderError, Resource};
use super::resource_data::ResourceData;
use crate::domain::models::{CreateOrUpdateProjectDomain, ProjectDomain};
use crate::domain::ports::ProjectDomainApi;

const MUTABLE_ATTRIBUTES: [&str; 3] = ["redirect", "redirect_status_code", "git_branch"];

/// `vercel_project_domain`: a domain attached to a project
///
/// The domain name doubles as the resource id.
pub struct ProjectDomainResource {
    api: Arc<dyn ProjectDomainApi>,
}

impl ProjectDomainResource {
    /// Terraform resource type name
    pub const TYPE_NAME: &'static str = "vercel_project_domain";

    /// Create the resource over an API port
    pub fn new(api: Arc<dyn ProjectDomainApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Resource for ProjectDomainResource {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    #[instrument(skip_all, err)]
    async fn create(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let project_id = data.require_str("project_id")?.to_string();
        let team = team_id(data)?.map(str::to_string);
        let payload = payload(data)?;

        self.api
            .create(cancel, &project_id, &payload, team.as_deref())
            .await?;

        self.read(cancel, data).await
    }

    #[instrument(skip_all, fields(name = data.id()), err)]
    async fn read(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let project_id = data.require_str("project_id")?.to_string();
        let team = team_id(data)?.map(str::to_string);
        let name = data.require_str("name")?.to_string();

        match self
            .api
            .read(cancel, &project_id, &name, team.as_deref())
            .await
        {
            Ok(domain) => {
                write_domain(data, &domain);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                warn!(
                    domain = %name,
                    project_id = %project_id,
                    "Project domain no longer exists, removing from state"
                );
                data.clear_id();
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    #[instrument(skip_all, fields(name = data.id()), err)]
    async fn update(
        &self,
        cancel: &CancellationToken,
        prior: &ResourceData,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        if data.has_changes(prior, &MUTABLE_ATTRIBUTES) {
            let project_id = data.require_str("project_id")?.to_string();
            let team = team_id(data)?.map(str::to_string);
            let name = data.require_id()?.to_string();
            let payload = payload(data)?;

            let domain = self
                .api
                .update(cancel, &project_id, &name, &payload, team.as_deref())
                .await?;
            data.set_id(domain.name);
        } else {
            debug!("No project domain attributes changed");
        }

        self.read(cancel, data).await
    }

    #[instrument(skip_all, fields(name = data.id()), err)]
    async fn delete(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let project_id = data.require_str("project_id")?.to_string();
        let team = team_id(data)?.map(str::to_string);
        let name = data.require_str("name")?.to_string();

        self.api
            .delete(cancel, &project_id, &name, team.as_deref())
            .await?;
        data.clear_id();
        Ok(())
    }
}

fn payload(data: &ResourceData) -> Result<CreateOrUpdateProjectDomain, ProviderError> {
    let redirect_status_code = data
        .get_u64("redirect_status_code")?
        .filter(|code| *code > 0)
        .map(|code| {
            u16::try_from(code)
                .ok()
                .filter(|code| matches!(code, 301 | 302 | 307 | 308))
                .ok_or_else(|| ProviderError::InvalidAttribute {
                    attribute: "redirect_status_code".to_string(),
                    reason: format!("expected 301, 302, 307 or 308, got {code}"),
                })
        })
        .transpose()?;

    Ok(CreateOrUpdateProjectDomain {
        name: data.require_str("name")?.to_string(),
        redirect: data.get_non_empty_str("redirect")?.map(str::to_string),
        redirect_status_code,
        git_branch: data.get_non_empty_str("git_branch")?.map(str::to_string),
    })
}

fn write_domain(data: &mut ResourceData, domain: &ProjectDomain) {
    data.set_id(domain.name.as_str());
    data.set("name", domain.name.as_str());
    data.set_opt("git_branch", domain.git_branch.as_deref());
    data.set_opt("redirect", domain.redirect.as_deref());
    data.set_opt("redirect_status_code", domain.redirect_status_code);
    data.set("created_at", domain.created_at);
    data.set("updated_at", domain.updated_at);
}
