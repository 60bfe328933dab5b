//! In-memory port doubles for lifecycle tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::domain::models::{
    CreateOrUpdateEnv, CreateOrUpdateProjectDomain, CreateProject, Env, Project, ProjectAlias,
    ProjectDomain, ProjectLink, ProjectSettings, UpdateProject,
};
use crate::domain::ports::{EnvApi, ProjectApi, ProjectDomainApi};
use crate::infrastructure::vercel::VercelError;

const NOW_MILLIS: i64 = 1_600_000_000_000;

fn team(team_id: Option<&str>) -> &str {
    team_id.unwrap_or("-")
}

#[derive(Default)]
pub(crate) struct FakeProjectApi {
    projects: Mutex<HashMap<String, Project>>,
    calls: Mutex<Vec<String>>,
    last_update: Mutex<Option<UpdateProject>>,
    next_id: AtomicUsize,
}

impl FakeProjectApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last_update(&self) -> Option<UpdateProject> {
        self.last_update.lock().unwrap().clone()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.projects.lock().unwrap().is_empty()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn apply_settings(project: &mut Project, settings: &ProjectSettings) {
    let ProjectSettings {
        framework,
        public_source,
        install_command,
        build_command,
        dev_command,
        output_directory,
        serverless_function_region,
        root_directory,
        node_version,
    } = settings.clone();

    project.framework = framework.or(project.framework.take());
    project.public_source = public_source.or(project.public_source);
    project.install_command = install_command.or(project.install_command.take());
    project.build_command = build_command.or(project.build_command.take());
    project.dev_command = dev_command.or(project.dev_command.take());
    project.output_directory = output_directory.or(project.output_directory.take());
    project.serverless_function_region =
        serverless_function_region.or(project.serverless_function_region.take());
    project.root_directory = root_directory.or(project.root_directory.take());
    project.node_version = node_version.or(project.node_version.take());
}

#[async_trait]
impl ProjectApi for FakeProjectApi {
    async fn create(
        &self,
        _cancel: &CancellationToken,
        payload: &CreateProject,
        team_id: Option<&str>,
    ) -> Result<Project, VercelError> {
        self.record(format!("create {} team={}", payload.name, team(team_id)));

        let id = format!("prj_{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut project = Project {
            id: id.clone(),
            name: payload.name.clone(),
            account_id: "acc_1".to_string(),
            created_at: NOW_MILLIS,
            updated_at: NOW_MILLIS,
            link: Some(ProjectLink {
                provider: Some(payload.git_repository.provider.to_string()),
                repo: Some(payload.git_repository.repo.clone()),
                production_branch: Some("main".to_string()),
            }),
            alias: vec![ProjectAlias {
                domain: format!("{}.vercel.app", payload.name),
            }],
            ..Default::default()
        };
        apply_settings(&mut project, &payload.settings);

        self.projects.lock().unwrap().insert(id, project.clone());
        Ok(project)
    }

    async fn read(
        &self,
        _cancel: &CancellationToken,
        id: &str,
        team_id: Option<&str>,
    ) -> Result<Project, VercelError> {
        self.record(format!("read {id} team={}", team(team_id)));
        self.projects
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| VercelError::not_found(format!("project {id} not found")))
    }

    async fn update(
        &self,
        cancel: &CancellationToken,
        id: &str,
        update: &UpdateProject,
        team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        self.record(format!("update {id} team={}", team(team_id)));
        *self.last_update.lock().unwrap() = Some(update.clone());

        {
            let mut projects = self.projects.lock().unwrap();
            let project = projects
                .get_mut(id)
                .ok_or_else(|| VercelError::not_found(format!("project {id} not found")))?;
            if let Some(name) = &update.name {
                project.name.clone_from(name);
            }
            apply_settings(project, &update.settings);
        }

        if let Some(branch) = update.branch.as_deref().filter(|b| !b.is_empty()) {
            self.update_production_branch(cancel, id, branch, team_id)
                .await?;
        }
        Ok(())
    }

    async fn update_production_branch(
        &self,
        _cancel: &CancellationToken,
        id: &str,
        branch: &str,
        _team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        self.record(format!("branch {id} {branch}"));
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .get_mut(id)
            .ok_or_else(|| VercelError::not_found(format!("project {id} not found")))?;
        project.link.get_or_insert_with(ProjectLink::default).production_branch =
            Some(branch.to_string());
        Ok(())
    }

    async fn delete(
        &self,
        _cancel: &CancellationToken,
        id: &str,
        team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        self.record(format!("delete {id} team={}", team(team_id)));
        self.projects
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| VercelError::not_found(format!("project {id} not found")))
    }
}

#[derive(Default)]
pub(crate) struct FakeEnvApi {
    envs: Mutex<HashMap<String, Env>>,
    updates: AtomicUsize,
    next_id: AtomicUsize,
}

impl FakeEnvApi {
    pub(crate) fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Drop a variable behind the resource's back
    pub(crate) fn remove(&self, id: &str) {
        self.envs.lock().unwrap().remove(id);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.envs.lock().unwrap().is_empty()
    }
}

fn env_from(id: String, payload: &CreateOrUpdateEnv) -> Env {
    Env {
        env_type: payload.env_type,
        id,
        key: payload.key.clone(),
        value: payload.value.clone(),
        target: payload.target.clone(),
        git_branch: payload.git_branch.clone(),
        configuration_id: None,
        created_at: NOW_MILLIS,
        updated_at: NOW_MILLIS,
    }
}

#[async_trait]
impl EnvApi for FakeEnvApi {
    async fn create(
        &self,
        _cancel: &CancellationToken,
        _project_id: &str,
        payload: &CreateOrUpdateEnv,
        _team_id: Option<&str>,
    ) -> Result<Env, VercelError> {
        let id = format!("env_{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let env = env_from(id.clone(), payload);
        self.envs.lock().unwrap().insert(id, env.clone());
        Ok(env)
    }

    async fn read(
        &self,
        _cancel: &CancellationToken,
        project_id: &str,
        env_id: &str,
        _team_id: Option<&str>,
    ) -> Result<Env, VercelError> {
        self.envs.lock().unwrap().get(env_id).cloned().ok_or_else(|| {
            VercelError::not_found(format!(
                "environment variable {env_id} not found in project {project_id}"
            ))
        })
    }

    async fn update(
        &self,
        _cancel: &CancellationToken,
        _project_id: &str,
        env_id: &str,
        payload: &CreateOrUpdateEnv,
        _team_id: Option<&str>,
    ) -> Result<Env, VercelError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut envs = self.envs.lock().unwrap();
        let env = envs
            .get_mut(env_id)
            .ok_or_else(|| VercelError::not_found(format!("env {env_id} not found")))?;
        *env = env_from(env_id.to_string(), payload);
        Ok(env.clone())
    }

    async fn delete(
        &self,
        _cancel: &CancellationToken,
        _project_id: &str,
        env_id: &str,
        _team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        self.envs
            .lock()
            .unwrap()
            .remove(env_id)
            .map(|_| ())
            .ok_or_else(|| VercelError::not_found(format!("env {env_id} not found")))
    }
}

#[derive(Default)]
pub(crate) struct FakeProjectDomainApi {
    domains: Mutex<HashMap<String, ProjectDomain>>,
    updates: AtomicUsize,
}

impl FakeProjectDomainApi {
    pub(crate) fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub(crate) fn remove(&self, name: &str) {
        self.domains.lock().unwrap().remove(name);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.domains.lock().unwrap().is_empty()
    }
}

fn domain_from(project_id: &str, payload: &CreateOrUpdateProjectDomain) -> ProjectDomain {
    ProjectDomain {
        name: payload.name.clone(),
        git_branch: payload.git_branch.clone(),
        redirect: payload.redirect.clone(),
        redirect_status_code: payload.redirect_status_code,
        project_id: project_id.to_string(),
        created_at: NOW_MILLIS,
        updated_at: NOW_MILLIS,
    }
}

#[async_trait]
impl ProjectDomainApi for FakeProjectDomainApi {
    async fn create(
        &self,
        _cancel: &CancellationToken,
        project_id: &str,
        payload: &CreateOrUpdateProjectDomain,
        _team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError> {
        let domain = domain_from(project_id, payload);
        self.domains
            .lock()
            .unwrap()
            .insert(domain.name.clone(), domain.clone());
        Ok(domain)
    }

    async fn read(
        &self,
        _cancel: &CancellationToken,
        _project_id: &str,
        name: &str,
        _team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError> {
        self.domains
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| VercelError::not_found(format!("domain {name} not found")))
    }

    async fn update(
        &self,
        _cancel: &CancellationToken,
        project_id: &str,
        name: &str,
        payload: &CreateOrUpdateProjectDomain,
        _team_id: Option<&str>,
    ) -> Result<ProjectDomain, VercelError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut domains = self.domains.lock().unwrap();
        let domain = domains
            .get_mut(name)
            .ok_or_else(|| VercelError::not_found(format!("domain {name} not found")))?;
        *domain = domain_from(project_id, payload);
        Ok(domain.clone())
    }

    async fn delete(
        &self,
        _cancel: &CancellationToken,
        _project_id: &str,
        name: &str,
        _team_id: Option<&str>,
    ) -> Result<(), VercelError> {
        self.domains
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| VercelError::not_found(format!("domain {name} not found")))
    }
}
