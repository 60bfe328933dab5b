//! Vercel provider core
//!
//! A rate-limited client for the Vercel REST API and the lifecycle logic for
//! the `vercel_project`, `vercel_env` and `vercel_project_domain` resources.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): API payloads and the port traits per entity
//! - **Service Layer** (`services`): Resource lifecycles over the ports
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, handlers,
//!   configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use tokio_util::sync::CancellationToken;
//! use vercel_provider::domain::ports::ProjectApi;
//! use vercel_provider::VercelProvider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = VercelProvider::from_env()?;
//!     let project = provider
//!         .projects()
//!         .read(&CancellationToken::new(), "prj_123", None)
//!         .await?;
//!     println!("{}", project.name);
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    ApiConfig, Config, CreateOrUpdateEnv, CreateOrUpdateProjectDomain, CreateProject, Env,
    EnvTarget, EnvType, GitProvider, GitRepository, LoggingConfig, Project, ProjectDomain,
    ProjectSettings, RateLimitConfig, UpdateProject,
};
pub use domain::ports::{EnvApi, ProjectApi, ProjectDomainApi};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::LoggerImpl;
pub use infrastructure::vercel::{
    ApiRequest, ErrorCode, VercelClient, VercelClientConfig, VercelError,
};
pub use services::{ProviderError, Resource, ResourceData, VercelProvider};
