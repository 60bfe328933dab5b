//! Per-resource handlers translating CRUD calls into Vercel endpoints

pub mod env;
pub mod project;
pub mod project_domain;

pub use env::EnvHandler;
pub use project::ProjectHandler;
pub use project_domain::ProjectDomainHandler;
