//! Resource lifecycle services
//!
//! Terraform resources expressed as create/read/update/delete over an
//! attribute map, plus the provider that wires them to the API client.

pub mod env_resource;
pub mod project_domain_resource;
pub mod project_resource;
pub mod provider;
pub mod resource;
pub mod resource_data;

#[cfg(test)]
pub(crate) mod testing;

pub use env_resource::EnvResource;
pub use project_domain_resource::ProjectDomainResource;
pub use project_resource::ProjectResource;
pub use provider::{VercelProvider, RESOURCE_TYPES};
pub use resource::{ProviderError, Resource};
pub use resource_data::ResourceData;
