//! Resource lifecycle trait and its errors

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::resource_data::ResourceData;
use crate::infrastructure::vercel::VercelError;

/// Errors raised by resource lifecycle operations
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A required attribute is unset
    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    /// An attribute is set to a value the API cannot take
    #[error("Invalid attribute {attribute}: {reason}")]
    InvalidAttribute {
        /// Attribute name
        attribute: String,
        /// Why the value was rejected
        reason: String,
    },

    /// API errors pass through unchanged
    #[error(transparent)]
    Api(#[from] VercelError),
}

impl ProviderError {
    /// The underlying API error, if any
    pub fn as_api(&self) -> Option<&VercelError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Lifecycle of one managed resource type
///
/// Every operation works on the resource's [`ResourceData`] in place: create
/// sets the id, read refreshes attributes (or clears the id when the remote
/// object is gone), delete clears the id.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name the resource is registered under (e.g. `vercel_project`)
    fn type_name(&self) -> &'static str;

    async fn create(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError>;

    async fn read(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError>;

    /// Push the difference between `prior` and `data`, then refresh `data`
    async fn update(
        &self,
        cancel: &CancellationToken,
        prior: &ResourceData,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError>;

    async fn delete(
        &self,
        cancel: &CancellationToken,
        data: &mut ResourceData,
    ) -> Result<(), ProviderError>;
}

/// Attribute holding the optional team scope, shared by every resource
pub(crate) const TEAM_ID: &str = "team_id";

/// Team scope of `data`; an empty string means the personal account
pub(crate) fn team_id(data: &ResourceData) -> Result<Option<&str>, ProviderError> {
    data.get_non_empty_str(TEAM_ID)
}
