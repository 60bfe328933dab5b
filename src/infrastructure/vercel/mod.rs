//! Vercel REST API client
//!
//! A single rate-limited client shared by every resource handler:
//! - Bearer authentication and fixed headers
//! - Token bucket pacing (burst of one) with cancellable waits
//! - Structured decoding of `{"error": {"code", "message"}}` bodies

pub mod client;
pub mod errors;
pub mod handlers;
pub mod rate_limiter;
pub mod request;

pub use client::{VercelClient, VercelClientConfig};
pub use errors::{ErrorCode, VercelError};
pub use handlers::{EnvHandler, ProjectDomainHandler, ProjectHandler};
pub use rate_limiter::TokenBucketRateLimiter;
pub use request::ApiRequest;
