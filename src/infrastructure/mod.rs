//! Infrastructure layer module
//!
//! Adapters for everything outside the process:
//! - Vercel REST client and resource handlers
//! - Configuration loading
//! - Logging

pub mod config;
pub mod logging;
pub mod vercel;
