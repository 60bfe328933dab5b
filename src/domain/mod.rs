//! Domain layer: Vercel payload models, configuration and port traits.

pub mod models;
pub mod ports;
