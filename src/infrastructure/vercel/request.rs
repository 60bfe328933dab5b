//! Request builder

use reqwest::Method;
use serde::Serialize;

/// A single call against the Vercel API
///
/// Body encoding errors are held until the request is sent, the way
/// `reqwest::RequestBuilder` defers them.
#[derive(Debug)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) body: Option<serde_json::Result<Vec<u8>>>,
}

impl ApiRequest {
    /// Request `path` (relative to the base URL) with `method`
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST path`
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PATCH path`
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// `DELETE path`
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Scope the request to a team; empty ids mean the personal account
    #[must_use]
    pub fn team(mut self, team_id: Option<&str>) -> Self {
        if let Some(id) = team_id.filter(|id| !id.is_empty()) {
            self.query.push(("teamId", id.to_string()));
        }
        self
    }

    /// Attach a JSON body
    #[must_use]
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_vec(body));
        self
    }

    /// HTTP method
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL
    pub fn path(&self) -> &str {
        &self.path
    }
}
