//! Request description.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiErrorKind, Error};

/// A single API call: method, path segments, query parameters and JSON body.
#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub method: Method,
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Call {
    pub fn new(method: Method, path: Vec<String>) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: Vec<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: Vec<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: Vec<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: Vec<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        let body = serde_json::to_value(body).map_err(|e| {
            ApiError::new(
                ApiErrorKind::Validation,
                format!("Failed to serialize request body: {}", e),
            )
        })?;
        self.body = Some(body);
        Ok(self)
    }

    /// Add a field to an object body unless the body already sets it.
    pub fn with_body_field(mut self, key: &str, value: &str) -> Self {
        if let Some(Value::Object(map)) = self.body.as_mut() {
            map.entry(key).or_insert_with(|| Value::String(value.to_string()));
        }
        self
    }

    /// Path as written in logs.
    pub fn display_path(&self) -> String {
        self.path.join("/")
    }
}

/// Split a static endpoint such as `auth/challenges` into path segments.
pub(crate) fn static_path(path: &str) -> Vec<String> {
    path.split('/').map(str::to_string).collect()
}
