//! API utilities for talking to the remote booking API.

use contracts::shared::ErrorResponse;
use std::collections::HashMap;
use std::fmt;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the API server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error from a mutation endpoint.
///
/// `field_errors` maps field name to message and is attached inline to the
/// corresponding form inputs; `message` goes to a toast.
#[derive(Debug, Clone, Default)]
pub struct ApiError {
    pub message: String,
    pub field_errors: HashMap<String, String>,
}

impl ApiError {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

/// Decode a non-2xx response into an `ApiError`, falling back to the HTTP
/// status when the body is not the structured error shape.
pub async fn decode_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() || !body.field_errors.is_empty() => ApiError {
            message: if body.error.is_empty() {
                format!("Request failed (HTTP {})", status)
            } else {
                body.error
            },
            field_errors: body.field_errors,
        },
        _ => ApiError::message(format!("Request failed (HTTP {})", status)),
    }
}
