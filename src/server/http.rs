//! Framework-neutral request and reply values
//!
//! The router works on [`RequestParts`] and produces a [`Reply`]; only the
//! `tiny_http` adapter converts to and from the real server types.

use std::io::Cursor;

use serde::Serialize;
use tiny_http::{Header, Method, Response, StatusCode};

use crate::api::{ApiError, ApiResponse};

/// The parts of a request the router looks at
#[derive(Debug, Clone)]
pub struct RequestParts {
    /// HTTP method
    pub method: Method,
    /// Request target (path plus optional query)
    pub url: String,
    /// Raw `Cookie` header
    pub cookie: Option<String>,
    /// Request body
    pub body: String,
}

impl RequestParts {
    /// A request with no cookie and no body
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            cookie: None,
            body: String::new(),
        }
    }

    /// Set the `Cookie` header
    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Path without the query string
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.split_once('?').map_or(self.url.as_str(), |(path, _)| path)
    }
}

/// A response before it is handed to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Response headers in order
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: Vec<u8>,
}

impl Reply {
    /// Empty reply with the given status
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Successful JSON reply wrapped in the API envelope
    #[must_use]
    pub fn success<T: Serialize>(data: T, status: u16) -> Self {
        Self::json(&ApiResponse::success(data), status)
    }

    /// Error JSON reply with the error's status code
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
        Self::json(&response, error.status_code())
    }

    /// Convert a handler result to a reply
    #[must_use]
    pub fn from_result<T: Serialize>(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(data, 200),
            Err(e) => Self::error(&e),
        }
    }

    /// Serialize data to a JSON reply
    #[must_use]
    pub fn json<T: Serialize>(data: &T, status: u16) -> Self {
        let json =
            serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
        Self {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: json.into_bytes(),
        }
    }

    /// HTML page reply
    #[must_use]
    pub fn html(status: u16, page: String) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/html; charset=utf-8")
            .with_body(page.into_bytes())
    }

    /// Stylesheet reply
    #[must_use]
    pub fn css(content: &str) -> Self {
        Self::new(200)
            .with_header("Content-Type", "text/css; charset=utf-8")
            .with_body(content.as_bytes().to_vec())
    }

    /// Plain text reply
    #[must_use]
    pub fn text(status: u16, message: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain; charset=utf-8")
            .with_body(message.as_bytes().to_vec())
    }

    /// 302 redirect
    #[must_use]
    pub fn redirect(location: &str) -> Self {
        Self::new(302).with_header("Location", location)
    }

    /// 405 with an `Allow` header, JSON body for API paths
    #[must_use]
    pub fn method_not_allowed(method: &Method, allow: &str) -> Self {
        Self::error(&ApiError::method_not_allowed(method.as_str())).with_header("Allow", allow)
    }

    fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// First header value with this name (case-insensitive)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as text
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Convert to a `tiny_http` response
    #[must_use]
    pub fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let mut response = Response::from_data(self.body).with_status_code(StatusCode(self.status));
        for (name, value) in &self.headers {
            match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
                Ok(header) => response.add_header(header),
                Err(()) => log::warn!("dropping invalid header {name}"),
            }
        }
        response
    }
}
