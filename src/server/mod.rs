//! HTTP server
//!
//! - [`http`] - Framework-neutral request and reply values
//! - [`routes`] - API and page routing
//! - [`pages`] - HTML rendering
//! - [`chart`] - SVG bar chart
//! - [`cookies`] - Session cookie helpers
//! - `tiny_http` - The accept loop

pub mod chart;
pub mod cookies;
pub mod http;
pub mod pages;
pub mod routes;
pub mod tiny_http;

pub use http::{Reply, RequestParts};
pub use routes::route;
pub use self::tiny_http::serve;
