//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by the CLI.
//!
//! ## Design
//!
//! - **Handlers take the app state**: `&App` plus typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    analyze_posts, analyze_text, check_session, create_post, get_post, list_posts, login, logout,
    require_admin,
};
pub use types::{
    AnalysisData, AnalyzeTextRequest, ApiResponse, ChartData, CreatePostRequest, LoginData,
    LoginRequest, MessageData, PostsData, SessionData,
};
