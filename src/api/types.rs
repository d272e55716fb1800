//! API request and response types
//!
//! All types are framework-agnostic. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::core::models::{Post, PostAnalysis};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a post
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Post title
    #[serde(default)]
    pub title: String,
    /// Post body
    #[serde(default)]
    pub content: String,
}

/// Request body for logging in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Admin email
    #[serde(default)]
    pub email: String,
    /// Admin password
    #[serde(default)]
    pub password: String,
}

/// Request body for analyzing arbitrary text
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Text to analyze
    #[serde(default)]
    pub text: String,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Post listing response data
#[derive(Debug, Serialize)]
pub struct PostsData {
    /// All posts in creation order
    pub posts: Vec<Post>,
}

/// Analysis endpoint response data
#[derive(Debug, Serialize)]
pub struct AnalysisData {
    /// One row per post
    pub posts: Vec<PostAnalysis>,
    /// Bar chart series (post titles against scores)
    pub chart: ChartData,
}

/// Bar chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    /// Bar labels (post titles)
    pub labels: Vec<String>,
    /// Bar values (scores)
    pub scores: Vec<u32>,
}

impl ChartData {
    /// Build the chart series from analysis rows
    #[must_use]
    pub fn from_rows(rows: &[PostAnalysis]) -> Self {
        Self {
            labels: rows.iter().map(|r| r.post.title.clone()).collect(),
            scores: rows.iter().map(|r| r.analysis.score).collect(),
        }
    }
}

/// Session check response data
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// Whether the caller holds a live admin session
    pub is_admin: bool,
    /// Seconds until the session expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// Login response data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Confirmation message
    pub message: String,
    /// When the session expires (RFC3339)
    pub expires_at: String,
}

/// Plain message response data
#[derive(Debug, Serialize)]
pub struct MessageData {
    /// Confirmation message
    pub message: String,
}
