//! Post model
//!
//! A post is written once by the admin and read by everyone afterwards.
//! There is no update or delete.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of characters shown in a post card on the index page
pub const EXCERPT_CHARS: usize = 150;

/// A published blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Post title
    pub title: String,

    /// Post body (plain text)
    pub content: String,

    /// When this post was created (RFC3339)
    #[serde(default)]
    pub created_at: String,
}

impl Post {
    /// Build a stored post from a validated payload
    #[must_use]
    pub fn from_new(id: u64, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The first [`EXCERPT_CHARS`] characters of the content
    ///
    /// Cuts on a character boundary, never inside a multi-byte sequence.
    #[must_use]
    pub fn excerpt(&self) -> &str {
        match self.content.char_indices().nth(EXCERPT_CHARS) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// Why a post payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostError {
    /// Title is empty or whitespace
    #[error("post title cannot be empty")]
    EmptyTitle,
    /// Content is empty or whitespace
    #[error("post content cannot be empty")]
    EmptyContent,
}

/// Payload for creating a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
}

impl NewPost {
    /// Create a payload, trimming surrounding whitespace from the title
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            content: content.into(),
        }
    }

    /// Reject blank titles and blank content
    pub fn validate(&self) -> Result<(), PostError> {
        if self.title.trim().is_empty() {
            return Err(PostError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(PostError::EmptyContent);
        }
        Ok(())
    }
}
