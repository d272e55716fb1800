//! Post store port
//!
//! Defines the interface for loading and creating posts.

use super::super::models::{NewPost, Post};

/// Repository for blog posts
///
/// Implementations own id assignment: ids are unique and increasing,
/// but not necessarily contiguous.
pub trait PostStore: Send + Sync {
    /// List all posts in creation order
    fn list(&self) -> anyhow::Result<Vec<Post>>;

    /// Find a post by id
    fn get(&self, id: u64) -> anyhow::Result<Option<Post>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    /// Store a new post and return it with its assigned id
    fn create(&self, new: NewPost) -> anyhow::Result<Post>;

    /// Number of stored posts
    fn count(&self) -> anyhow::Result<usize> {
        Ok(self.list()?.len())
    }
}

/// Next id after the highest id in `posts`
#[must_use]
pub fn next_id(posts: &[Post]) -> u64 {
    posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
}
