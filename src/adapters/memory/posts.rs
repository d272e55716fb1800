//! In-memory post store

use std::sync::{Mutex, MutexGuard};

use crate::core::models::{NewPost, Post};
use crate::core::ports::{PostStore, next_id};

/// Post store holding posts in a `Vec`
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryPostStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing posts (ids are kept as given)
    #[must_use]
    pub const fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Vec<Post>>> {
        self.posts.lock().map_err(|_| anyhow::anyhow!("post store lock poisoned"))
    }
}

impl PostStore for MemoryPostStore {
    fn list(&self) -> anyhow::Result<Vec<Post>> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: u64) -> anyhow::Result<Option<Post>> {
        Ok(self.lock()?.iter().find(|p| p.id == id).cloned())
    }

    fn create(&self, new: NewPost) -> anyhow::Result<Post> {
        new.validate()?;
        let mut posts = self.lock()?;
        let post = Post::from_new(next_id(&posts), new);
        posts.push(post.clone());
        Ok(post)
    }
}
