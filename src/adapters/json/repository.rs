//! JSON-file post repository
//!
//! Implements the `PostStore` port trait on top of a single JSON file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::models::{NewPost, Post};
use crate::core::ports::{PostStore, next_id};

use super::file::{load_file, save_file};

/// Post store backed by a JSON file
#[derive(Debug)]
pub struct JsonPostStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonPostStore {
    /// Create a store for the given file (created on first write)
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostStore for JsonPostStore {
    fn list(&self) -> anyhow::Result<Vec<Post>> {
        Ok(load_file(&self.path)?.posts)
    }

    fn create(&self, new: NewPost) -> anyhow::Result<Post> {
        new.validate()?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("post store lock poisoned"))?;

        let mut file = load_file(&self.path)?;
        let post = Post::from_new(next_id(&file.posts), new);
        file.posts.push(post.clone());
        save_file(&self.path, &file)?;

        log::debug!("stored post {} in {}", post.id, self.path.display());
        Ok(post)
    }
}
