//! Posts file format
//!
//! ```json
//! {
//!   "posts": [
//!     { "id": 1, "title": "...", "content": "...", "createdAt": "..." }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::Post;

/// On-disk layout of the posts file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsFile {
    /// Posts in creation order
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Load the posts file, or an empty one if it does not exist yet
pub fn load_file(path: &Path) -> anyhow::Result<PostsFile> {
    if !path.exists() {
        return Ok(PostsFile::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(PostsFile::default());
    }
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Write the posts file, replacing it atomically
///
/// The content goes to a sibling `.tmp` file first and is renamed over the
/// target, so readers never see a half-written file.
pub fn save_file(path: &Path, file: &PostsFile) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(file)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
