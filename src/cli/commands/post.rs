//! Post management subcommands

use std::fs;

use anyhow::Context;

use crate::cli::app::PostAction;
use blogo::adapters::JsonPostStore;
use blogo::config::BlogConfig;
use blogo::core::models::NewPost;
use blogo::core::ports::PostStore;
use blogo::output::{OutputMode, PostListResult, PostResult};

/// Run a post subcommand against the configured store
pub fn post(config: &BlogConfig, action: PostAction, mode: OutputMode) -> anyhow::Result<()> {
    let store = JsonPostStore::new(config.posts_path());

    match action {
        PostAction::Add {
            title,
            content,
            file,
        } => {
            let content = match (content, file) {
                (Some(content), _) => content,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => anyhow::bail!("Either --content or --file is required"),
            };
            let new = NewPost::new(title, content);
            new.validate()?;
            let post = store.create(new)?;
            log::info!("created post {} in {}", post.id, store.path().display());
            PostResult { post }.render(mode);
        },
        PostAction::List => {
            let posts = store.list()?;
            PostListResult { posts }.render(mode);
        },
        PostAction::Show { id } => {
            let post = store
                .get(id)?
                .with_context(|| format!("Post with ID {id} not found"))?;
            PostResult { post }.render(mode);
        },
    }

    Ok(())
}
