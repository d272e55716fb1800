//! Analysis report for stored posts

use blogo::adapters::JsonPostStore;
use blogo::config::BlogConfig;
use blogo::core::ports::PostStore;
use blogo::core::services::Analyzer;
use blogo::output::{OutputMode, ReportResult};

/// Analyze every stored post and print the table
pub fn report(config: &BlogConfig, mode: OutputMode) -> anyhow::Result<()> {
    let store = JsonPostStore::new(config.posts_path());
    let posts = store.list()?;
    log::debug!("analyzing {} posts", posts.len());

    let rows = Analyzer::default().analyze_posts(posts);
    ReportResult { posts: rows }.render(mode);
    Ok(())
}
