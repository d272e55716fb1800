//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Analysis, Post, PostAnalysis};

/// How many repeated words the human analysis output lists
const TOP_REPEATED: usize = 10;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of analyzing one piece of text
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Where the text came from (file path, "stdin", or "argument")
    pub source: String,
    /// The analysis
    #[serde(flatten)]
    pub analysis: Analysis,
}

/// Result of listing posts
#[derive(Debug, Serialize)]
pub struct PostListResult {
    /// Posts in creation order
    pub posts: Vec<Post>,
}

/// Result of showing or creating a single post
#[derive(Debug, Serialize)]
pub struct PostResult {
    /// The post
    #[serde(flatten)]
    pub post: Post,
}

/// Analysis table for all posts
#[derive(Debug, Serialize)]
pub struct ReportResult {
    /// One row per post
    pub posts: Vec<PostAnalysis>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn colored_score(score: u32) -> String {
    let text = score.to_string();
    match score {
        90.. => text.green().bold().to_string(),
        60..=89 => text.yellow().bold().to_string(),
        _ => text.red().bold().to_string(),
    }
}

impl AnalysisReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let a = &self.analysis;
        let mut out = format!("Analysis of {}\n\n", self.source);
        out.push_str(&format!("  Total words:  {}\n", a.total_words));
        out.push_str(&format!("  Unique words: {}\n", a.unique_words));
        out.push_str(&format!("  Repetitions:  {}\n", a.repetitions));
        out.push_str(&format!("  Misspelled:   {}\n", a.misspelled));
        out.push_str(&format!("  Score:        {}\n", colored_score(a.score)));

        let repeated = a.repeated_words();
        if !repeated.is_empty() {
            out.push_str("\nMost repeated:\n");
            for (word, count) in repeated.into_iter().take(TOP_REPEATED) {
                out.push_str(&format!("  {word:<20} x{count}\n"));
            }
        }
        out
    }
}

impl PostListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.posts.is_empty() {
            return "No posts found.\n".to_string();
        }
        let mut out = String::from("Posts:\n\n");
        for post in &self.posts {
            out.push_str(&format!("  [{}] {}\n", post.id, post.title.bold()));
            out.push_str(&format!("      {}\n\n", post.excerpt().replace('\n', " ")));
        }
        out
    }
}

impl PostResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        format!(
            "[{}] {}\n{}\n\n{}\n",
            self.post.id,
            self.post.title.bold(),
            self.post.created_at,
            self.post.content
        )
    }
}

impl ReportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable table
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.posts.is_empty() {
            return "No posts to analyze.\n".to_string();
        }
        let mut out = format!(
            "{:>4}  {:<32}  {:>10}  {:>11}  {:>5}\n",
            "ID", "Title", "Word Count", "Repetitions", "Score"
        );
        for row in &self.posts {
            let title: String = row.post.title.chars().take(32).collect();
            out.push_str(&format!(
                "{:>4}  {:<32}  {:>10}  {:>11}  {:>5}\n",
                row.post.id, title, row.analysis.total_words, row.analysis.repetitions, row.analysis.score
            ));
        }
        out
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
