//! Analyze arbitrary text

use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

use anyhow::Context;

use blogo::core::services::Analyzer;
use blogo::output::{AnalysisReport, OutputMode};

/// Analyze text given inline, from a file, or on stdin
pub fn analyze(text: Option<&str>, file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (source, text) = match (text, file) {
        (Some(text), _) => ("argument".to_string(), text.to_string()),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (path.display().to_string(), text)
        },
        (None, None) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
            ("stdin".to_string(), text)
        },
    };

    let analysis = Analyzer::default().analyze(&text);
    log::debug!("analyzed {} words from {source}", analysis.total_words);

    AnalysisReport { source, analysis }.render(mode);
    Ok(())
}
