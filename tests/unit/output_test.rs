//! Tests for CLI output rendering

use blogo::core::services::{Analyzer, analyze};
use blogo::output::{
    AnalysisReport, OperationResult, OutputMode, PostListResult, PostResult, ReportResult,
};

use crate::common::post;

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_analysis_report_json_is_flat() {
    let report = AnalysisReport {
        source: "argument".to_string(),
        analysis: analyze("dog dog dog dog"),
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["source"], "argument");
    assert_eq!(json["totalWords"], 4);
    assert_eq!(json["uniqueWords"], 1);
    assert_eq!(json["repetitions"], 3);
    assert_eq!(json["score"], 97);
    assert_eq!(json["wordCounts"]["dog"], 4);
}

#[test]
fn test_analysis_report_human() {
    let report = AnalysisReport {
        source: "stdin".to_string(),
        analysis: analyze("the cat and the hat and the bat"),
    };
    let text = report.to_human();
    assert!(text.contains("Analysis of stdin"));
    assert!(text.contains("Total words:  8"));
    assert!(text.contains("Unique words: 5"));
    assert!(text.contains("Repetitions:  3"));
    assert!(text.contains("Most repeated:"));
    let the = text.find("the ").unwrap();
    let and = text.find("and ").unwrap();
    assert!(the < and, "most frequent word comes first");
}

#[test]
fn test_analysis_report_human_without_repeats() {
    let report = AnalysisReport {
        source: "argument".to_string(),
        analysis: analyze("one two three"),
    };
    assert!(!report.to_human().contains("Most repeated"));
}

#[test]
fn test_post_list_human() {
    let empty = PostListResult { posts: Vec::new() };
    assert_eq!(empty.to_human(), "No posts found.\n");

    let list = PostListResult {
        posts: vec![post(1, "First", "line one\nline two"), post(4, "Fourth", "x")],
    };
    let text = list.to_human();
    assert!(text.contains("[1]"));
    assert!(text.contains("[4]"));
    assert!(text.contains("line one line two"));
}

#[test]
fn test_post_result_json() {
    let result = PostResult {
        post: post(3, "Third", "body"),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Third");
    assert_eq!(json["createdAt"], "2024-05-01T10:00:00+00:00");
    assert!(result.to_human().contains("body"));
}

#[test]
fn test_report_table() {
    let rows = Analyzer::default().analyze_posts(vec![
        post(1, "Dogs", "dog dog dog dog"),
        post(2, "Counting", "one two three"),
    ]);
    let report = ReportResult { posts: rows };
    let text = report.to_human();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Word Count"));
    assert!(lines[1].contains("Dogs") && lines[1].trim_end().ends_with("97"));
    assert!(lines[2].contains("Counting") && lines[2].trim_end().ends_with("100"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["posts"][0]["score"], 97);
}

#[test]
fn test_empty_report() {
    let report = ReportResult { posts: Vec::new() };
    assert_eq!(report.to_human(), "No posts to analyze.\n");
}

#[test]
fn test_operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "done".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"message\":\"done\""));
}
