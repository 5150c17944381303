// src/pipeline/analyze.rs

//! Page analysis pipeline.
//!
//! Runs one search session: reset the session indexes, fetch the
//! requested pages, populate the engine with every record that was
//! extracted, and summarize the run. Rendering of the query views
//! lives here too, shared by the CLI and tests.

use std::fs;
use std::path::Path;

use crate::engine::SeoEngine;
use crate::error::Result;
use crate::services::PageSource;

/// Summary of one analysis session.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AnalyzeStats {
    pub pages_requested: usize,
    pub pages_indexed: usize,
    pub failures: usize,
}

/// Run one analysis session over `urls`.
///
/// Pages that fail to fetch are logged by the source and skipped;
/// they never reach the engine.
pub async fn run_analyze(
    source: &dyn PageSource,
    engine: &mut SeoEngine,
    urls: &[String],
) -> AnalyzeStats {
    log::info!("Analyzing {} page(s)", urls.len());
    engine.reset();

    let outcome = source.fetch_all(urls).await;
    let stats = AnalyzeStats {
        pages_requested: outcome.total,
        pages_indexed: outcome.records.len(),
        failures: outcome.failures,
    };

    for record in outcome.records {
        engine.populate(record);
    }

    log::info!(
        "Indexed {}/{} page(s) ({} failure(s))",
        stats.pages_indexed,
        stats.pages_requested,
        stats.failures
    );
    stats
}

/// Render the session hierarchy as an indented pre-order listing.
pub fn hierarchy_report(engine: &SeoEngine) -> String {
    let mut out = String::new();
    for (depth, tag, content) in engine.hierarchy() {
        let indent = "  ".repeat(depth);
        match content {
            Some(content) => out.push_str(&format!("{indent}{tag}: {content}\n")),
            None => out.push_str(&format!("{indent}{tag}:\n")),
        }
    }
    out
}

/// Render the ranked elements, ascending by relevance.
pub fn ranked_report(engine: &SeoEngine) -> String {
    let mut out = String::from("Ranked SEO elements:\n");
    for (tag, relevance) in engine.ranked_results() {
        out.push_str(&format!("{tag}: relevance {relevance}\n"));
    }
    out
}

/// Render the keyword labels matching `prefix`.
pub fn keyword_report(engine: &SeoEngine, prefix: &str) -> String {
    let matches: Vec<String> = engine.search_keywords(prefix).collect();
    if matches.is_empty() {
        return format!("No indexed keywords match '{prefix}'\n");
    }
    let mut out = format!("Keywords matching '{prefix}':\n");
    for word in matches {
        out.push_str(&format!("  {word}\n"));
    }
    out
}

/// Render the full analysis log.
pub fn analysis_report(engine: &SeoEngine) -> String {
    let mut out = String::new();
    for record in engine.analysis_results() {
        out.push_str(&format!(
            "\nURL: {}\nTitle: {}\nMeta Description: {}\nOpen Graph Title: {}\n",
            record.url, record.title, record.meta_description, record.og_title
        ));
    }
    out
}

/// Export the analysis log as pretty-printed JSON.
pub fn export_analysis(engine: &SeoEngine, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(engine.analysis_results())?;
    fs::write(path.as_ref(), json)?;
    log::info!(
        "Exported {} record(s) to {:?}",
        engine.analysis_results().len(),
        path.as_ref()
    );
    Ok(())
}
