//! Pipeline entry points for analyzer operations.
//!
//! - `run_analyze`: fetch pages and index their SEO elements

pub mod analyze;

pub use analyze::{
    AnalyzeStats, analysis_report, export_analysis, hierarchy_report, keyword_report,
    ranked_report, run_analyze,
};
