// src/lib.rs

//! seoscan library: fetches web pages and indexes their SEO elements
//! for prefix, hierarchy, and relevance queries.

pub mod engine;
pub mod error;
pub mod index;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use engine::SeoEngine;
