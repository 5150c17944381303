//! Collaborator services around the indexing engine.

mod fetcher;

pub use fetcher::{FetchOutcome, HttpFetcher, PageSource};
