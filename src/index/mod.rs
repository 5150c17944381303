//! In-memory index structures for SEO element queries.
//!
//! - `trie`: prefix lookup of indexed keyword labels
//! - `hierarchy`: per-page element hierarchy for display
//! - `relevance`: relevance-ordered ranking of element kinds

pub mod hierarchy;
pub mod relevance;
pub mod trie;

pub use hierarchy::{HierarchyNode, HierarchyTree, PreOrder};
pub use relevance::{InOrder, RelevanceIndex};
pub use trie::{PrefixIndex, PrefixMatches};
