// src/engine.rs

//! Orchestration of the three index structures over analyzed pages.
//!
//! One engine owns a process-lifetime keyword trie, a session-scoped
//! hierarchy tree and relevance index, and the append-only analysis
//! log. Mutating operations take `&mut self`, so exclusive access is
//! compiler-enforced; callers sharing an engine across tasks wrap it
//! in `Arc<Mutex<_>>`.

use crate::index::{
    HierarchyNode, HierarchyTree, InOrder, PreOrder, PrefixIndex, PrefixMatches, RelevanceIndex,
};
use crate::models::{ElementKind, PageRecord};

/// Root label of every session hierarchy.
const ROOT_TAG: &str = "SEO Elements";

/// Indexing and ranking engine for extracted SEO elements.
#[derive(Debug)]
pub struct SeoEngine {
    keywords: PrefixIndex,
    hierarchy: HierarchyTree,
    ranking: RelevanceIndex,
    analyses: Vec<PageRecord>,
}

impl Default for SeoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoEngine {
    /// Create an engine with empty indexes and an empty log.
    pub fn new() -> Self {
        Self {
            keywords: PrefixIndex::new(),
            hierarchy: HierarchyTree::new(ROOT_TAG),
            ranking: RelevanceIndex::new(),
            analyses: Vec::new(),
        }
    }

    /// Start a fresh search session: replace the hierarchy tree and
    /// relevance index. The keyword trie and analysis log accumulate
    /// across sessions and are untouched.
    pub fn reset(&mut self) {
        self.hierarchy = HierarchyTree::new(ROOT_TAG);
        self.ranking = RelevanceIndex::new();
    }

    /// Index one analyzed page: a hierarchy child, a trie keyword, and
    /// a ranking entry per element kind, then the record itself into
    /// the log. Missing fields arrive as placeholder strings, so this
    /// never fails.
    pub fn populate(&mut self, record: PageRecord) {
        for kind in ElementKind::ALL {
            let content = kind.content(&record).to_string();
            self.hierarchy
                .add_child(HierarchyNode::new(kind.label(), Some(content)));
            self.keywords.insert(kind.keyword());
            self.ranking.insert(kind.label(), kind.relevance());
        }

        log::debug!("Indexed page {}", record.url);
        self.analyses.push(record);
    }

    /// Keyword labels matching a prefix, in ascending order.
    pub fn search_keywords<'a>(&'a self, prefix: &str) -> PrefixMatches<'a> {
        self.keywords.search(prefix)
    }

    /// Ranked elements of the current session, ascending by relevance.
    pub fn ranked_results(&self) -> InOrder<'_> {
        self.ranking.in_order()
    }

    /// Pre-order view of the current session's element hierarchy.
    pub fn hierarchy(&self) -> PreOrder<'_> {
        self.hierarchy.traverse()
    }

    /// All analyzed page records, oldest first.
    pub fn analysis_results(&self) -> &[PageRecord] {
        &self.analyses
    }
}
