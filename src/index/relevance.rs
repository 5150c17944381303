//! Relevance-ordered index over ranked element labels.
//!
//! A red-black tree keyed by relevance score. Duplicate scores are
//! kept (greater-or-equal descends right, so later equal entries land
//! after earlier ones in traversal order) and ascending enumeration is
//! lazy. Nodes live in an arena `Vec` and link by index, which keeps
//! the parent-walking fix-up in safe Rust.

/// Node color for the red-black discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    relevance: u32,
    color: Color,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Self-balancing index of `(tag, relevance)` entries.
///
/// Maintains the five red-black invariants after every insertion:
/// every node is red or black, the root is black, red nodes have only
/// black children, every root-to-nil path has the same black count,
/// and nil leaves count as black. Height is therefore O(log n).
#[derive(Debug, Clone, Default)]
pub struct RelevanceIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl RelevanceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert an entry. Duplicate scores are kept; among equal scores,
    /// enumeration preserves insertion order.
    pub fn insert(&mut self, tag: impl Into<String>, relevance: u32) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            tag: tag.into(),
            relevance,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        });

        // Standard BST descent: strictly-less goes left, otherwise
        // right, so an equal score lands right of every earlier equal.
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(cur) = cursor {
            parent = Some(cur);
            cursor = if relevance < self.nodes[cur].relevance {
                self.nodes[cur].left
            } else {
                self.nodes[cur].right
            };
        }

        self.nodes[idx].parent = parent;
        match parent {
            None => self.root = Some(idx),
            Some(p) => {
                if relevance < self.nodes[p].relevance {
                    self.nodes[p].left = Some(idx);
                } else {
                    self.nodes[p].right = Some(idx);
                }
            }
        }

        self.fix_insert(idx);
    }

    /// Lazy ascending enumeration of `(tag, relevance)` entries.
    /// Restartable by calling again.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder {
            index: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Red-black insertion fix-up (CLRS cases: red uncle recolors and
    /// continues upward; black uncle rotates at parent for the inner
    /// case, then at grandparent for the outer case).
    fn fix_insert(&mut self, mut x: usize) {
        while let Some(p) = self.nodes[x].parent {
            if self.nodes[p].color == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let g = self.nodes[p].parent.expect("red parent must have a parent");
            let parent_is_left = self.nodes[g].left == Some(p);
            let uncle = if parent_is_left {
                self.nodes[g].right
            } else {
                self.nodes[g].left
            };

            match uncle {
                Some(u) if self.nodes[u].color == Color::Red => {
                    self.nodes[p].color = Color::Black;
                    self.nodes[u].color = Color::Black;
                    self.nodes[g].color = Color::Red;
                    x = g;
                }
                _ => {
                    let mut p = p;
                    if parent_is_left {
                        if self.nodes[p].right == Some(x) {
                            // Inner case: rotate up to the outer shape.
                            x = p;
                            self.rotate_left(x);
                            p = self.nodes[x].parent.expect("rotated node has a parent");
                        }
                        self.nodes[p].color = Color::Black;
                        self.nodes[g].color = Color::Red;
                        self.rotate_right(g);
                    } else {
                        if self.nodes[p].left == Some(x) {
                            x = p;
                            self.rotate_right(x);
                            p = self.nodes[x].parent.expect("rotated node has a parent");
                        }
                        self.nodes[p].color = Color::Black;
                        self.nodes[g].color = Color::Red;
                        self.rotate_left(g);
                    }
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right.expect("rotate_left needs a right child");
        let y_left = self.nodes[y].left;

        self.nodes[x].right = y_left;
        if let Some(l) = y_left {
            self.nodes[l].parent = Some(x);
        }

        self.replace_in_parent(x, y);
        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.nodes[x].left.expect("rotate_right needs a left child");
        let y_right = self.nodes[y].right;

        self.nodes[x].left = y_right;
        if let Some(r) = y_right {
            self.nodes[r].parent = Some(x);
        }

        self.replace_in_parent(x, y);
        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Hang `y` where `x` used to be under `x`'s parent (or as root).
    fn replace_in_parent(&mut self, x: usize, y: usize) {
        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        match parent {
            None => self.root = Some(y),
            Some(p) => {
                if self.nodes[p].left == Some(x) {
                    self.nodes[p].left = Some(y);
                } else {
                    self.nodes[p].right = Some(y);
                }
            }
        }
    }
}

/// Lazy ascending in-order iterator.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    index: &'a RelevanceIndex,
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let index: &'a RelevanceIndex = self.index;
        while let Some(cur) = self.cursor {
            self.stack.push(cur);
            self.cursor = index.nodes[cur].left;
        }
        let cur = self.stack.pop()?;
        let node = &index.nodes[cur];
        self.cursor = node.right;
        Some((&node.tag, node.relevance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the tree and assert the red-black invariants, returning
    /// the black-height. Nil leaves count as one black node.
    fn check_black_height(index: &RelevanceIndex, node: Option<usize>) -> usize {
        let Some(idx) = node else {
            return 1;
        };
        let n = &index.nodes[idx];

        if n.color == Color::Red {
            for child in [n.left, n.right].into_iter().flatten() {
                assert_eq!(
                    index.nodes[child].color,
                    Color::Black,
                    "red node {idx} has a red child {child}"
                );
            }
        }
        if let Some(l) = n.left {
            assert!(index.nodes[l].relevance <= n.relevance);
            assert_eq!(index.nodes[l].parent, Some(idx));
        }
        if let Some(r) = n.right {
            assert!(index.nodes[r].relevance >= n.relevance);
            assert_eq!(index.nodes[r].parent, Some(idx));
        }

        let left = check_black_height(index, n.left);
        let right = check_black_height(index, n.right);
        assert_eq!(left, right, "black-height mismatch at node {idx}");

        left + usize::from(n.color == Color::Black)
    }

    fn height(index: &RelevanceIndex, node: Option<usize>) -> usize {
        match node {
            None => 0,
            Some(idx) => {
                let n = &index.nodes[idx];
                1 + height(index, n.left).max(height(index, n.right))
            }
        }
    }

    fn assert_invariants(index: &RelevanceIndex) {
        if let Some(root) = index.root {
            assert_eq!(index.nodes[root].color, Color::Black, "root must be black");
            assert_eq!(index.nodes[root].parent, None);
        }
        check_black_height(index, index.root);

        let n = index.len();
        let bound = 2.0 * ((n + 1) as f64).log2();
        assert!(
            height(index, index.root) as f64 <= bound,
            "height {} exceeds 2*log2({}+1)",
            height(index, index.root),
            n
        );
    }

    #[test]
    fn in_order_yields_ascending_entries() {
        let mut index = RelevanceIndex::new();
        index.insert("Title", 10);
        index.insert("Meta Description", 8);
        index.insert("Open Graph Title", 6);

        let entries: Vec<_> = index.in_order().collect();
        assert_eq!(
            entries,
            vec![
                ("Open Graph Title", 6),
                ("Meta Description", 8),
                ("Title", 10),
            ]
        );
        assert_invariants(&index);
    }

    #[test]
    fn duplicates_are_kept_in_insertion_order() {
        let mut index = RelevanceIndex::new();
        index.insert("first", 10);
        index.insert("mid", 8);
        index.insert("second", 10);
        index.insert("third", 10);

        let entries: Vec<_> = index.in_order().collect();
        assert_eq!(
            entries,
            vec![("mid", 8), ("first", 10), ("second", 10), ("third", 10)]
        );
        assert_eq!(index.len(), 4);
        assert_invariants(&index);
    }

    #[test]
    fn invariants_hold_under_ascending_insertion() {
        let mut index = RelevanceIndex::new();
        for i in 0..100u32 {
            index.insert(format!("tag{i}"), i);
            assert_invariants(&index);
        }
        let scores: Vec<u32> = index.in_order().map(|(_, r)| r).collect();
        assert_eq!(scores, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn invariants_hold_under_descending_insertion() {
        let mut index = RelevanceIndex::new();
        for i in (0..100u32).rev() {
            index.insert(format!("tag{i}"), i);
            assert_invariants(&index);
        }
        let scores: Vec<u32> = index.in_order().map(|(_, r)| r).collect();
        assert_eq!(scores, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn invariants_hold_under_mixed_insertion() {
        // Deterministic pseudo-random order without an RNG dependency.
        let mut index = RelevanceIndex::new();
        let mut inserted = Vec::new();
        let mut state: u64 = 0x2545F491;
        for i in 0..200u32 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let score = (state >> 33) as u32 % 50;
            index.insert(format!("tag{i}"), score);
            inserted.push(score);
            assert_invariants(&index);
        }

        let mut expected = inserted.clone();
        expected.sort_unstable();
        let scores: Vec<u32> = index.in_order().map(|(_, r)| r).collect();
        assert_eq!(scores, expected);
    }

    #[test]
    fn all_duplicate_scores_stay_balanced() {
        let mut index = RelevanceIndex::new();
        for i in 0..64u32 {
            index.insert(format!("tag{i}"), 10);
            assert_invariants(&index);
        }
        let tags: Vec<&str> = index.in_order().map(|(tag, _)| tag).collect();
        let expected: Vec<String> = (0..64).map(|i| format!("tag{i}")).collect();
        assert_eq!(tags, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn empty_index_enumerates_nothing() {
        let index = RelevanceIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.in_order().count(), 0);
    }

    #[test]
    fn in_order_is_restartable() {
        let mut index = RelevanceIndex::new();
        index.insert("a", 1);
        index.insert("b", 2);

        let first: Vec<_> = index.in_order().collect();
        let second: Vec<_> = index.in_order().collect();
        assert_eq!(first, second);
    }
}
