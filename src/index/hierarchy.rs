//! Content hierarchy for one page's extracted elements.
//!
//! An ordered tree with unbounded fan-out. Children keep insertion
//! order; traversal is pre-order with explicit depth for display.

/// A labeled content node.
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    tag: String,
    content: Option<String>,
    children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Construct a node with no children. Content is fixed at creation.
    pub fn new(tag: impl Into<String>, content: Option<String>) -> Self {
        Self {
            tag: tag.into(),
            content,
            children: Vec::new(),
        }
    }

    /// Node label.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Node content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Append a child. Always succeeds; order is append order.
    pub fn add_child(&mut self, child: HierarchyNode) {
        self.children.push(child);
    }
}

/// One page analysis session's element hierarchy.
#[derive(Debug, Clone)]
pub struct HierarchyTree {
    root: HierarchyNode,
}

impl HierarchyTree {
    /// Create a tree with the given root label and no content.
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            root: HierarchyNode::new(root_tag, None),
        }
    }

    /// Append a child under the root.
    pub fn add_child(&mut self, child: HierarchyNode) {
        self.root.add_child(child);
    }

    /// Root node accessor.
    pub fn root(&self) -> &HierarchyNode {
        &self.root
    }

    /// Lazy pre-order traversal of `(depth, tag, content)` triples.
    /// Depth is the number of ancestors; the root has depth 0.
    pub fn traverse(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, &self.root)],
        }
    }
}

/// Lazy pre-order iterator over a hierarchy. Restartable by calling
/// [`HierarchyTree::traverse`] again.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a HierarchyNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse push so the first child is visited first.
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node.tag(), node.content()))
    }
}
