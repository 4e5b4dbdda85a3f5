use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Tree node in the arena-based table-of-contents structure.
///
/// Titles are not required to be unique; lookups by title report the
/// first match in pre-order.
#[derive(Debug)]
pub struct TocNode {
    /// Section title for this node
    pub title: String,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in insertion order
    pub children: Vec<Index>,
}

impl fmt::Display for TocNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Arena-based tree for table-of-contents hierarchies.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups. Mutation is append-only: nodes are created via [`insert_node`]
/// and never removed, so the structure is acyclic by construction.
/// Depth and height are always computed from the current child structure,
/// never cached.
///
/// [`insert_node`]: TocTree::insert_node
#[derive(Debug, Default)]
pub struct TocTree {
    /// Arena storage for all tree nodes
    arena: Arena<TocNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl TocTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a new node with the given title.
    ///
    /// With `parent = Some(idx)` the node is appended to that parent's
    /// children (insertion order preserved, duplicate titles allowed).
    /// With `parent = None` the node becomes the root.
    ///
    /// # Errors
    /// `RootExists` when `parent` is `None` and the tree already has a
    /// root; replacing it would strand the existing nodes in the arena.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(
        &mut self,
        title: impl Into<String> + fmt::Debug,
        parent: Option<Index>,
    ) -> DomainResult<Index> {
        if parent.is_none() && self.root.is_some() {
            return Err(DomainError::RootExists);
        }
        let node = TocNode {
            title: title.into(),
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        Ok(node_idx)
    }

    pub fn get_node(&self, idx: Index) -> Option<&TocNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> TocIterator {
        TocIterator::new(self)
    }

    /// Depth of the first node, in pre-order, whose title equals
    /// `target_title` (exact string equality). Root has depth 0.
    ///
    /// Returns `None` if no node matches; a missing title is an expected
    /// outcome, not an error. Once a match is found in an earlier branch,
    /// later sibling subtrees are not searched.
    #[instrument(level = "debug", skip(self))]
    pub fn depth_of(&self, target_title: &str) -> Option<usize> {
        self.root
            .and_then(|root| self.search_depth(root, target_title, 0))
    }

    fn search_depth(&self, node_idx: Index, target_title: &str, depth: usize) -> Option<usize> {
        let node = self.get_node(node_idx)?;
        if node.title == target_title {
            return Some(depth);
        }
        for &child in &node.children {
            if let Some(found) = self.search_depth(child, target_title, depth + 1) {
                return Some(found);
            }
        }
        None
    }

    /// Height of the tree: 0 for a single leaf node (and for an empty
    /// tree), otherwise one more than the tallest child subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.node_height(root))
    }

    fn node_height(&self, node_idx: Index) -> usize {
        match self.get_node(node_idx) {
            Some(node) if !node.children.is_empty() => {
                1 + node
                    .children
                    .iter()
                    .map(|&child| self.node_height(child))
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Flattened numbered outline, one line per node in pre-order.
    ///
    /// Indentation is two spaces per depth level. Every node except the
    /// root carries a dotted 1-indexed numeral (`1.`, `1.2.`, `1.2.3.`)
    /// that restarts within each sibling group; the root line is the bare
    /// title.
    #[instrument(level = "debug", skip(self))]
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.arena.len());
        if let Some(root) = self.root {
            self.collect_outline(root, 0, "", &mut lines);
        }
        lines
    }

    fn collect_outline(&self, node_idx: Index, level: usize, numeral: &str, lines: &mut Vec<String>) {
        let Some(node) = self.get_node(node_idx) else {
            return;
        };
        let indent = "  ".repeat(level);
        if numeral.is_empty() {
            lines.push(format!("{}{}", indent, node.title));
        } else {
            lines.push(format!("{}{}. {}", indent, numeral, node.title));
        }
        for (pos, &child) in node.children.iter().enumerate() {
            let child_numeral = if numeral.is_empty() {
                (pos + 1).to_string()
            } else {
                format!("{}.{}", numeral, pos + 1)
            };
            self.collect_outline(child, level + 1, &child_numeral, lines);
        }
    }

    /// Box-drawing rendering of the tree for terminal display.
    ///
    /// Returns `None` for an empty tree.
    pub fn render(&self) -> Option<termtree::Tree<String>> {
        self.root.and_then(|root| self.render_node(root))
    }

    fn render_node(&self, node_idx: Index) -> Option<termtree::Tree<String>> {
        let node = self.get_node(node_idx)?;
        let mut tree = termtree::Tree::new(node.title.clone());
        for &child in &node.children {
            if let Some(subtree) = self.render_node(child) {
                tree.push(subtree);
            }
        }
        Some(tree)
    }
}

pub struct TocIterator<'a> {
    tree: &'a TocTree,
    stack: Vec<Index>,
}

impl<'a> TocIterator<'a> {
    fn new(tree: &'a TocTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TocIterator<'a> {
    type Item = (Index, &'a TocNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_querying_then_all_zero_or_absent() {
        let tree = TocTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.depth_of("anything"), None);
        assert!(tree.outline().is_empty());
        assert!(tree.render().is_none());
    }

    #[test]
    fn given_single_node_when_depth_of_own_title_then_zero() {
        let mut tree = TocTree::new();
        tree.insert_node("Book", None).unwrap();
        assert_eq!(tree.depth_of("Book"), Some(0));
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn given_existing_root_when_inserting_second_root_then_rejected() {
        let mut tree = TocTree::new();
        let root = tree.insert_node("Book", None).unwrap();
        tree.insert_node("Chapter", Some(root)).unwrap();

        let err = tree.insert_node("Usurper", None).unwrap_err();
        assert!(matches!(err, DomainError::RootExists));
        // Tree is untouched, every node stays reachable
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().count(), tree.len());
        assert_eq!(tree.outline().len(), tree.len());
        assert_eq!(tree.depth_of("Book"), Some(0));
    }

    #[test]
    fn given_duplicate_titles_when_depth_of_then_first_in_preorder_wins() {
        let mut tree = TocTree::new();
        let root = tree.insert_node("root", None).unwrap();
        let a = tree.insert_node("a", Some(root)).unwrap();
        tree.insert_node("dup", Some(a)).unwrap(); // depth 2, visited first
        tree.insert_node("dup", Some(root)).unwrap(); // depth 1, but later branch
        assert_eq!(tree.depth_of("dup"), Some(2));
    }

    #[test]
    fn given_tree_when_iterating_then_preorder_and_complete() {
        let mut tree = TocTree::new();
        let root = tree.insert_node("r", None).unwrap();
        let a = tree.insert_node("a", Some(root)).unwrap();
        tree.insert_node("a1", Some(a)).unwrap();
        tree.insert_node("b", Some(root)).unwrap();

        let titles: Vec<&str> = tree.iter().map(|(_, n)| n.title.as_str()).collect();
        assert_eq!(titles, vec!["r", "a", "a1", "b"]);
        assert_eq!(tree.iter().count(), tree.len());
    }

    #[test]
    fn given_nested_tree_when_outline_then_numerals_restart_per_sibling_group() {
        let mut tree = TocTree::new();
        let root = tree.insert_node("Book", None).unwrap();
        let ch1 = tree.insert_node("One", Some(root)).unwrap();
        tree.insert_node("One-A", Some(ch1)).unwrap();
        tree.insert_node("One-B", Some(ch1)).unwrap();
        let ch2 = tree.insert_node("Two", Some(root)).unwrap();
        tree.insert_node("Two-A", Some(ch2)).unwrap();

        let lines = tree.outline();
        assert_eq!(
            lines,
            vec![
                "Book",
                "  1. One",
                "    1.1. One-A",
                "    1.2. One-B",
                "  2. Two",
                "    2.1. Two-A",
            ]
        );
    }
}
