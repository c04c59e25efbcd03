//! Request tree and insertion.
//!
//! # Insertion
//! ```text
//! root(host)
//!     → one descend per path segment (role Path)
//!     → one descend per query pair (role Query, value "name=classified")
//!     → end-of-request bookkeeping on the last node reached
//! ```
//!
//! # Design Decisions
//! - Each parent owns its children; traversal is strictly downward
//! - A child's identity within its parent is its value
//! - An existing child is reused as-is; its kind and role are not revisited
//! - Optional markings assume required parts are ingested before optional
//!   continuations. Corpora that violate this produce misleading (but
//!   well-formed) trees, and that behavior is kept.

use crate::analyzer::classifier::Classification;
use crate::analyzer::node::{NodeKind, Role, TreeNode};

/// One classified step of a request, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: NodeKind,
    pub value: String,
    pub role: Role,
}

impl Step {
    pub fn path(classification: Classification) -> Self {
        Self {
            kind: classification.kind,
            value: classification.value,
            role: Role::Path,
        }
    }

    /// Query step with value `name=<classified value>`.
    pub fn query(name: &str, classification: Classification) -> Self {
        Self {
            kind: classification.kind,
            value: format!("{}={}", name, classification.value),
            role: Role::Query,
        }
    }
}

/// Trie of every request shape seen so far under a single host.
#[derive(Debug, Default)]
pub struct RequestTree {
    root: Option<TreeNode>,
}

impl RequestTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    /// Host of the root, once the first request has been inserted.
    pub fn host(&self) -> Option<&str> {
        self.root.as_ref().map(|root| root.value.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::node_count)
    }

    /// Insert one request. The first call fixes the root host; `host` is
    /// ignored afterwards.
    ///
    /// Returns the number of nodes created (terminators excluded).
    pub fn insert<I>(&mut self, host: &str, steps: I) -> usize
    where
        I: IntoIterator<Item = Step>,
    {
        let root = self.root.get_or_insert_with(|| {
            tracing::debug!(host, "Tree root initialized");
            TreeNode::host(host)
        });

        let mut created = 0;
        let mut current = root;
        for step in steps {
            let (next, is_new) = descend(current, step);
            created += usize::from(is_new);
            current = next;
        }

        finish_request(current);
        created
    }
}

/// Move to the child of `node` holding `step.value`, creating it if absent.
fn descend(node: &mut TreeNode, step: Step) -> (&mut TreeNode, bool) {
    if let Some(index) = node.children.iter().position(|c| c.value == step.value) {
        return (&mut node.children[index], false);
    }

    let mut role = step.role;
    if node.children.iter().any(TreeNode::is_terminator) {
        // A shorter request ended here, so this continuation is optional.
        role = role.to_optional();
        node.children.retain(|c| !c.is_terminator());
        tracing::debug!(
            parent = %node.value,
            value = %step.value,
            role = ?role,
            "Terminator replaced by optional branch"
        );
    } else {
        tracing::debug!(parent = %node.value, value = %step.value, role = ?role, "Node created");
    }

    node.children.push(TreeNode::new(step.kind, step.value, role));
    let last = node.children.len() - 1;
    (&mut node.children[last], true)
}

/// Record that a request ended at `node`.
fn finish_request(node: &mut TreeNode) {
    if node.children.iter().any(|c| c.role != Role::Terminator) {
        // Other requests continue past this point; their continuations are
        // optional relative to this one.
        for child in &mut node.children {
            child.role = child.role.to_optional();
        }
    }

    if node.children.is_empty() {
        node.children.push(TreeNode::terminator());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(value: &str) -> Step {
        Step::path(Classification::literal(value))
    }

    fn var(value: &str) -> Step {
        Step::path(Classification::variable(value))
    }

    fn query(name: &str, value: &str) -> Step {
        Step::query(name, Classification::literal(value))
    }

    #[test]
    fn test_empty_tree() {
        let tree = RequestTree::new();
        assert!(tree.root().is_none());
        assert_eq!(tree.host(), None);
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_first_insert_sets_root() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("x")]);
        tree.insert("b.com", [path("y")]);

        let root = tree.root().unwrap();
        assert_eq!(root.value, "a.com");
        assert_eq!(root.kind, NodeKind::Host);
        assert_eq!(root.role, Role::Host);
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_single_request_ends_with_terminator() {
        let mut tree = RequestTree::new();
        let created = tree.insert("a.com", [path("shop"), var("{UUID}")]);
        assert_eq!(created, 2);

        let shop = &tree.root().unwrap().children[0];
        assert_eq!(shop.value, "shop");
        assert_eq!(shop.role, Role::Path);
        let id = &shop.children[0];
        assert_eq!(id.kind, NodeKind::Var);
        assert_eq!(id.children, vec![TreeNode::terminator()]);
    }

    #[test]
    fn test_repeat_reuses_nodes() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("shop"), var("{UUID}")]);
        let before = tree.root().cloned();
        let created = tree.insert("a.com", [path("shop"), var("{UUID}")]);
        assert_eq!(created, 0);
        assert_eq!(tree.root().cloned(), before);
    }

    #[test]
    fn test_longer_request_replaces_terminator() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("shop"), path("tvs")]);
        tree.insert("a.com", [path("shop"), path("tvs"), var("{UUID}")]);

        let tvs = &tree.root().unwrap().children[0].children[0];
        assert_eq!(tvs.children.len(), 1);
        let id = &tvs.children[0];
        assert_eq!(id.role, Role::PathOptional);
        assert_eq!(id.children, vec![TreeNode::terminator()]);
    }

    #[test]
    fn test_shorter_request_marks_children_optional() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("shop"), path("tvs"), var("{UUID}")]);
        tree.insert("a.com", [path("shop"), path("tvs")]);

        let tvs = &tree.root().unwrap().children[0].children[0];
        assert_eq!(tvs.children.len(), 1);
        assert_eq!(tvs.children[0].role, Role::PathOptional);
        assert!(!tvs.children.iter().any(TreeNode::is_terminator));
    }

    #[test]
    fn test_optional_marking_does_not_stack() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("a")]);
        tree.insert("a.com", [path("a"), query("q", "1")]);
        tree.insert("a.com", [path("a")]);

        let q = &tree.root().unwrap().children[0].children[0];
        assert_eq!(q.role, Role::QueryOptional);
    }

    #[test]
    fn test_existing_child_role_is_authoritative() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("a"), path("b")]);
        tree.insert("a.com", [path("a")]);
        // `b` is now optional; a fresh sibling created later is not.
        tree.insert("a.com", [path("a"), path("c")]);

        let a = &tree.root().unwrap().children[0];
        let roles: Vec<_> = a.children.iter().map(|c| (c.value.as_str(), c.role)).collect();
        assert_eq!(roles, [("b", Role::PathOptional), ("c", Role::Path)]);
    }

    #[test]
    fn test_query_steps_follow_path() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("shop"), query("category", "tvs"), query("limit", "10")]);

        let shop = &tree.root().unwrap().children[0];
        let category = &shop.children[0];
        assert_eq!(category.value, "category=tvs");
        assert_eq!(category.role, Role::Query);
        let limit = &category.children[0];
        assert_eq!(limit.value, "limit=10");
        assert_eq!(limit.role, Role::Query);
    }

    #[test]
    fn test_empty_request_terminates_at_root() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", Vec::<Step>::new());
        assert_eq!(tree.root().unwrap().children, vec![TreeNode::terminator()]);

        // A later path turns the bare host into an optional prefix.
        tree.insert("a.com", [path("x")]);
        let root = tree.root().unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].role, Role::PathOptional);
    }

    #[test]
    fn test_terminator_never_has_siblings() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("a")]);
        tree.insert("a.com", [path("a"), path("b")]);
        tree.insert("a.com", [path("a"), path("c")]);
        tree.insert("a.com", [path("a")]);

        fn check(node: &TreeNode) {
            if node.children.iter().any(TreeNode::is_terminator) {
                assert_eq!(node.children.len(), 1, "terminator with siblings under {}", node.value);
            }
            for child in &node.children {
                if child.is_terminator() {
                    assert!(child.children.is_empty());
                }
                check(child);
            }
        }
        check(tree.root().unwrap());
    }

    #[test]
    fn test_very_deep_request_inserts_and_drops() {
        let mut tree = RequestTree::new();
        let created = tree.insert("a.com", (0..100_000).map(|_| path("a")));
        assert_eq!(created, 100_000);
        // root + segments + terminator
        assert_eq!(tree.node_count(), 100_002);
        drop(tree);
    }

    #[test]
    fn test_node_count() {
        let mut tree = RequestTree::new();
        tree.insert("a.com", [path("a"), path("b")]);
        // root, a, b, terminator
        assert_eq!(tree.node_count(), 4);
    }
}
