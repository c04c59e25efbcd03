//! Tree node model.
//!
//! # State Transitions
//! ```text
//! Path       → PathOptional
//! Query      → QueryOptional
//! Terminator → TerminatorOptional
//! *Optional  → unchanged
//! Host       → unchanged (the root is never anyone's child)
//! ```

use serde::Serialize;

/// What a node's `value` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Host,
    /// Literal token.
    Static,
    /// Recognizer placeholder.
    Var,
    /// End-of-request marker.
    Terminator,
}

/// Position of a node in the request shape; drives separator choice and
/// optional wrapping when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Host,
    Path,
    PathOptional,
    Query,
    QueryOptional,
    Terminator,
    TerminatorOptional,
}

impl Role {
    /// The optional counterpart of this role.
    pub fn to_optional(self) -> Self {
        match self {
            Role::Path | Role::PathOptional => Role::PathOptional,
            Role::Query | Role::QueryOptional => Role::QueryOptional,
            Role::Terminator | Role::TerminatorOptional => Role::TerminatorOptional,
            Role::Host => Role::Host,
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(
            self,
            Role::PathOptional | Role::QueryOptional | Role::TerminatorOptional
        )
    }

    /// Separator written before a node's value.
    ///
    /// A plain query node is assumed to be the first parameter and an
    /// optional one a continuation. That only holds when required
    /// parameters were ingested before optional ones.
    pub fn separator(self) -> char {
        match self {
            Role::Query => '?',
            Role::QueryOptional => '&',
            _ => '/',
        }
    }
}

/// One segment of the generalized request shape.
///
/// Counting, dropping and flattening walk the subtree with an explicit
/// stack, so depth is bounded by memory rather than by the call stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: String,
    pub kind: NodeKind,
    pub role: Role,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(kind: NodeKind, value: impl Into<String>, role: Role) -> Self {
        Self {
            value: value.into(),
            kind,
            role,
            children: Vec::new(),
        }
    }

    pub fn host(host: impl Into<String>) -> Self {
        Self::new(NodeKind::Host, host, Role::Host)
    }

    pub fn terminator() -> Self {
        Self::new(NodeKind::Terminator, String::new(), Role::Terminator)
    }

    pub fn is_terminator(&self) -> bool {
        self.kind == NodeKind::Terminator
    }

    /// Rendered text of this node: separator followed by the value,
    /// wrapped as `(?value)` when optional.
    pub fn fragment(&self) -> String {
        let separator = self.role.separator();
        if self.role.is_optional() {
            format!("{}(?{})", separator, self.value)
        } else {
            format!("{}{}", separator, self.value)
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }

    /// Pre-order list of this subtree, each entry pointing at its parent's
    /// index. `self` is entry 0 with no parent.
    pub fn flatten(&self) -> Vec<FlatNode<'_>> {
        let mut out = Vec::new();
        let mut stack = vec![(self, None)];
        while let Some((node, parent)) = stack.pop() {
            let id = out.len();
            out.push(FlatNode {
                id,
                parent,
                value: &node.value,
                kind: node.kind,
                role: node.role,
            });
            stack.extend(node.children.iter().rev().map(|child| (child, Some(id))));
        }
        out
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Serializable, non-nested view of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatNode<'a> {
    pub id: usize,
    pub parent: Option<usize>,
    pub value: &'a str,
    pub kind: NodeKind,
    pub role: Role,
}
