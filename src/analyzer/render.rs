//! Route rendering.
//!
//! Depth-first, pre-order walk from the root over an explicit stack. A
//! terminator emits the route built so far as-is.

use serde::{Deserialize, Serialize};

use crate::analyzer::node::TreeNode;
use crate::analyzer::tree::RequestTree;

/// One rendered host + path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub host: String,
    pub path: String,
}

impl Route {
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.host, self.path)
    }
}

/// Every route the tree encodes, in branch-creation order.
pub fn render(tree: &RequestTree) -> Vec<Route> {
    let mut routes = Vec::new();
    let Some(root) = tree.root() else {
        return routes;
    };

    for child in &root.children {
        fill_routes(child, &root.value, &mut routes);
    }
    routes
}

/// Emit every route below `start`. One path buffer is shared by the whole
/// walk; each stacked node remembers the buffer length of its parent.
fn fill_routes(start: &TreeNode, host: &str, out: &mut Vec<Route>) {
    let mut path = String::new();
    let mut stack = vec![(start, 0)];

    while let Some((node, parent_len)) = stack.pop() {
        path.truncate(parent_len);

        if node.is_terminator() {
            out.push(Route::new(host, path.as_str()));
            continue;
        }

        path.push_str(&node.fragment());

        if node.children.is_empty() {
            // Not produced by insertion, but a bare leaf still ends a route.
            out.push(Route::new(host, path.as_str()));
            continue;
        }

        let len = path.len();
        stack.extend(node.children.iter().rev().map(|child| (child, len)));
    }
}
