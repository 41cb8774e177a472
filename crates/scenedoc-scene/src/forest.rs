//! Tree reconstruction from flat parent references
//!
//! Runs after parsing, over the finished node list. Nodes are never touched;
//! the forest only stores indices into the list.

use crate::format::{ParentRef, SceneNode};
use scenedoc_core::NodeIndex;
use std::collections::HashMap;

/// Roots and child lists of a parsed scene, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneForest {
    roots: Vec<NodeIndex>,
    children: Vec<Vec<NodeIndex>>,
}

impl SceneForest {
    /// Attach every node to its parent.
    ///
    /// - no parent: new root
    /// - `"."`: child of the first root, or a root if there is none yet
    /// - a name (or a node path below the first root) declared earlier: child of that node
    /// - anything else: promoted to a root
    pub fn build(nodes: &[SceneNode]) -> Self {
        let mut forest = SceneForest {
            roots: Vec::new(),
            children: vec![Vec::new(); nodes.len()],
        };
        let mut by_name: HashMap<&str, NodeIndex> = HashMap::new();
        let mut by_path: HashMap<String, NodeIndex> = HashMap::new();
        let mut paths: Vec<Option<String>> = vec![None; nodes.len()];

        for (i, node) in nodes.iter().enumerate() {
            let index = NodeIndex(i);
            let parent = match node.parent_ref() {
                ParentRef::None => None,
                ParentRef::SceneRoot => forest.first_root(),
                ParentRef::Named(name) => {
                    let found = by_name.get(name).or_else(|| by_path.get(name)).copied();
                    if found.is_none() {
                        log::debug!(
                            "node '{}' (line {}): parent '{}' not declared earlier, treating as root",
                            node.name,
                            node.line,
                            name
                        );
                    }
                    found
                }
            };

            match parent {
                Some(parent) => {
                    forest.children[parent.raw()].push(index);
                    let path = match &paths[parent.raw()] {
                        Some(p) if p.is_empty() => Some(node.name.clone()),
                        Some(p) => Some(format!("{}/{}", p, node.name)),
                        None => None,
                    };
                    paths[i] = path;
                }
                None => {
                    if forest.roots.is_empty() {
                        paths[i] = Some(String::new());
                    }
                    forest.roots.push(index);
                }
            }

            if let Some(path) = paths[i].as_ref().filter(|p| !p.is_empty()) {
                by_path.insert(path.clone(), index);
            }
            by_name.insert(node.name.as_str(), index);
        }

        forest
    }

    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.children
            .get(index.raw())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn first_root(&self) -> Option<NodeIndex> {
        self.roots.first().copied()
    }

    /// Name of the first root, substituted for `"."` in connection targets
    pub fn owner_path<'a>(&self, nodes: &'a [SceneNode]) -> &'a str {
        self.first_root()
            .and_then(|root| nodes.get(root.raw()))
            .map(|node| node.name.as_str())
            .unwrap_or("")
    }

    /// Depth-first pre-order walk: `(node, depth)` with roots at depth 0
    pub fn walk(&self) -> Vec<(NodeIndex, usize)> {
        let mut order = Vec::with_capacity(self.children.len());
        let mut stack: Vec<(NodeIndex, usize)> =
            self.roots.iter().rev().map(|&root| (root, 0)).collect();

        while let Some((index, depth)) = stack.pop() {
            order.push((index, depth));
            for &child in self.children(index).iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        order
    }
}
