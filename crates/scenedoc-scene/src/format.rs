//! Parsed scene data model

use indexmap::IndexMap;
use scenedoc_core::{replace_resource_refs, NodeIndex};
use std::borrow::Cow;
use std::collections::HashMap;

/// Parent sentinel meaning "the scene root"
pub const SCENE_ROOT: &str = ".";

/// Type recorded for an instanced node whose resource id was never declared
pub const UNKNOWN_INSTANCE: &str = "Unknown Instance";

/// Resource id -> file path, from `[ext_resource]` declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTable {
    entries: HashMap<String, String>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource, replacing any earlier declaration with the same id
    pub fn insert(&mut self, id: impl Into<String>, path: impl Into<String>) {
        self.entries.insert(id.into(), path.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Substitute every known `ExtResource(...)` in `text` with its path
    pub fn resolve<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_resource_refs(text, |id| self.get(id).map(String::from))
    }
}

/// How a node refers to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef<'a> {
    /// No parent attribute: the node is a root
    None,
    /// `parent="."`
    SceneRoot,
    /// Any other parent name or path
    Named(&'a str),
}

/// A single `[node]` declaration and the property lines that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneNode {
    pub name: String,
    /// Declared type, or the instanced scene's path
    pub node_type: Option<String>,
    pub parent: Option<String>,
    /// Raw script reference, resolved at render time
    pub script: Option<String>,
    pub is_instance: bool,
    /// Raw property values in assignment order
    pub properties: IndexMap<String, String>,
    /// 1-based line of the declaration
    pub line: usize,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: None,
            parent: None,
            script: None,
            is_instance: false,
            properties: IndexMap::new(),
            line: 0,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Set a property; a repeated key keeps its first position but takes the new value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn parent_ref(&self) -> ParentRef<'_> {
        match self.parent.as_deref() {
            None => ParentRef::None,
            Some(SCENE_ROOT) => ParentRef::SceneRoot,
            Some(name) => ParentRef::Named(name),
        }
    }
}

/// Everything the parser extracts from one scene file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScene {
    /// Nodes in declaration order
    pub nodes: Vec<SceneNode>,
    /// Raw `[connection ...]` lines, trimmed
    pub connections: Vec<String>,
    pub resources: ResourceTable,
}

impl ParsedScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&SceneNode> {
        self.nodes.get(index.raw())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_table_last_wins() {
        let mut table = ResourceTable::new();
        table.insert("1", "res://a.gd");
        table.insert("1", "res://b.gd");
        assert_eq!(table.get("1"), Some("res://b.gd"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let mut table = ResourceTable::new();
        table.insert("1_tex", "res://icon.png");
        assert_eq!(table.resolve(r#"ExtResource("1_tex")"#), "res://icon.png");
        assert_eq!(table.resolve(r#"ExtResource("2")"#), r#"ExtResource("2")"#);
    }

    #[test]
    fn test_parent_ref() {
        assert_eq!(SceneNode::new("A").parent_ref(), ParentRef::None);
        assert_eq!(SceneNode::new("A").with_parent(".").parent_ref(), ParentRef::SceneRoot);
        assert_eq!(
            SceneNode::new("A").with_parent("Body/Arm").parent_ref(),
            ParentRef::Named("Body/Arm")
        );
    }

    #[test]
    fn test_property_overwrite_keeps_position() {
        let node = SceneNode::new("A")
            .with_property("text", "\"one\"")
            .with_property("visible", "false")
            .with_property("text", "\"two\"");
        let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["text", "visible"]);
        assert_eq!(node.properties["text"], "\"two\"");
    }
}
