//! Line-oriented scene text parser
//!
//! Every line is classified on its own, in file order. The only state carried
//! between lines is the active [`Section`] and the node list built so far.
//! Nothing here fails: lines that don't fit are dropped.

use crate::attributes::Attributes;
use crate::format::{ParsedScene, SceneNode, UNKNOWN_INSTANCE};
use scenedoc_core::resource_ref_id;

/// Separator between a property key and its raw value
const PROPERTY_SEPARATOR: &str = " = ";

/// The section most recently opened by a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Resource,
    Node,
    Connection,
    /// A node header that produced no node; its property lines are dropped
    Skipped,
}

/// Parse the full text of one scene file
pub fn parse_scene(content: &str) -> ParsedScene {
    let mut scene = ParsedScene::new();
    let mut section = Section::None;

    for (index, line) in content.lines().enumerate() {
        section = parse_line(&mut scene, section, line, index + 1);
    }

    log::debug!(
        "parsed {} node(s), {} connection(s), {} resource(s)",
        scene.nodes.len(),
        scene.connections.len(),
        scene.resources.len()
    );
    scene
}

/// Classify one line, update `scene`, and return the section active afterwards
fn parse_line(scene: &mut ParsedScene, section: Section, line: &str, line_no: usize) -> Section {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return section;
    }

    if line.starts_with('[') {
        return match header_tag(line) {
            "ext_resource" => {
                parse_resource(scene, line, line_no);
                Section::Resource
            }
            "node" => match parse_node(scene, line, line_no) {
                Some(node) => {
                    scene.nodes.push(node);
                    Section::Node
                }
                None => {
                    log::warn!("line {}: node declaration without a name, skipping it", line_no);
                    Section::Skipped
                }
            },
            "connection" => {
                scene.connections.push(line.trim().to_string());
                Section::Connection
            }
            _ => Section::None,
        };
    }

    if line.contains('=') {
        parse_property(scene, section, line, line_no);
    }
    section
}

/// The word right after `[`, e.g. `node` for `[node name="A"]`
fn header_tag(line: &str) -> &str {
    let rest = &line[1..];
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ']')
        .unwrap_or(rest.len());
    &rest[..end]
}

fn parse_resource(scene: &mut ParsedScene, line: &str, line_no: usize) {
    let attrs = Attributes::parse(line);
    match (attrs.get("path"), attrs.get("id")) {
        (Some(path), Some(id)) => scene.resources.insert(id, path),
        _ => log::debug!("line {}: resource declaration without path and id", line_no),
    }
}

fn parse_node(scene: &ParsedScene, line: &str, line_no: usize) -> Option<SceneNode> {
    let attrs = Attributes::parse(line);
    let mut node = SceneNode::new(attrs.get_non_empty("name")?).at_line(line_no);

    let instance_id = attrs.get("instance").and_then(resource_ref_id);
    if let Some(id) = instance_id {
        let path = scene.resources.get(id).unwrap_or_else(|| {
            log::debug!("line {}: instance of undeclared resource {}", line_no, id);
            UNKNOWN_INSTANCE
        });
        node.node_type = Some(path.to_string());
        node.is_instance = true;
    } else if let Some(node_type) = attrs.get("type") {
        node.node_type = Some(node_type.to_string());
    }

    node.parent = attrs.get("parent").map(String::from);
    node.script = attrs.get("script").map(String::from);
    Some(node)
}

fn parse_property(scene: &mut ParsedScene, section: Section, line: &str, line_no: usize) {
    if section != Section::Node {
        log::debug!("line {}: ignored outside a node section", line_no);
        return;
    }
    let Some(node) = scene.nodes.last_mut() else {
        return;
    };
    match line.trim().split_once(PROPERTY_SEPARATOR) {
        Some((key, value)) => node.set_property(key.trim(), value),
        None => log::debug!("line {}: no ' = ' separator, dropped", line_no),
    }
}
