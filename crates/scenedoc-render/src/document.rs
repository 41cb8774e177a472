//! Markdown document assembly

use crate::connection::format_connection;
use crate::filter::RelevanceFilter;
use crate::value::resolve_value;
use scenedoc_scene::{ParsedScene, SceneForest, SceneNode};

/// Separator placed between per-scene documents in batch output
pub const DOCUMENT_SEPARATOR: &str = "\n\n---\n\n";

const INDENT: &str = "  ";

/// Renders parsed scenes as markdown using a relevance filter
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    filter: RelevanceFilter,
}

impl DocumentRenderer {
    pub fn new(filter: RelevanceFilter) -> Self {
        Self { filter }
    }

    /// Build the document for one scene. The result has no trailing newline.
    pub fn render(&self, scene: &ParsedScene, title: &str) -> String {
        let forest = SceneForest::build(&scene.nodes);
        let owner = forest.owner_path(&scene.nodes);

        let mut lines = vec![format!("# {}", title), String::new(), "## Nodes".to_string()];

        for (index, depth) in forest.walk() {
            let Some(node) = scene.node(index) else {
                continue;
            };
            lines.push(self.node_line(node, depth, scene));
            lines.extend(self.property_lines(node, depth + 1, scene));
        }

        if !scene.connections.is_empty() {
            lines.push(String::new());
            lines.push("## Connections".to_string());
            for connection in &scene.connections {
                lines.push(format!("- {}", format_connection(connection, owner)));
            }
        }

        lines.join("\n")
    }

    fn node_line(&self, node: &SceneNode, depth: usize, scene: &ParsedScene) -> String {
        let mut details = Vec::new();
        if let Some(node_type) = &node.node_type {
            details.push(node_type.clone());
        }
        if node.is_instance {
            details.push("instanced scene".to_string());
        }
        if let Some(script) = &node.script {
            details.push(format!("script: {}", resolve_value(script, &scene.resources)));
        }

        let line = format!("{}- **{}**", INDENT.repeat(depth), node.name);
        if details.is_empty() {
            line
        } else {
            format!("{} ({})", line, details.join(", "))
        }
    }

    fn property_lines(&self, node: &SceneNode, depth: usize, scene: &ParsedScene) -> Vec<String> {
        node.properties
            .iter()
            .filter_map(|(key, raw)| {
                let value = resolve_value(raw, &scene.resources);
                self.filter
                    .is_relevant(key, &value)
                    .then(|| format!("{}- {}: {}", INDENT.repeat(depth), key, value))
            })
            .collect()
    }
}

/// Render one scene with the default relevance filter
pub fn render_markdown(scene: &ParsedScene, title: &str) -> String {
    DocumentRenderer::default().render(scene, title)
}

/// Join independently rendered documents into one batch document
pub fn join_documents<S: AsRef<str>>(documents: &[S]) -> String {
    documents
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(DOCUMENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenedoc_scene::parse_scene;

    const SCENARIO: &str = r#"[gd_scene format=3]

[node name="Main" type="Node2D"]

[node name="Label" type="Label" parent="."]
text = "Hi"

[connection signal="pressed" from="Button" to="." method="_on_pressed"]
"#;

    #[test]
    fn test_scenario_document() {
        let doc = render_markdown(&parse_scene(SCENARIO), "main.tscn");
        let expected = "# main.tscn\n\
\n\
## Nodes\n\
- **Main** (Node2D)\n\
\x20 - **Label** (Label)\n\
\x20   - text: Hi\n\
\n\
## Connections\n\
- When signal 'pressed' is emitted from 'Button', call method '_on_pressed' on 'Main'.";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let scene = parse_scene(SCENARIO);
        assert_eq!(render_markdown(&scene, "t"), render_markdown(&parse_scene(SCENARIO), "t"));
    }

    #[test]
    fn test_no_connections_section_when_empty() {
        let doc = render_markdown(&parse_scene("[node name=\"A\" type=\"Node\"]\n"), "a");
        assert!(!doc.contains("## Connections"));
        assert!(doc.ends_with("- **A** (Node)"));
    }

    #[test]
    fn test_property_filtering() {
        let text = r#"[node name="A" type="Control"]
volume_db = "-10"
text = "Hello"
texture = "icon.png"
url = "https://example.com"
position = Vector2(1, 2)
"#;
        let doc = render_markdown(&parse_scene(text), "a");
        assert!(!doc.contains("volume_db"));
        assert!(!doc.contains("position"));
        assert!(doc.contains("  - text: Hello"));
        assert!(doc.contains("  - texture: icon.png"));
        assert!(doc.contains("  - url: https://example.com"));
    }

    #[test]
    fn test_resource_references_resolved_everywhere() {
        let text = r#"[ext_resource type="Script" path="res://hud.gd" id="1_s"]
[ext_resource type="Texture2D" path="res://art/bg.png" id="2_t"]
[ext_resource type="PackedScene" path="res://enemy.tscn" id="3_e"]

[node name="HUD" type="CanvasLayer" script=ExtResource("1_s")]
background = ExtResource("2_t")

[node name="Enemy" parent="." instance=ExtResource("3_e")]
"#;
        let doc = render_markdown(&parse_scene(text), "hud");
        assert!(doc.contains("- **HUD** (CanvasLayer, script: res://hud.gd)"));
        assert!(doc.contains("  - background: res://art/bg.png"));
        assert!(doc.contains("  - **Enemy** (res://enemy.tscn, instanced scene)"));
        assert!(!doc.contains("ExtResource"));
    }

    #[test]
    fn test_script_property_shown_through_extension_rule() {
        let text = "[ext_resource type=\"Script\" path=\"res://main.gd\" id=\"1\"]\n\
                    [node name=\"Main\" type=\"Node\"]\n\
                    script = ExtResource(\"1\")\n";
        let doc = render_markdown(&parse_scene(text), "m");
        assert!(doc.contains("  - script: res://main.gd"));
    }

    #[test]
    fn test_unresolved_reference_kept_raw() {
        let text = concat!(
            "[node name=\"Main\" type=\"Node\"]\n",
            "icon = ExtResource(\"9\")\n",
            "text = ExtResource(\"9\")\n",
        );
        let doc = render_markdown(&parse_scene(text), "m");
        assert!(doc.contains("  - text: ExtResource(\"9\")"));
        assert!(!doc.contains("icon"));
    }

    #[test]
    fn test_orphan_parent_rendered_as_root() {
        let text = "[node name=\"Main\" type=\"Node\"]\n\
                    [node name=\"Lost\" type=\"Node\" parent=\"Nowhere\"]\n";
        let doc = render_markdown(&parse_scene(text), "m");
        assert!(doc.contains("\n- **Main** (Node)\n- **Lost** (Node)"));
    }

    #[test]
    fn test_node_without_type_has_no_parentheses() {
        let doc = render_markdown(&parse_scene("[node name=\"Bare\"]\n"), "b");
        assert!(doc.ends_with("- **Bare**"));
    }

    #[test]
    fn test_custom_filter() {
        let renderer =
            DocumentRenderer::new(RelevanceFilter::new().with_keys(&["placeholder_text"]));
        let text =
            "[node name=\"L\" type=\"LineEdit\"]\nplaceholder_text = \"Name\"\ntext = \"x\"\n";
        let doc = renderer.render(&parse_scene(text), "l");
        assert!(doc.contains("  - placeholder_text: Name"));
        assert!(!doc.contains("text: x"));
    }

    #[test]
    fn test_join_documents() {
        assert_eq!(join_documents(&["# a", "# b"]), "# a\n\n---\n\n# b");
        assert_eq!(join_documents(&["# only"]), "# only");
        assert_eq!(join_documents::<&str>(&[]), "");
    }
}
