//! Single scene conversion

use anyhow::{Context, Result};
use scenedoc_render::DocumentRenderer;
use scenedoc_scene::load_scene;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(path: &Path, output: Option<&Path>, renderer: &DocumentRenderer) -> Result<()> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(path));

    let document = convert(path, &display_title(path), renderer)?;
    write_document(&output_path, &document)?;

    println!("Markdown file generated: {}", output_path.display());
    Ok(())
}

/// Load one scene and render it under `title`
pub fn convert(
    path: &Path,
    title: &str,
    renderer: &DocumentRenderer,
) -> scenedoc_core::Result<String> {
    let scene = load_scene(path)?;
    log::info!(
        "{}: {} node(s), {} connection(s)",
        path.display(),
        scene.node_count(),
        scene.connections.len()
    );
    Ok(renderer.render(&scene, title))
}

/// `level.tscn` -> `level.md`, next to the input
pub fn default_output_path(path: &Path) -> PathBuf {
    path.with_extension("md")
}

/// The file's base name, used as the document heading
pub fn display_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Write a rendered document, ending it with a single newline
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", document))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"[gd_scene format=3]

[node name="Main" type="Node2D"]

[node name="Label" type="Label" parent="."]
text = "Hi"

[connection signal="pressed" from="Button" to="." method="_on_pressed"]
"#;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("levels/main.tscn")),
            PathBuf::from("levels/main.md")
        );
        assert_eq!(default_output_path(Path::new("noext")), PathBuf::from("noext.md"));
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title(Path::new("levels/main.tscn")), "main.tscn");
    }

    #[test]
    fn test_run_writes_markdown_next_to_scene() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = dir.path().join("main.tscn");
        fs::write(&scene_path, SCENE).unwrap();

        run(&scene_path, None, &DocumentRenderer::default()).unwrap();

        let written = fs::read_to_string(dir.path().join("main.md")).unwrap();
        assert!(written.starts_with("# main.tscn\n\n## Nodes\n- **Main** (Node2D)\n"));
        assert!(written.contains("  - **Label** (Label)\n    - text: Hi\n"));
        assert!(written.ends_with("on 'Main'.\n"));
    }

    #[test]
    fn test_run_honors_output_override() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = dir.path().join("main.tscn");
        fs::write(&scene_path, SCENE).unwrap();
        let out = dir.path().join("docs").join("scene.md");

        run(&scene_path, Some(&out), &DocumentRenderer::default()).unwrap();

        assert!(out.exists());
        assert!(!dir.path().join("main.md").exists());
    }

    #[test]
    fn test_convert_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.tscn");
        assert!(convert(&missing, "gone.tscn", &DocumentRenderer::default()).is_err());
    }
}
