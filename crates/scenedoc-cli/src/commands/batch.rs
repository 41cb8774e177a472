//! Directory conversion into one combined document

use crate::commands::file::{convert, write_document};
use anyhow::Result;
use scenedoc_core::SceneDocError;
use scenedoc_render::{join_documents, DocumentRenderer};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of converting a directory
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Where the combined document went; `None` if nothing was written
    pub output: Option<PathBuf>,
    pub processed: usize,
    /// `(scene name, error message)` for every scene that failed
    pub failed: Vec<(String, String)>,
}

pub fn run(
    dir: &Path,
    output: Option<&Path>,
    renderer: &DocumentRenderer,
    extension: &str,
) -> Result<()> {
    let report = convert_directory(dir, output, renderer, extension)?;

    match &report.output {
        Some(path) => {
            log::info!("combined {} scene file(s)", report.processed);
            println!("Markdown file generated: {}", path.display());
        }
        None => println!("Processed {} scene file(s)", report.processed),
    }

    Ok(())
}

/// Convert every scene under `dir`, one after another, into a single document
pub fn convert_directory(
    dir: &Path,
    output: Option<&Path>,
    renderer: &DocumentRenderer,
    extension: &str,
) -> Result<BatchReport> {
    let scenes = match find_scene_files(dir, extension) {
        Ok(scenes) => scenes,
        Err(err @ SceneDocError::NoSceneFiles(_)) => {
            println!("{}", err);
            return Ok(BatchReport::default());
        }
        Err(err) => return Err(err.into()),
    };

    let mut report = BatchReport::default();
    let mut documents = Vec::with_capacity(scenes.len());

    for scene_path in &scenes {
        let title = relative_title(dir, scene_path);
        match convert(scene_path, &title, renderer) {
            Ok(document) => {
                log::info!("converted {}", title);
                documents.push(document);
                report.processed += 1;
            }
            Err(err) => {
                println!("Failed to process {}: {}", title, err);
                report.failed.push((title, err.to_string()));
            }
        }
    }

    if documents.is_empty() {
        return Ok(report);
    }

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(dir));
    write_document(&output_path, &join_documents(&documents))?;
    report.output = Some(output_path);

    Ok(report)
}

/// Walk `dir` recursively, in file-name order, for files with `extension`
pub fn find_scene_files(dir: &Path, extension: &str) -> scenedoc_core::Result<Vec<PathBuf>> {
    let mut scenes = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => {
                log::warn!("skipping unreadable entry: {}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let matches = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
        if matches {
            scenes.push(entry.into_path());
        }
    }

    if scenes.is_empty() {
        return Err(SceneDocError::NoSceneFiles(dir.to_path_buf()));
    }
    Ok(scenes)
}

/// `<dir>/<dir name>.md`
pub fn default_output_path(dir: &Path) -> PathBuf {
    let name = dir
        .canonicalize()
        .ok()
        .and_then(|abs| abs.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "scenes".to_string());
    dir.join(format!("{}.md", name))
}

/// Scene path relative to the walked directory, with `/` separators
fn relative_title(dir: &Path, scene: &Path) -> String {
    let relative = scene.strip_prefix(dir).unwrap_or(scene);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
