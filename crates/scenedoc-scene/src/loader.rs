//! Scene loading from `.tscn` files

use crate::format::ParsedScene;
use crate::parser::parse_scene;
use scenedoc_core::Result;
use std::fs;
use std::path::Path;

/// Read a scene file fully into memory and parse it
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<ParsedScene> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    log::debug!("loaded {} ({} bytes)", path.display(), content.len());
    Ok(load_scene_string(&content))
}

/// Parse scene text that is already in memory
pub fn load_scene_string(content: &str) -> ParsedScene {
    parse_scene(content)
}
