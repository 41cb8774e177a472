//! scenedoc Scene - Scene text parsing and tree reconstruction
//!
//! This crate turns the text of a `.tscn` file into a flat node list,
//! raw connection lines and a resource table, then rebuilds the node
//! hierarchy as a separate pass.

mod attributes;
mod forest;
mod format;
mod loader;
mod parser;

pub use attributes::Attributes;
pub use forest::SceneForest;
pub use format::{ParentRef, ParsedScene, ResourceTable, SceneNode, SCENE_ROOT, UNKNOWN_INSTANCE};
pub use loader::{load_scene, load_scene_string};
pub use parser::parse_scene;
