//! scenedoc Core - Foundational types shared by the scenedoc crates
//!
//! This crate provides:
//! - `NodeIndex` - Declaration-order handles into a scene's node list
//! - Resource reference matching and substitution
//! - Error types and Result alias

mod error;
mod id;
mod reference;

pub use error::{Result, SceneDocError};
pub use id::NodeIndex;
pub use reference::{replace_resource_refs, resource_ref_id};
