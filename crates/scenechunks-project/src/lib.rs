//! Persisted project model: chunks, scripts, and the JSON project file.
//!
//! This crate is the consumer side of the importer: it turns an
//! [`ImportedDocument`](scenechunks_core::ImportedDocument) into
//! persisted chunk records, orders them in a script, estimates page
//! lengths, and can flatten a script back into plain text.

pub mod assemble;
mod chunk;
mod project;
pub mod slug;

pub use assemble::{assembled_active_script, assembled_script_text};
pub use chunk::Chunk;
pub use project::{
    FILE_VERSION, Project, ProjectError, ProjectFile, ProjectMeta, ProjectSettings, Script,
};
pub use slug::{SceneSlug, parse_scene_heading};
