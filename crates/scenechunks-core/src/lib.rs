//! scenechunks-core: Scene/block data model for Scene Chunks.
//!
//! This crate provides the core types shared by the importer, the
//! structure templates, and the persisted project model: typed content
//! blocks, parsed scenes, import hints, and import warnings.

mod block;
mod hints;
mod id;
mod scene;
mod warning;

pub use block::*;
pub use hints::*;
pub use id::*;
pub use scene::*;
pub use warning::*;
