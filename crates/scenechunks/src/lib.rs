//! Scene Chunks - screenplay import and chunked project model.
//!
//! A screenplay is built from reorderable "chunks" (scenes), each
//! holding typed content blocks. This crate ties the pieces together:
//!
//! - A heuristic free-text importer that turns loosely formatted
//!   screenplay text into structured scenes (it never fails, it warns)
//! - Narrative structure templates (3-Act, Save the Cat, ...) mapping
//!   a script's timeline onto named beats
//! - The persisted project model: chunks, scripts, page estimates, and
//!   plain-text script assembly
//!
//! # Quick Start
//!
//! ```rust
//! let result = scenechunks::import::parse("INT. KITCHEN - DAY\nJOHN walks in.\n\nJOHN\nHello.\n");
//!
//! let scene = &result.document.scenes[0];
//! assert_eq!(scene.title, "INT. KITCHEN - DAY");
//! assert_eq!(scene.characters, ["JOHN"]);
//! ```

// Re-export core types
pub use scenechunks_core::*;

/// Free-text screenplay import.
pub mod import {
    pub use scenechunks_import::{parse, parse_with_hints};
}

/// Narrative structure templates.
pub mod structure {
    pub use scenechunks_structure::*;
}

/// Persisted project model.
pub mod project {
    pub use scenechunks_project::*;
}
