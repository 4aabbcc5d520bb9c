//! The on-disk project file and its records.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use scenechunks_core::{ChunkId, ImportedDocument};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chunk::Chunk;

/// Format tag written into every saved project file.
pub const FILE_VERSION: &str = "scene-chunks-v1";

const DEFAULT_SCRIPT_ID: &str = "script_main";

/// Errors raised by project persistence and lookups.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid project file: {0}")]
    Format(#[from] serde_json::Error),
    #[error("project file version {found:?} is not {FILE_VERSION:?}")]
    UnsupportedVersion { found: String },
    #[error("no script with id {0:?}")]
    UnknownScript(String),
}

/// Project-level metadata shown on the title page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectMeta {
    pub author: String,
    pub draft: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    pub active_script_id: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            active_script_id: DEFAULT_SCRIPT_ID.to_string(),
        }
    }
}

/// Top-level project record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub name: String,
    pub meta: ProjectMeta,
    pub settings: ProjectSettings,
}

/// One ordered sequence of chunks (a draft of the screenplay).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Script {
    pub id: String,
    pub name: String,
    pub chunk_order: Vec<ChunkId>,
    pub structure_template: Option<String>,
    pub anchors: Vec<String>,
}

impl Script {
    /// The structure template this script is mapped onto. Unknown ids
    /// resolve to the default template.
    pub fn template(&self) -> Option<&'static scenechunks_structure::StructureTemplate> {
        self.structure_template
            .as_deref()
            .map(scenechunks_structure::by_id)
    }
}

/// Everything that gets saved: the project, its chunks and scripts,
/// and the editor's selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFile {
    pub project: Project,
    pub chunks_by_id: BTreeMap<String, Chunk>,
    pub scripts_by_id: BTreeMap<String, Script>,
    pub selected_chunk_id: Option<ChunkId>,
    pub version: String,
    pub saved_at: String,
}

impl ProjectFile {
    /// Create an empty project with one main script.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut scripts_by_id = BTreeMap::new();
        scripts_by_id.insert(
            DEFAULT_SCRIPT_ID.to_string(),
            Script {
                id: DEFAULT_SCRIPT_ID.to_string(),
                name: "Main Draft".to_string(),
                ..Default::default()
            },
        );
        ProjectFile {
            project: Project {
                title: name.clone(),
                name,
                ..Default::default()
            },
            scripts_by_id,
            version: FILE_VERSION.to_string(),
            ..Default::default()
        }
    }

    /// The script the editor is working on.
    pub fn active_script(&self) -> Result<&Script, ProjectError> {
        let id = &self.project.settings.active_script_id;
        self.scripts_by_id
            .get(id)
            .ok_or_else(|| ProjectError::UnknownScript(id.clone()))
    }

    /// Chunks of a script, in script order, skipping dangling ids.
    pub fn chunks_in_order(&self, script: &Script) -> Vec<&Chunk> {
        script
            .chunk_order
            .iter()
            .filter_map(|id| self.chunks_by_id.get(id.as_str()))
            .collect()
    }

    /// Materialize an imported document into this project: one chunk
    /// per scene, the active script's order replaced wholesale, the
    /// first new chunk selected, and front matter folded into the
    /// project metadata where present.
    pub fn apply_import(&mut self, document: &ImportedDocument) -> Result<(), ProjectError> {
        let mut new_order = Vec::with_capacity(document.scenes.len());

        for scene in &document.scenes {
            let chunk = Chunk::from_scene(scene);
            new_order.push(chunk.id.clone());
            self.chunks_by_id.insert(chunk.id.to_string(), chunk);
        }

        let script_id = self.project.settings.active_script_id.clone();
        let script = self
            .scripts_by_id
            .get_mut(&script_id)
            .ok_or(ProjectError::UnknownScript(script_id))?;
        script.chunk_order = new_order;

        self.selected_chunk_id = script.chunk_order.first().cloned();

        let front = &document.front_matter;
        if !front.title.is_empty() {
            self.project.title = front.title.clone();
            self.project.name = front.title.clone();
        }
        if !front.author.is_empty() {
            self.project.meta.author = front.author.clone();
        }

        Ok(())
    }

    /// Load a project file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let data = fs::read_to_string(path)?;
        let file: ProjectFile = serde_json::from_str(&data)?;
        if file.version != FILE_VERSION {
            return Err(ProjectError::UnsupportedVersion {
                found: file.version,
            });
        }
        Ok(file)
    }

    /// Save the project as pretty-printed JSON, stamping the version
    /// and save timestamp.
    pub fn save(&mut self, path: impl AsRef<Path>, saved_at: impl Into<String>) -> Result<(), ProjectError> {
        self.version = FILE_VERSION.to_string();
        self.saved_at = saved_at.into();
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
