//! Parsed scenes and the import output document.

use crate::Block;
use serde::{Deserialize, Serialize};

/// One scene produced by the importer.
///
/// Created when a scene-heading line is recognized, mutated by every
/// subsequent line until the next heading or end of input, then finalized
/// (action blocks merged) and pushed to the output list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedScene {
    /// Upper-cased scene heading text.
    pub title: String,
    /// Transition attached to this scene's entry (may be empty).
    #[serde(default)]
    pub transition: String,
    /// Ordered content blocks.
    pub body: Vec<Block>,
    /// Canonical upper-case character names seen in this scene,
    /// insertion order, no duplicates.
    pub characters: Vec<String>,
    /// Candidate prop names, ordered, de-duplicated. Deliberately
    /// over-collected; the editor is the correction mechanism.
    pub props: Vec<String>,
    /// Structural-beat id from an explicit beat marker, if any.
    #[serde(default)]
    pub anchor_role: Option<String>,
    /// Tags derived from the heading prefix (INT / EXT / EST).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form notes (unrecognized beat markers land here).
    #[serde(default)]
    pub notes: String,
}

impl ParsedScene {
    /// Start a new scene with the given (already upper-cased) title.
    pub fn new(title: impl Into<String>) -> Self {
        ParsedScene {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Record a character name for this scene, preserving insertion
    /// order and skipping duplicates.
    pub fn add_character(&mut self, name: &str) {
        if !name.is_empty() && !self.characters.iter().any(|c| c == name) {
            self.characters.push(name.to_string());
        }
    }

    /// Record a candidate prop, skipping duplicates.
    pub fn add_prop(&mut self, name: &str) {
        if !name.is_empty() && !self.props.iter().any(|p| p == name) {
            self.props.push(name.to_string());
        }
    }

    /// Whether the scene already lists this character.
    pub fn has_character(&self, name: &str) -> bool {
        self.characters.iter().any(|c| c == name)
    }

    /// Append a line to the scene's notes.
    pub fn add_note(&mut self, note: &str) {
        if !self.notes.is_empty() {
            self.notes.push('\n');
        }
        self.notes.push_str(note);
    }
}

/// Title-page-like content preceding the first scene heading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

/// The importer's output: scenes in document order plus front matter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedDocument {
    pub scenes: Vec<ParsedScene>,
    pub front_matter: FrontMatter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_character_dedups() {
        let mut scene = ParsedScene::new("INT. KITCHEN - DAY");
        scene.add_character("JOHN");
        scene.add_character("AVA");
        scene.add_character("JOHN");
        assert_eq!(scene.characters, ["JOHN", "AVA"]);
    }

    #[test]
    fn test_add_note_joins_lines() {
        let mut scene = ParsedScene::new("EXT. FIELD - NIGHT");
        scene.add_note("tension rises");
        scene.add_note("storm builds");
        assert_eq!(scene.notes, "tension rises\nstorm builds");
    }
}
