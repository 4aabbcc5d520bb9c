//! The persisted unit: one chunk per scene.

use scenechunks_core::{Block, ChunkId, ParsedScene};
use serde::{Deserialize, Serialize};

use crate::slug::{SceneSlug, parse_scene_heading};

/// Title used when a scene arrives with no heading text at all.
const UNTITLED: &str = "UNTITLED";

/// Standard screenplay layout constants used for page estimation.
const ACTION_CHARS_PER_LINE: usize = 65;
const DIALOGUE_CHARS_PER_LINE: usize = 40;
const LINES_PER_PAGE: f64 = 55.0;

/// One scene as the application persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub id: ChunkId,
    pub title: String,
    pub slug: SceneSlug,
    pub body: Vec<Block>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub props: Vec<String>,
    #[serde(default)]
    pub emotional_beat: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub est_page_length: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub anchor_role: Option<String>,
    #[serde(default)]
    pub locked: bool,
}

fn default_status() -> String {
    "draft".to_string()
}

impl Chunk {
    /// Turn an imported scene into a fresh draft chunk. The title is
    /// re-rendered from the parsed slug so stored headings are uniform.
    pub fn from_scene(scene: &ParsedScene) -> Self {
        let heading = if scene.title.is_empty() { UNTITLED } else { scene.title.as_str() };
        let slug = parse_scene_heading(heading);
        let mut chunk = Chunk {
            id: ChunkId::fresh(),
            title: slug.to_string(),
            slug,
            body: scene.body.clone(),
            characters: scene.characters.clone(),
            props: scene.props.clone(),
            emotional_beat: String::new(),
            status: default_status(),
            tags: scene.tags.clone(),
            est_page_length: 0.0,
            notes: scene.notes.clone(),
            anchor_role: scene.anchor_role.clone(),
            locked: false,
        };
        chunk.est_page_length = chunk.estimate_page_length();
        chunk
    }

    /// Estimate this chunk's formatted page length, one decimal place.
    ///
    /// Line counts follow standard screenplay layout: one line per 65
    /// characters of action, one per 40 characters of dialogue, 55
    /// lines per page. Deliberately rough.
    pub fn estimate_page_length(&self) -> f64 {
        let mut lines = 1; // scene heading

        for block in &self.body {
            match block {
                Block::Action { text } => {
                    lines += lines_from_text(text, ACTION_CHARS_PER_LINE);
                    lines += 1;
                }
                Block::DialogueBlock {
                    character,
                    parenthetical,
                    dialogue,
                } => {
                    if !character.is_empty() {
                        lines += 1;
                    }
                    if !parenthetical.trim().is_empty() {
                        lines += 1;
                    }
                    lines += lines_from_text(dialogue, DIALOGUE_CHARS_PER_LINE);
                    lines += 1;
                }
                Block::Transition { .. } => {
                    lines += 2;
                }
                Block::DualDialogue { .. } => {
                    // rougher estimate
                    lines += 4;
                }
            }
        }

        let pages = lines as f64 / LINES_PER_PAGE;
        (pages * 10.0).round() / 10.0
    }
}

fn lines_from_text(text: &str, chars_per_line: usize) -> usize {
    let len = text.trim().chars().count();
    len.div_ceil(chars_per_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scene_renders_uniform_title() {
        let mut scene = ParsedScene::new("int. kitchen - day");
        scene.body.push(Block::action("He waits."));
        let chunk = Chunk::from_scene(&scene);
        assert_eq!(chunk.title, "INT. KITCHEN - DAY");
        assert_eq!(chunk.status, "draft");
        assert!(!chunk.locked);
        assert!(chunk.est_page_length > 0.0);
    }

    #[test]
    fn test_untitled_scene_gets_placeholder() {
        let chunk = Chunk::from_scene(&ParsedScene::default());
        assert_eq!(chunk.slug.location, "UNTITLED");
    }

    #[test]
    fn test_page_estimate_counts_layout_lines() {
        let mut scene = ParsedScene::new("INT. ROOM - DAY");
        // 130 chars of action -> 2 lines at 65/line, +1 trailing
        scene.body.push(Block::action("a".repeat(130)));
        // cue + 80 chars of dialogue -> 1 + 2 lines at 40/line, +1
        scene.body.push(Block::dialogue("JOHN", "", "b".repeat(80)));
        scene.body.push(Block::transition("CUT TO:"));
        let chunk = Chunk::from_scene(&scene);
        // 1 heading + 3 action + 4 dialogue + 2 transition = 10 lines
        assert_eq!(chunk.est_page_length, (10.0 / 55.0 * 10.0_f64).round() / 10.0);
    }

    #[test]
    fn test_estimate_is_one_decimal() {
        let mut scene = ParsedScene::new("INT. ROOM - DAY");
        scene.body.push(Block::action("Short."));
        let chunk = Chunk::from_scene(&scene);
        let scaled = chunk.est_page_length * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
}
