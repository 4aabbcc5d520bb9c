//! Typed content blocks inside a scene body.

use serde::{Deserialize, Serialize};

/// A content block in a scene body.
///
/// Serializes with a `type` tag and camelCase fields so the emitted JSON
/// matches the persisted project format, which consumers pattern-match on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    /// Scene description / stage direction.
    #[serde(rename = "action")]
    Action { text: String },
    /// A character cue with its attached dialogue.
    ///
    /// `character` is never empty when the block exists; `parenthetical`
    /// is stored without its enclosing parentheses.
    #[serde(rename = "dialogueBlock")]
    DialogueBlock {
        character: String,
        parenthetical: String,
        dialogue: String,
    },
    /// Two speeches delivered side by side. Never produced by the
    /// importer; created in the editor.
    #[serde(rename = "dualDialogue")]
    DualDialogue { left: Speech, right: Speech },
    /// An editing transition (CUT TO:, FADE OUT., ...).
    #[serde(rename = "transition")]
    Transition { text: String },
}

/// One column of a dual-dialogue block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Speech {
    pub character: String,
    #[serde(default)]
    pub parenthetical: String,
    #[serde(default)]
    pub dialogue: String,
}

impl Block {
    /// Create an action block.
    pub fn action(text: impl Into<String>) -> Self {
        Block::Action { text: text.into() }
    }

    /// Create a dialogue block.
    pub fn dialogue(
        character: impl Into<String>,
        parenthetical: impl Into<String>,
        dialogue: impl Into<String>,
    ) -> Self {
        Block::DialogueBlock {
            character: character.into(),
            parenthetical: parenthetical.into(),
            dialogue: dialogue.into(),
        }
    }

    /// Create a transition block.
    pub fn transition(text: impl Into<String>) -> Self {
        Block::Transition { text: text.into() }
    }

    /// Whether this is an action block.
    pub fn is_action(&self) -> bool {
        matches!(self, Block::Action { .. })
    }

    /// The block's free text, if it carries one directly.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Action { text } | Block::Transition { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_json_tag() {
        let json = serde_json::to_value(Block::action("He waits.")).unwrap();
        assert_eq!(json["type"], "action");
        assert_eq!(json["text"], "He waits.");

        let json = serde_json::to_value(Block::dialogue("JOHN", "", "Hello.")).unwrap();
        assert_eq!(json["type"], "dialogueBlock");
        assert_eq!(json["character"], "JOHN");
        assert_eq!(json["parenthetical"], "");
    }

    #[test]
    fn test_block_roundtrip() {
        let block = Block::dialogue("AVA", "beat", "Fine.");
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
