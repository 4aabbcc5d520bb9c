//! Flatten a script back into screenplay-shaped plain text.

use scenechunks_core::{Block, Speech};

use crate::project::{ProjectError, ProjectFile, Script};

const DIALOGUE_INDENT: &str = "    ";
const TRANSITION_INDENT: &str = "                              ";

/// Line accumulator for the assembled output.
struct EmitContext {
    lines: Vec<String>,
}

impl EmitContext {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn speech(&mut self, speech: &Speech) {
        if !speech.character.trim().is_empty() {
            self.line(speech.character.trim().to_uppercase());
        }
        if !speech.parenthetical.trim().is_empty() {
            self.line(format!("{DIALOGUE_INDENT}({})", speech.parenthetical.trim()));
        }
        if !speech.dialogue.trim().is_empty() {
            self.line(format!("{DIALOGUE_INDENT}{}", speech.dialogue.trim()));
        }
        self.blank();
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Assemble one script's chunks, in order, into plain text.
///
/// Dual dialogue has no plain-text column layout; its two speeches are
/// emitted sequentially.
pub fn assembled_script_text(file: &ProjectFile, script: &Script) -> String {
    let mut ctx = EmitContext::new();

    for chunk in file.chunks_in_order(script) {
        if !chunk.title.is_empty() {
            ctx.line(chunk.title.to_uppercase());
            ctx.blank();
        }

        for block in &chunk.body {
            match block {
                Block::Action { text } => {
                    if !text.trim().is_empty() {
                        ctx.line(text.trim());
                        ctx.blank();
                    }
                }
                Block::DialogueBlock {
                    character,
                    parenthetical,
                    dialogue,
                } => {
                    ctx.speech(&Speech {
                        character: character.clone(),
                        parenthetical: parenthetical.clone(),
                        dialogue: dialogue.clone(),
                    });
                }
                Block::DualDialogue { left, right } => {
                    ctx.speech(left);
                    ctx.speech(right);
                }
                Block::Transition { text } => {
                    if !text.trim().is_empty() {
                        ctx.line(format!("{TRANSITION_INDENT}{}", text.trim().to_uppercase()));
                        ctx.blank();
                    }
                }
            }
        }

        ctx.blank();
    }

    ctx.finish()
}

/// Assemble the active script of a project.
pub fn assembled_active_script(file: &ProjectFile) -> Result<String, ProjectError> {
    Ok(assembled_script_text(file, file.active_script()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenechunks_core::{FrontMatter, ImportedDocument, ParsedScene};

    fn project_with(scene: ParsedScene) -> ProjectFile {
        let mut file = ProjectFile::new("Assemble");
        file.apply_import(&ImportedDocument {
            scenes: vec![scene],
            front_matter: FrontMatter::default(),
        })
        .unwrap();
        file
    }

    #[test]
    fn test_assembles_heading_action_dialogue() {
        let mut scene = ParsedScene::new("INT. KITCHEN - DAY");
        scene.body.push(Block::action("JOHN walks in."));
        scene.body.push(Block::dialogue("JOHN", "softly", "Hello."));

        let file = project_with(scene);
        let text = assembled_active_script(&file).unwrap();
        assert_eq!(
            text,
            "INT. KITCHEN - DAY\n\nJOHN walks in.\n\nJOHN\n    (softly)\n    Hello.\n\n"
        );
    }

    #[test]
    fn test_transition_right_aligned_and_uppercased() {
        let mut scene = ParsedScene::new("INT. HALL - DAY");
        scene.body.push(Block::transition("Cut to:"));

        let file = project_with(scene);
        let text = assembled_active_script(&file).unwrap();
        assert!(text.contains(&format!("{TRANSITION_INDENT}CUT TO:")));
    }

    #[test]
    fn test_dual_dialogue_emitted_sequentially() {
        let mut scene = ParsedScene::new("INT. HALL - DAY");
        scene.body.push(Block::DualDialogue {
            left: Speech {
                character: "GIRL".to_string(),
                dialogue: "Left side.".to_string(),
                ..Default::default()
            },
            right: Speech {
                character: "BOY".to_string(),
                dialogue: "Right side.".to_string(),
                ..Default::default()
            },
        });

        let file = project_with(scene);
        let text = assembled_active_script(&file).unwrap();
        let girl = text.find("GIRL").unwrap();
        let boy = text.find("BOY").unwrap();
        assert!(girl < boy);
        assert!(text.contains("    Left side."));
    }
}
