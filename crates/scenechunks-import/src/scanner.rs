//! The line-oriented document scanner.
//!
//! Walks the input once, classifying each line and mutating a small
//! amount of accumulation state: the scene under construction, an open
//! dialogue block, and a buffer of action lines. Decisions are
//! irreversible; the only look-ahead is the peek past blank lines that
//! decides whether a transition belongs to the next scene.

use scenechunks_core::{
    Block, FrontMatter, ImportHints, ImportWarning, ParsedScene, Severity, WarningKind,
};

use crate::classify::{self, LineClass};
use crate::entities::{normalize_character_name, split_character_names};
use crate::indent::{IndentTracker, indent_width};
use crate::merge::merge_adjacent_actions;

/// Title given to the fallback scene when no heading is ever found.
const FALLBACK_TITLE: &str = "UNTITLED SCENE";

/// A dialogue block being accumulated, not yet emitted.
#[derive(Debug, Default)]
struct OpenDialogue {
    character: String,
    parenthetical: String,
    dialogue: String,
}

/// One pass (or two, if the fallback scene kicks in) over the lines of
/// a document.
pub struct DocumentScanner<'a> {
    lines: &'a [&'a str],
    hints: &'a ImportHints,
    tracker: IndentTracker,
    scenes: Vec<ParsedScene>,
    front_matter: FrontMatter,
    warnings: Vec<ImportWarning>,
    current: Option<ParsedScene>,
    dialogue: Option<OpenDialogue>,
    action_buf: Vec<String>,
    pending_transition: Option<String>,
}

impl<'a> DocumentScanner<'a> {
    pub fn new(lines: &'a [&'a str], hints: &'a ImportHints) -> Self {
        Self {
            lines,
            hints,
            tracker: IndentTracker::new(hints.character_indent),
            scenes: Vec::new(),
            front_matter: FrontMatter::default(),
            warnings: Vec::new(),
            current: None,
            dialogue: None,
            action_buf: Vec::new(),
            pending_transition: None,
        }
    }

    /// Scan the whole document.
    ///
    /// If no scene heading is ever recognized but the document has
    /// content, the scan is repeated with a single pre-opened fallback
    /// scene so nothing is dropped, and a warning records the rescue.
    pub fn scan(&mut self) -> (Vec<ParsedScene>, FrontMatter, Vec<ImportWarning>) {
        self.run_pass();

        let has_content = self.lines.iter().any(|l| !l.trim().is_empty());
        if self.scenes.is_empty() && has_content {
            self.reset();
            self.current = Some(ParsedScene::new(FALLBACK_TITLE));
            self.warnings.push(ImportWarning::new(
                Severity::Minor,
                WarningKind::FallbackScene,
                format!("no scene heading found, content wrapped in \"{FALLBACK_TITLE}\""),
            ));
            self.run_pass();
        }

        (
            std::mem::take(&mut self.scenes),
            std::mem::take(&mut self.front_matter),
            std::mem::take(&mut self.warnings),
        )
    }

    fn reset(&mut self) {
        self.tracker = IndentTracker::new(self.hints.character_indent);
        self.scenes.clear();
        self.front_matter = FrontMatter::default();
        self.current = None;
        self.dialogue = None;
        self.action_buf.clear();
        self.pending_transition = None;
    }

    fn run_pass(&mut self) {
        for index in 0..self.lines.len() {
            self.step(index);
        }
        self.finalize_scene();
    }

    fn step(&mut self, index: usize) {
        let line = self.lines[index];
        let trimmed = line.trim();

        match classify::classify_line(trimmed, self.hints) {
            LineClass::Blank => {
                self.flush_dialogue();
                self.flush_action();
            }
            LineClass::TitleHinted => {
                self.front_matter.title = trimmed.to_string();
            }
            LineClass::AuthorHinted => {
                self.front_matter.author = trimmed.to_string();
            }
            LineClass::SceneHeading => {
                self.finalize_scene();
                let mut scene = ParsedScene::new(trimmed.to_uppercase());
                scene.tags = classify::tags_for_heading(&scene.title);
                if let Some(transition) = self.pending_transition.take() {
                    scene.transition = transition;
                }
                self.current = Some(scene);
            }
            LineClass::Transition => {
                self.flush_dialogue();
                self.flush_action();
                let text = trimmed.to_uppercase();
                if self.heading_follows(index) {
                    // belongs to the next scene's entry, not this body
                    self.pending_transition = Some(text);
                } else if let Some(scene) = self.current.as_mut() {
                    scene.body.push(Block::transition(text));
                }
            }
            LineClass::BeatMarker => {
                self.flush_dialogue();
                self.flush_action();
                let label = classify::beat_label(trimmed).unwrap_or(trimmed);
                if let Some(scene) = self.current.as_mut() {
                    match classify::anchor_role_for(label) {
                        Some(role) => scene.anchor_role = Some(role.to_string()),
                        None => {
                            scene.add_note(label);
                            self.warnings.push(
                                ImportWarning::new(
                                    Severity::Minor,
                                    WarningKind::UnrecognizedBeat(label.to_string()),
                                    format!(
                                        "beat marker \"{label}\" matches no known beat, kept as a note"
                                    ),
                                )
                                .at_line(index + 1),
                            );
                        }
                    }
                }
            }
            LineClass::CharacterHinted => {
                if self.current.is_some() {
                    self.open_dialogue(trimmed);
                }
            }
            LineClass::CharacterCandidate => {
                if self.current.is_none() {
                    return;
                }
                if self.tracker.accept(indent_width(line)) {
                    self.open_dialogue(trimmed);
                } else {
                    self.plain_line(trimmed);
                }
            }
            LineClass::Parenthetical => {
                if self.current.is_none() {
                    return;
                }
                match self.dialogue.as_mut() {
                    Some(open) if open.parenthetical.is_empty() => {
                        open.parenthetical =
                            trimmed.trim_start_matches('(').trim_end_matches(')').trim().to_string();
                    }
                    _ => self.plain_line(trimmed),
                }
            }
            LineClass::DialogueHinted | LineClass::Other => {
                if self.current.is_none() {
                    return;
                }
                self.plain_line(trimmed);
            }
        }
    }

    /// Look past blank lines: does a scene heading come next?
    fn heading_follows(&self, index: usize) -> bool {
        self.lines[index + 1..]
            .iter()
            .map(|l| l.trim())
            .find(|t| !t.is_empty())
            .is_some_and(|t| {
                classify::classify_line(t, self.hints) == LineClass::SceneHeading
            })
    }

    /// Dialogue continuation when a block is open, action otherwise.
    fn plain_line(&mut self, trimmed: &str) {
        match self.dialogue.as_mut() {
            Some(open) => {
                if !open.dialogue.is_empty() {
                    open.dialogue.push(' ');
                }
                open.dialogue.push_str(trimmed);
            }
            None => self.action_buf.push(trimmed.to_string()),
        }
    }

    /// Start accumulating a dialogue block and register the speaker.
    fn open_dialogue(&mut self, raw_cue: &str) {
        self.flush_dialogue();
        self.flush_action();

        let canonical = normalize_character_name(raw_cue);
        if let Some(scene) = self.current.as_mut() {
            for name in split_character_names(&canonical) {
                scene.add_character(&name);
            }
        }

        self.dialogue = Some(OpenDialogue {
            character: raw_cue.to_string(),
            ..Default::default()
        });
    }

    fn flush_dialogue(&mut self) {
        if let Some(open) = self.dialogue.take()
            && let Some(scene) = self.current.as_mut()
        {
            scene.body.push(Block::DialogueBlock {
                character: open.character,
                parenthetical: open.parenthetical,
                dialogue: open.dialogue.trim_end().to_string(),
            });
        }
    }

    fn flush_action(&mut self) {
        if self.action_buf.is_empty() {
            return;
        }
        let joined = self.action_buf.join(" ");
        self.action_buf.clear();
        let text = joined.trim();
        if !text.is_empty()
            && let Some(scene) = self.current.as_mut()
        {
            scene.body.push(Block::action(text));
        }
    }

    fn finalize_scene(&mut self) {
        self.flush_dialogue();
        self.flush_action();
        if let Some(mut scene) = self.current.take() {
            scene.body = merge_adjacent_actions(std::mem::take(&mut scene.body));
            self.scenes.push(scene);
        }
    }
}
