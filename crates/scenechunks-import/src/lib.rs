//! Free-text screenplay importer for Scene Chunks.
//!
//! Converts loosely formatted plain text into structured scenes by
//! classifying lines heuristically, one irreversible decision at a time.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> [scanner: line state machine] -> scenes with raw blocks
//!          -> [merge: coalesce adjacent action] -> normalized bodies
//!          -> [entities: cross-scene second pass] -> characters + props
//! ```
//!
//! The scanner leans on two helpers per line: the ordered rule table in
//! [`classify`] and the adaptive character-cue indentation in [`indent`].
//! Caller-confirmed [`ImportHints`] short-circuit classification for lines
//! that match a hint verbatim.
//!
//! Parsing never fails: unclassifiable lines degrade to action text, and
//! anything handled by a fallback rule is reported as an [`ImportWarning`].

pub mod classify;
pub mod entities;
pub mod indent;
pub mod merge;
mod scanner;

use scenechunks_core::{ImportHints, ImportResult};

use scanner::DocumentScanner;

/// Parse screenplay-like text with no hints.
pub fn parse(input: &str) -> ImportResult {
    parse_with_hints(input, &ImportHints::default())
}

/// Parse screenplay-like text, applying caller-confirmed hint lines.
///
/// Lines are split on `\n` with any trailing `\r` stripped. The result
/// preserves strict document order and is safe to call concurrently: all
/// parser state is local to the invocation.
pub fn parse_with_hints(input: &str, hints: &ImportHints) -> ImportResult {
    let lines: Vec<&str> = input.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect();

    let mut scanner = DocumentScanner::new(&lines, hints);
    let outcome = scanner.scan();

    let (mut scenes, front_matter, mut warnings) = outcome;

    // Cross-scene second pass: harvest implicit character mentions and
    // candidate props from action text.
    let known = entities::collect_known_characters(&scenes);
    entities::harvest_entities(&mut scenes, &known);

    if lines.iter().all(|l| l.trim().is_empty()) {
        warnings.push(scenechunks_core::ImportWarning::new(
            scenechunks_core::Severity::Info,
            scenechunks_core::WarningKind::EmptyDocument,
            "input contained no non-blank lines",
        ));
    }

    ImportResult::with_warnings(
        scenechunks_core::ImportedDocument {
            scenes,
            front_matter,
        },
        warnings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenechunks_core::Block;

    #[test]
    fn test_parse_single_scene_with_dialogue() {
        let result = parse("INT. KITCHEN - DAY\nJOHN walks in.\n\nJOHN\nHello.\n");
        let scenes = &result.document.scenes;
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].title, "INT. KITCHEN - DAY");
        assert_eq!(
            scenes[0].body,
            [
                Block::action("JOHN walks in."),
                Block::dialogue("JOHN", "", "Hello."),
            ]
        );
        assert_eq!(scenes[0].characters, ["JOHN"]);
    }

    #[test]
    fn test_parse_transition_attaches_to_next_scene() {
        let result = parse("CUT TO:\nINT. BAR - NIGHT\n");
        let scenes = &result.document.scenes;
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].title, "INT. BAR - NIGHT");
        assert_eq!(scenes[0].transition, "CUT TO:");
        assert!(scenes[0].body.is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse("");
        assert!(result.document.scenes.is_empty());
        assert!(result.has_warnings());
    }
}
