//! Line classification: the ordered rule table.
//!
//! Given a trimmed line (and the hint set), decide what screenplay
//! element it most likely is. Rules are evaluated in a fixed priority
//! order and the first match wins; a verbatim hint match bypasses every
//! heuristic below it.

use scenechunks_core::{HintCategory, ImportHints};

/// Maximum length of a plausible character cue.
const MAX_CHARACTER_LEN: usize = 50;

/// Scene-heading prefixes, matched case-insensitively.
pub const SCENE_PREFIXES: &[&str] = &["INT./EXT.", "INT/EXT.", "I/E.", "INT.", "EXT.", "EST."];

/// Exact transition terms that do not end in `TO:`.
const TRANSITION_TERMS: &[&str] = &[
    "FADE IN:",
    "FADE OUT.",
    "SMASH CUT:",
    "DISSOLVE TO:",
    "CUT TO BLACK.",
];

/// Substrings that mark an upper-case line as a transition.
const TRANSITION_FRAGMENTS: &[&str] =
    &["FADE IN", "FADE OUT", "BLACK OUT", "DISSOLVE", "SMASH CUT"];

/// What a line was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only; closes any open accumulation.
    Blank,
    /// Starts a new scene.
    SceneHeading,
    /// Editing transition.
    Transition,
    /// `[[...]]` or `>...<` structural beat marker.
    BeatMarker,
    /// `( ... )` actor direction.
    Parenthetical,
    /// Candidate character cue; the indent estimator has the final say.
    CharacterCandidate,
    /// Hinted character cue; accepted regardless of indentation.
    CharacterHinted,
    /// Hinted dialogue line; never a cue, even if fully upper-case.
    DialogueHinted,
    /// Matched the title front-matter hint.
    TitleHinted,
    /// Matched the author front-matter hint.
    AuthorHinted,
    /// Context decides: action, or dialogue continuation.
    Other,
}

/// Classify a line. Leading and trailing whitespace is ignored; empty
/// and whitespace-only lines always classify as [`LineClass::Blank`].
pub fn classify_line(line: &str, hints: &ImportHints) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    // Rule 1: verbatim hint match short-circuits everything.
    if let Some(category) = hints.category_of(trimmed) {
        return match category {
            HintCategory::Title => LineClass::TitleHinted,
            HintCategory::Author => LineClass::AuthorHinted,
            HintCategory::SceneHeading => LineClass::SceneHeading,
            HintCategory::Transition => LineClass::Transition,
            HintCategory::Character => LineClass::CharacterHinted,
            HintCategory::Parenthetical => LineClass::Parenthetical,
            HintCategory::Dialogue => LineClass::DialogueHinted,
        };
    }

    if is_scene_heading(trimmed) {
        return LineClass::SceneHeading;
    }
    if is_transition(trimmed) {
        return LineClass::Transition;
    }
    if beat_label(trimmed).is_some() {
        return LineClass::BeatMarker;
    }
    if is_parenthetical(trimmed) {
        return LineClass::Parenthetical;
    }
    if is_character_candidate(trimmed) {
        return LineClass::CharacterCandidate;
    }

    LineClass::Other
}

/// Standard scene-heading prefix match (INT., EXT., I/E., EST., ...).
pub fn is_scene_heading(trimmed: &str) -> bool {
    let upper = trimmed.to_uppercase();
    SCENE_PREFIXES.iter().any(|p| upper.starts_with(p))
}

/// Upper-case line ending in `TO:` or matching a known transition term.
pub fn is_transition(trimmed: &str) -> bool {
    if trimmed.chars().any(|c| c.is_lowercase()) {
        return false;
    }
    trimmed.ends_with("TO:")
        || TRANSITION_TERMS.contains(&trimmed)
        || TRANSITION_FRAGMENTS.iter().any(|f| trimmed.contains(f))
}

/// `( ... )` on a line of its own.
pub fn is_parenthetical(trimmed: &str) -> bool {
    trimmed.len() >= 2 && trimmed.starts_with('(') && trimmed.ends_with(')')
}

/// Fully upper-case, contains at least one letter, short enough to be a
/// name. Still only a candidate: indentation decides (see
/// [`crate::indent`]).
pub fn is_character_candidate(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && trimmed.chars().count() <= MAX_CHARACTER_LEN
        && trimmed == trimmed.to_uppercase()
        && trimmed != trimmed.to_lowercase()
}

/// Extract the raw label from a beat marker line (`[[...]]` or `>...<`).
pub fn beat_label(trimmed: &str) -> Option<&str> {
    if let Some(inner) = trimmed.strip_prefix("[[").and_then(|s| s.strip_suffix("]]")) {
        return Some(inner.trim());
    }
    if trimmed.len() >= 2
        && let Some(inner) = trimmed.strip_prefix('>').and_then(|s| s.strip_suffix('<'))
    {
        return Some(inner.trim());
    }
    None
}

/// Map a beat label to the structural anchor-role id it names, if any.
///
/// Ids match the beat ids used by the built-in structure templates.
pub fn anchor_role_for(label: &str) -> Option<&'static str> {
    let upper = label.to_uppercase();
    if upper.contains("INCITING") {
        Some("inciting-incident")
    } else if upper.contains("ACT ONE") || upper.contains("BREAK INTO 2") {
        Some("break-into-2")
    } else if upper.contains("MIDPOINT") {
        Some("midpoint")
    } else if upper.contains("ACT TWO") || upper.contains("BREAK INTO 3") {
        Some("break-into-3")
    } else if upper.contains("CLIMAX") {
        Some("finale")
    } else {
        None
    }
}

/// Tags a scene inherits from its heading prefix.
pub fn tags_for_heading(title: &str) -> Vec<String> {
    let upper = title.to_uppercase();
    if upper.starts_with("INT./EXT.") || upper.starts_with("INT/EXT.") || upper.starts_with("I/E.")
    {
        vec!["INT".to_string(), "EXT".to_string()]
    } else if upper.starts_with("INT.") {
        vec!["INT".to_string()]
    } else if upper.starts_with("EXT.") {
        vec!["EXT".to_string()]
    } else if upper.starts_with("EST.") {
        vec!["EST".to_string()]
    } else {
        Vec::new()
    }
}
