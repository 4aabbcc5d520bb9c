//! Character and prop harvesting.
//!
//! The scanner registers every explicit character cue as it goes. This
//! module owns name normalization plus the second, cross-scene pass that
//! scans finished action text for implicit character mentions and
//! candidate props. Prop detection is deliberately permissive; false
//! positives are expected and cleaned up in the editor.

use scenechunks_core::{Block, ParsedScene};

/// All-caps tokens that are screenplay furniture, never props.
const STOP_WORDS: &[&str] = &[
    "INT",
    "EXT",
    "DAY",
    "NIGHT",
    "CONTINUOUS",
    "MOMENTS",
    "LATER",
    "THE",
    "AND",
    "CUT",
    "FADE",
    "TO",
    "BACK",
    "VIEW",
    "ANGLE",
];

/// Shortest token worth considering.
const MIN_TOKEN_LEN: usize = 3;

/// Canonical character names accumulated across one parse, insertion
/// order preserved.
#[derive(Debug, Default)]
pub struct KnownCharacters {
    names: Vec<String>,
}

impl KnownCharacters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canonical name, skipping duplicates.
    pub fn register(&mut self, name: &str) {
        if !name.is_empty() && !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    /// Find the known name an all-caps token refers to, if any.
    ///
    /// A token matches a name when the name contains it with a
    /// non-letter (or end of name) immediately after, so `JOHN` matches
    /// `JOHN SMITH` but not `JOHNNY`.
    pub fn find_match(&self, token: &str) -> Option<&str> {
        if token.is_empty() {
            return None;
        }
        self.names
            .iter()
            .find(|name| contains_with_boundary(name, token))
            .map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

fn contains_with_boundary(name: &str, token: &str) -> bool {
    for (start, _) in name.match_indices(token) {
        let end = start + token.len();
        let boundary_after = name[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphabetic());
        if boundary_after {
            return true;
        }
    }
    false
}

/// Canonicalize a raw character cue: trim, strip one trailing
/// parenthetical annotation (`AVA (CONT'D)` -> `AVA`), uppercase.
pub fn normalize_character_name(raw: &str) -> String {
    let mut name = raw.trim();
    if name.ends_with(')')
        && let Some(open) = name.rfind('(')
    {
        name = name[..open].trim_end();
    }
    name.trim().to_uppercase()
}

/// Split a joint cue (`JOHN & AVA`, `JOHN AND AVA`) into individual
/// names. Single names come back as a one-element list.
pub fn split_character_names(canonical: &str) -> Vec<String> {
    canonical
        .replace(" AND ", "&")
        .split('&')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Rebuild the known-character set from finalized scenes.
pub fn collect_known_characters(scenes: &[ParsedScene]) -> KnownCharacters {
    let mut known = KnownCharacters::new();
    for scene in scenes {
        for name in &scene.characters {
            known.register(name);
        }
    }
    known
}

/// Second pass: for every scene, scan its action text token-by-token,
/// tagging implicit mentions of known characters and collecting
/// unmatched all-caps tokens as candidate props.
pub fn harvest_entities(scenes: &mut [ParsedScene], known: &KnownCharacters) {
    for scene in scenes.iter_mut() {
        let action_text: String = scene
            .body
            .iter()
            .filter_map(|block| match block {
                Block::Action { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");

        for token in action_text.split_whitespace() {
            let cleaned = token.trim_matches(|c: char| !c.is_alphanumeric());
            if !is_candidate_token(cleaned) {
                continue;
            }

            match known.find_match(cleaned) {
                Some(name) => {
                    if !scene.has_character(name) {
                        let owned = name.to_string();
                        scene.add_character(&owned);
                    }
                }
                None => {
                    if !scene.has_character(cleaned) {
                        scene.add_prop(cleaned);
                    }
                }
            }
        }
    }
}

fn is_candidate_token(cleaned: &str) -> bool {
    cleaned.chars().count() >= MIN_TOKEN_LEN
        && cleaned == cleaned.to_uppercase()
        && cleaned != cleaned.to_lowercase()
        && !STOP_WORDS.contains(&cleaned)
}
