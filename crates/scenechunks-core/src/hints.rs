//! User-confirmed hint lines that seed and override classification.

use serde::{Deserialize, Serialize};

/// Exact-match example lines chosen by a reviewer before parsing.
///
/// A line equal to a hint string (after trimming) short-circuits
/// classification to that hint's category, bypassing all heuristics.
/// `character_indent` seeds the learned character-cue indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportHints {
    pub title: Option<String>,
    pub author: Option<String>,
    pub scene_heading: Option<String>,
    pub transition: Option<String>,
    pub character: Option<String>,
    pub parenthetical: Option<String>,
    pub dialogue: Option<String>,
    /// Leading indentation (tabs counted as 4 columns) of the chosen
    /// character line in the source text.
    pub character_indent: Option<usize>,
}

/// The category a hint overrides a line into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintCategory {
    Title,
    Author,
    SceneHeading,
    Transition,
    Character,
    Parenthetical,
    Dialogue,
}

impl ImportHints {
    /// Create an empty hint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scene-heading hint.
    pub fn with_scene_heading(mut self, line: impl Into<String>) -> Self {
        self.scene_heading = Some(line.into());
        self
    }

    /// Set the character hint.
    pub fn with_character(mut self, line: impl Into<String>) -> Self {
        self.character = Some(line.into());
        self
    }

    /// Set the transition hint.
    pub fn with_transition(mut self, line: impl Into<String>) -> Self {
        self.transition = Some(line.into());
        self
    }

    /// Set the parenthetical hint.
    pub fn with_parenthetical(mut self, line: impl Into<String>) -> Self {
        self.parenthetical = Some(line.into());
        self
    }

    /// Set the dialogue hint.
    pub fn with_dialogue(mut self, line: impl Into<String>) -> Self {
        self.dialogue = Some(line.into());
        self
    }

    /// Set the title hint.
    pub fn with_title(mut self, line: impl Into<String>) -> Self {
        self.title = Some(line.into());
        self
    }

    /// Set the author hint.
    pub fn with_author(mut self, line: impl Into<String>) -> Self {
        self.author = Some(line.into());
        self
    }

    /// Seed the character-cue indentation.
    pub fn with_character_indent(mut self, columns: usize) -> Self {
        self.character_indent = Some(columns);
        self
    }

    /// Return the hint category a trimmed line matches verbatim, if any.
    ///
    /// Front-matter hints win over structural hints so a line that was
    /// picked as the title never re-enters a scene body.
    pub fn category_of(&self, trimmed: &str) -> Option<HintCategory> {
        let matches = |hint: &Option<String>| {
            hint.as_deref()
                .is_some_and(|h| !h.trim().is_empty() && h.trim() == trimmed)
        };

        if matches(&self.title) {
            Some(HintCategory::Title)
        } else if matches(&self.author) {
            Some(HintCategory::Author)
        } else if matches(&self.scene_heading) {
            Some(HintCategory::SceneHeading)
        } else if matches(&self.transition) {
            Some(HintCategory::Transition)
        } else if matches(&self.character) {
            Some(HintCategory::Character)
        } else if matches(&self.parenthetical) {
            Some(HintCategory::Parenthetical)
        } else if matches(&self.dialogue) {
            Some(HintCategory::Dialogue)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_exact_match_only() {
        let hints = ImportHints::new().with_character("DETECTIVE");
        assert_eq!(
            hints.category_of("DETECTIVE"),
            Some(HintCategory::Character)
        );
        assert_eq!(hints.category_of("DETECTIVE SMITH"), None);
    }

    #[test]
    fn test_category_of_trims_hint() {
        let hints = ImportHints::new().with_character("   DETECTIVE");
        assert_eq!(
            hints.category_of("DETECTIVE"),
            Some(HintCategory::Character)
        );
    }

    #[test]
    fn test_empty_hint_never_matches() {
        let hints = ImportHints::new().with_title("");
        assert_eq!(hints.category_of(""), None);
    }
}
