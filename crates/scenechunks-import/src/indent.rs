//! Adaptive character-cue indentation.
//!
//! Character cues are reliably indented relative to action margins, but
//! the absolute column varies by source document. The tracker learns the
//! column from the hinted sample (or the first accepted cue) and then
//! tolerates drift, so no fixed grammar is required.

/// Columns a tab counts for when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Accepted drift from the learned cue column. Generous, to absorb
/// tab/space mixing.
pub const INDENT_TOLERANCE: usize = 8;

/// Width of a line's leading whitespace, tabs expanded.
pub fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            _ => break,
        }
    }
    width
}

/// Learned character-cue indentation, stateful across one parse.
#[derive(Debug, Clone, Default)]
pub struct IndentTracker {
    learned: Option<usize>,
}

impl IndentTracker {
    /// Create a tracker, optionally seeded from the hint's
    /// `character_indent`.
    pub fn new(seed: Option<usize>) -> Self {
        Self { learned: seed }
    }

    /// Decide whether a cue candidate at this indentation is a real
    /// character cue. The first candidate is accepted unconditionally
    /// and sets the learned column.
    pub fn accept(&mut self, candidate_width: usize) -> bool {
        match self.learned {
            None => {
                self.learned = Some(candidate_width);
                true
            }
            Some(learned) => learned.abs_diff(candidate_width) <= INDENT_TOLERANCE,
        }
    }

    /// The currently learned cue column, if any.
    pub fn learned(&self) -> Option<usize> {
        self.learned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_width_tabs_count_as_four() {
        assert_eq!(indent_width("JOHN"), 0);
        assert_eq!(indent_width("  JOHN"), 2);
        assert_eq!(indent_width("\tJOHN"), 4);
        assert_eq!(indent_width("\t  JOHN"), 6);
    }

    #[test]
    fn test_first_candidate_learns() {
        let mut tracker = IndentTracker::new(None);
        assert!(tracker.accept(12));
        assert_eq!(tracker.learned(), Some(12));
    }

    #[test]
    fn test_seeded_tolerance_window() {
        // hint indent 3 -> accept 0..=11, reject 20
        let mut tracker = IndentTracker::new(Some(3));
        assert!(tracker.accept(0));
        assert!(tracker.accept(11));
        assert!(!tracker.accept(20));
        // rejections do not move the learned column
        assert_eq!(tracker.learned(), Some(3));
    }
}
