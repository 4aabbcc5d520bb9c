//! Built-in narrative structure templates.
//!
//! A template maps a script's 0..=100 percentage timeline onto named
//! acts and beats. Scenes reference beats through their `anchorRole`
//! (a beat id), so the ids here are a stable vocabulary, not display
//! strings. The central place to add story structures.

use serde::Serialize;

/// An act: a labeled span of the percentage timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Act {
    pub from: u8,
    pub to: u8,
    pub label: &'static str,
}

/// A beat: a named story position at a fixed percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Beat {
    pub id: &'static str,
    pub label: &'static str,
    pub pct: u8,
}

/// One complete structure template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructureTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub acts: &'static [Act],
    pub beats: &'static [Beat],
}

impl StructureTemplate {
    /// Look up a beat by id.
    pub fn beat(&self, id: &str) -> Option<&'static Beat> {
        self.beats.iter().find(|b| b.id == id)
    }

    /// The act a given timeline percentage falls in. The final act is
    /// closed at 100.
    pub fn act_at(&self, pct: u8) -> Option<&'static Act> {
        self.acts
            .iter()
            .find(|a| pct >= a.from && (pct < a.to || (a.to == 100 && pct == 100)))
    }

    /// The beat whose position is nearest to a timeline percentage,
    /// earlier beat winning ties.
    pub fn nearest_beat(&self, pct: u8) -> Option<&'static Beat> {
        self.beats
            .iter()
            .min_by_key(|b| (b.pct.abs_diff(pct), b.pct))
    }
}

/// Template used when an unknown id is requested.
pub const DEFAULT_TEMPLATE_ID: &str = "3-act";

/// All built-in templates, stable order.
pub fn all() -> &'static [StructureTemplate] {
    TEMPLATES
}

/// Look up a template by id, falling back to the 3-act default.
pub fn by_id(id: &str) -> &'static StructureTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&TEMPLATES[0])
}

static TEMPLATES: &[StructureTemplate] = &[
    StructureTemplate {
        id: "3-act",
        label: "3-Act (Film)",
        acts: &[
            Act { from: 0, to: 25, label: "Act I" },
            Act { from: 25, to: 75, label: "Act II" },
            Act { from: 75, to: 100, label: "Act III" },
        ],
        beats: &[
            Beat { id: "opening-image", label: "Opening Image", pct: 0 },
            Beat { id: "setup", label: "Set-up", pct: 5 },
            Beat { id: "inciting-incident", label: "Inciting Incident", pct: 12 },
            Beat { id: "break-into-2", label: "Break into Act II", pct: 25 },
            Beat { id: "fun-and-games", label: "Promise of the Premise", pct: 35 },
            Beat { id: "midpoint", label: "Midpoint", pct: 50 },
            Beat { id: "bad-guys-close-in", label: "Bad Guys Close In", pct: 62 },
            Beat { id: "all-is-lost", label: "All Is Lost", pct: 75 },
            Beat { id: "break-into-3", label: "Break into Act III", pct: 85 },
            Beat { id: "finale", label: "Finale", pct: 95 },
        ],
    },
    StructureTemplate {
        id: "save-the-cat",
        label: "Save the Cat",
        acts: &[
            Act { from: 0, to: 25, label: "Act I" },
            Act { from: 25, to: 85, label: "Act II" },
            Act { from: 85, to: 100, label: "Act III" },
        ],
        beats: &[
            Beat { id: "opening-image", label: "Opening Image", pct: 0 },
            Beat { id: "theme-stated", label: "Theme Stated", pct: 5 },
            Beat { id: "setup", label: "Set-up", pct: 10 },
            Beat { id: "catalyst", label: "Catalyst", pct: 12 },
            Beat { id: "debate", label: "Debate", pct: 20 },
            Beat { id: "break-into-2", label: "Break into 2", pct: 25 },
            Beat { id: "b-story", label: "B Story", pct: 30 },
            Beat { id: "fun-and-games", label: "Fun & Games", pct: 35 },
            Beat { id: "midpoint", label: "Midpoint", pct: 50 },
            Beat { id: "bad-guys-close-in", label: "Bad Guys Close In", pct: 62 },
            Beat { id: "all-is-lost", label: "All Is Lost", pct: 75 },
            Beat { id: "dark-night", label: "Dark Night of the Soul", pct: 80 },
            Beat { id: "break-into-3", label: "Break into 3", pct: 85 },
            Beat { id: "finale", label: "Finale", pct: 92 },
            Beat { id: "final-image", label: "Final Image", pct: 100 },
        ],
    },
    // Dan Harmon style story circle
    StructureTemplate {
        id: "story-circle",
        label: "Story Circle (Harmon)",
        acts: &[
            Act { from: 0, to: 50, label: "Descent" },
            Act { from: 50, to: 100, label: "Return" },
        ],
        beats: &[
            Beat { id: "1-you", label: "1. You (comfort)", pct: 0 },
            Beat { id: "2-need", label: "2. Need", pct: 12 },
            Beat { id: "3-go", label: "3. Go", pct: 25 },
            Beat { id: "4-search", label: "4. Search", pct: 37 },
            Beat { id: "5-find", label: "5. Find", pct: 50 },
            Beat { id: "6-take", label: "6. Take (pay price)", pct: 62 },
            Beat { id: "7-return", label: "7. Return", pct: 75 },
            Beat { id: "8-change", label: "8. Change", pct: 90 },
        ],
    },
    // hour-long-ish TV with act-outs
    StructureTemplate {
        id: "tv-hour",
        label: "TV Hour (Act-outs)",
        acts: &[
            Act { from: 0, to: 10, label: "Teaser" },
            Act { from: 10, to: 30, label: "Act I" },
            Act { from: 30, to: 50, label: "Act II" },
            Act { from: 50, to: 70, label: "Act III" },
            Act { from: 70, to: 90, label: "Act IV" },
            Act { from: 90, to: 100, label: "Tag" },
        ],
        beats: &[
            Beat { id: "teaser", label: "Teaser / Hook", pct: 0 },
            Beat { id: "act-out-1", label: "Act-out 1", pct: 30 },
            Beat { id: "act-out-2", label: "Act-out 2", pct: 50 },
            Beat { id: "act-out-3", label: "Act-out 3", pct: 70 },
            Beat { id: "act-out-4", label: "Act-out 4", pct: 90 },
        ],
    },
    // short film flow
    StructureTemplate {
        id: "short-film",
        label: "Short Film (5-beat)",
        acts: &[
            Act { from: 0, to: 20, label: "Setup" },
            Act { from: 20, to: 80, label: "Development" },
            Act { from: 80, to: 100, label: "Payoff" },
        ],
        beats: &[
            Beat { id: "hook", label: "Hook / Image", pct: 0 },
            Beat { id: "problem", label: "Problem / Disruption", pct: 15 },
            Beat { id: "complication", label: "Complication / Escalate", pct: 40 },
            Beat { id: "turn", label: "Turn / Reveal", pct: 65 },
            Beat { id: "resolution", label: "Resolution", pct: 90 },
        ],
    },
    StructureTemplate {
        id: "heros-journey",
        label: "Hero's Journey (Campbell/Vogler)",
        acts: &[
            Act { from: 0, to: 33, label: "Departure" },
            Act { from: 33, to: 66, label: "Initiation" },
            Act { from: 66, to: 100, label: "Return" },
        ],
        beats: &[
            Beat { id: "ordinary-world", label: "Ordinary World", pct: 0 },
            Beat { id: "call-to-adventure", label: "Call to Adventure", pct: 10 },
            Beat { id: "refusal", label: "Refusal of the Call", pct: 15 },
            Beat { id: "mentor", label: "Meeting the Mentor", pct: 20 },
            Beat { id: "crossing", label: "Crossing the Threshold", pct: 25 },
            Beat { id: "tests-allies-enemies", label: "Tests, Allies, Enemies", pct: 40 },
            Beat { id: "approach", label: "Approach to the Inmost Cave", pct: 55 },
            Beat { id: "ordeal", label: "Ordeal / Death & Rebirth", pct: 65 },
            Beat { id: "reward", label: "Reward (Seizing the Sword)", pct: 75 },
            Beat { id: "road-back", label: "The Road Back", pct: 85 },
            Beat { id: "resurrection", label: "Resurrection", pct: 92 },
            Beat { id: "return-elixir", label: "Return with the Elixir", pct: 100 },
        ],
    },
    // 5-act (Shakespearean)
    StructureTemplate {
        id: "5-act",
        label: "5-Act (Shakespearean)",
        acts: &[
            Act { from: 0, to: 20, label: "Act I - Exposition" },
            Act { from: 20, to: 40, label: "Act II - Rising Action" },
            Act { from: 40, to: 60, label: "Act III - Climax" },
            Act { from: 60, to: 80, label: "Act IV - Falling Action" },
            Act { from: 80, to: 100, label: "Act V - Denouement" },
        ],
        beats: &[
            Beat { id: "introduction", label: "Introduction", pct: 5 },
            Beat { id: "inciting", label: "Inciting Incident", pct: 15 },
            Beat { id: "rising", label: "Rising Complications", pct: 35 },
            Beat { id: "climax", label: "Climax", pct: 50 },
            Beat { id: "falling", label: "Falling Action", pct: 70 },
            Beat { id: "resolution", label: "Resolution", pct: 90 },
        ],
    },
    // eight-sequence film
    StructureTemplate {
        id: "mini-movie",
        label: "Mini-Movie (8 Sequence Film)",
        acts: &[
            Act { from: 0, to: 25, label: "Act I" },
            Act { from: 25, to: 75, label: "Act II" },
            Act { from: 75, to: 100, label: "Act III" },
        ],
        beats: &[
            Beat { id: "seq1", label: "Sequence 1: Setup", pct: 0 },
            Beat { id: "seq2", label: "Sequence 2: Predicament", pct: 12 },
            Beat { id: "seq3", label: "Sequence 3: First Obstacle", pct: 25 },
            Beat { id: "seq4", label: "Sequence 4: Midpoint Shift", pct: 37 },
            Beat { id: "seq5", label: "Sequence 5: Pressure Mounts", pct: 50 },
            Beat { id: "seq6", label: "Sequence 6: Disaster", pct: 62 },
            Beat { id: "seq7", label: "Sequence 7: Climax Build", pct: 80 },
            Beat { id: "seq8", label: "Sequence 8: Resolution", pct: 95 },
        ],
    },
    StructureTemplate {
        id: "web-series",
        label: "Web Series (Serialized Arc)",
        acts: &[
            Act { from: 0, to: 33, label: "Episode 1-3: Setup" },
            Act { from: 33, to: 66, label: "Episode 4-7: Escalation" },
            Act { from: 66, to: 100, label: "Episode 8-10: Payoff" },
        ],
        beats: &[
            Beat { id: "pilot-hook", label: "Pilot Hook", pct: 0 },
            Beat { id: "inciting", label: "Inciting Incident", pct: 10 },
            Beat { id: "first-turn", label: "First Turn / Reveal", pct: 30 },
            Beat { id: "mid-arc", label: "Mid-Season Shift", pct: 50 },
            Beat { id: "dark-turn", label: "Dark Turn / Betrayal", pct: 70 },
            Beat { id: "cliffhanger", label: "Finale / Cliffhanger", pct: 90 },
        ],
    },
    StructureTemplate {
        id: "experimental",
        label: "Experimental (Abstract Flow)",
        acts: &[
            Act { from: 0, to: 50, label: "Exploration" },
            Act { from: 50, to: 100, label: "Transformation" },
        ],
        beats: &[
            Beat { id: "image", label: "Image or Tone Introduction", pct: 0 },
            Beat { id: "gesture", label: "First Gesture / Motif", pct: 20 },
            Beat { id: "shift", label: "Emotional / Visual Shift", pct: 45 },
            Beat { id: "rupture", label: "Rupture / Climax", pct: 70 },
            Beat { id: "echo", label: "Echo / Recontextualization", pct: 90 },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_falls_back_to_default() {
        assert_eq!(by_id("save-the-cat").id, "save-the-cat");
        assert_eq!(by_id("no-such-template").id, DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn test_template_ids_unique() {
        for (i, t) in all().iter().enumerate() {
            assert!(
                all().iter().skip(i + 1).all(|u| u.id != t.id),
                "duplicate template id {}",
                t.id
            );
        }
    }

    #[test]
    fn test_acts_cover_timeline() {
        for t in all() {
            assert_eq!(t.acts.first().map(|a| a.from), Some(0), "{}", t.id);
            assert_eq!(t.acts.last().map(|a| a.to), Some(100), "{}", t.id);
            for pair in t.acts.windows(2) {
                assert_eq!(pair[0].to, pair[1].from, "{}", t.id);
            }
        }
    }

    #[test]
    fn test_beats_sorted_and_in_range() {
        for t in all() {
            for pair in t.beats.windows(2) {
                assert!(pair[0].pct <= pair[1].pct, "{}", t.id);
            }
            assert!(t.beats.iter().all(|b| b.pct <= 100), "{}", t.id);
        }
    }

    #[test]
    fn test_act_at_boundaries() {
        let t = by_id("3-act");
        assert_eq!(t.act_at(0).map(|a| a.label), Some("Act I"));
        assert_eq!(t.act_at(25).map(|a| a.label), Some("Act II"));
        assert_eq!(t.act_at(100).map(|a| a.label), Some("Act III"));
    }

    #[test]
    fn test_nearest_beat_prefers_earlier_on_tie() {
        let t = by_id("story-circle");
        // 18 is 6 away from "2. Need" (12) and 7 from "3. Go" (25)
        assert_eq!(t.nearest_beat(18).map(|b| b.id), Some("2-need"));
        // 50 hits "5. Find" exactly
        assert_eq!(t.nearest_beat(50).map(|b| b.id), Some("5-find"));
    }

    #[test]
    fn test_anchor_vocabulary_present_in_default() {
        // ids the importer's beat markers map to
        let t = by_id(DEFAULT_TEMPLATE_ID);
        for id in ["inciting-incident", "break-into-2", "midpoint", "break-into-3", "finale"] {
            assert!(t.beat(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn test_template_serializes() {
        let json = serde_json::to_value(by_id("short-film")).unwrap();
        assert_eq!(json["id"], "short-film");
        assert_eq!(json["beats"][0]["pct"], 0);
    }
}
