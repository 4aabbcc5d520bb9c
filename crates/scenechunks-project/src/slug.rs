//! Scene heading slugs.
//!
//! A slug is the structured form of a heading line: setting prefix,
//! location, time of day. Parsing is forgiving; anything that does not
//! look like a standard heading becomes an interior location with a
//! default time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading prefixes, longest first so `INT./EXT.` wins over `INT.`.
const PREFIXES: &[&str] = &["INT./EXT.", "INT/EXT.", "EST.", "INT.", "EXT."];

/// Time-of-day words a heading likes to end on.
const TIME_WORDS: &[&str] = &[
    "DAY",
    "NIGHT",
    "LATER",
    "MORNING",
    "AFTERNOON",
    "EVENING",
    "CONTINUOUS",
    "DAWN",
    "DUSK",
];

/// Structured scene heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSlug {
    pub int_ext: String,
    pub location: String,
    pub time_of_day: String,
}

impl Default for SceneSlug {
    fn default() -> Self {
        SceneSlug {
            int_ext: "INT.".to_string(),
            location: String::new(),
            time_of_day: "DAY".to_string(),
        }
    }
}

impl fmt::Display for SceneSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "{} - {}", self.int_ext, self.time_of_day)
        } else {
            write!(f, "{} {} - {}", self.int_ext, self.location, self.time_of_day)
        }
    }
}

/// Parse a raw heading line into a slug.
pub fn parse_scene_heading(raw: &str) -> SceneSlug {
    let txt = raw.trim();

    if let Some((prefix, rest)) = split_prefix(txt) {
        let rest = rest.trim();
        let (middle, tail) = match rest.split_once(" - ") {
            Some((m, t)) => (m.trim().to_uppercase(), t.trim().to_uppercase()),
            None => (rest.to_uppercase(), String::new()),
        };

        // extra dashes in the tail, e.g. "BAR AREA - AFTERNOON"
        if tail.contains(" - ") {
            let parts: Vec<&str> = tail
                .split(" - ")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            if let Some((last, init)) = parts.split_last()
                && TIME_WORDS.contains(last)
            {
                let extra = init.join(" - ");
                let location = if extra.is_empty() {
                    middle
                } else {
                    format!("{middle} - {extra}")
                };
                return SceneSlug {
                    int_ext: prefix,
                    location,
                    time_of_day: (*last).to_string(),
                };
            }
        }

        return SceneSlug {
            int_ext: prefix,
            location: middle,
            time_of_day: if tail.is_empty() { "DAY".to_string() } else { tail },
        };
    }

    // no recognized prefix: a single dash still splits location/time
    let parts: Vec<&str> = txt.split(" - ").collect();
    if parts.len() == 2 {
        return SceneSlug {
            location: parts[0].to_uppercase(),
            time_of_day: parts[1].to_uppercase(),
            ..Default::default()
        };
    }

    SceneSlug {
        location: txt.to_uppercase(),
        ..Default::default()
    }
}

fn split_prefix(txt: &str) -> Option<(String, &str)> {
    let upper = txt.to_uppercase();
    for prefix in PREFIXES {
        if upper.starts_with(prefix) {
            return Some((prefix.to_string(), &txt[prefix.len()..]));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_heading() {
        let slug = parse_scene_heading("INT. KITCHEN - DAY");
        assert_eq!(slug.int_ext, "INT.");
        assert_eq!(slug.location, "KITCHEN");
        assert_eq!(slug.time_of_day, "DAY");
    }

    #[test]
    fn test_missing_time_defaults_to_day() {
        let slug = parse_scene_heading("EXT. OPEN FIELD");
        assert_eq!(slug.location, "OPEN FIELD");
        assert_eq!(slug.time_of_day, "DAY");
    }

    #[test]
    fn test_compound_prefix_wins() {
        let slug = parse_scene_heading("INT./EXT. CAR - NIGHT");
        assert_eq!(slug.int_ext, "INT./EXT.");
        assert_eq!(slug.location, "CAR");
    }

    #[test]
    fn test_extra_dash_folds_into_location() {
        let slug = parse_scene_heading("INT. HOTEL - BAR AREA - AFTERNOON");
        assert_eq!(slug.location, "HOTEL - BAR AREA");
        assert_eq!(slug.time_of_day, "AFTERNOON");
    }

    #[test]
    fn test_extra_dash_without_time_word_stays_in_time() {
        let slug = parse_scene_heading("INT. HOTEL - BAR - ANNEX");
        // last segment is not a time word, tail kept whole
        assert_eq!(slug.location, "HOTEL");
        assert_eq!(slug.time_of_day, "BAR - ANNEX");
    }

    #[test]
    fn test_unprefixed_heading_fallbacks() {
        let slug = parse_scene_heading("rooftop - night");
        assert_eq!(slug.int_ext, "INT.");
        assert_eq!(slug.location, "ROOFTOP");
        assert_eq!(slug.time_of_day, "NIGHT");

        let slug = parse_scene_heading("the void");
        assert_eq!(slug.location, "THE VOID");
        assert_eq!(slug.time_of_day, "DAY");
    }

    #[test]
    fn test_display_round_trip_shape() {
        let slug = parse_scene_heading("INT. KITCHEN - DAY");
        assert_eq!(slug.to_string(), "INT. KITCHEN - DAY");
    }
}
