//! End-to-end import tests.
//!
//! Exercises the full pipeline (parse, finalize into a project,
//! assemble back to text) on realistic screenplay fragments.

use scenechunks::import::{parse, parse_with_hints};
use scenechunks::project::ProjectFile;
use scenechunks::{Block, ImportHints, Severity, WarningKind};

mod properties {
    use super::*;

    #[test]
    fn test_scene_order_preserved() {
        let input = "INT. A - DAY\nOne.\n\nEXT. B - NIGHT\nTwo.\n\nINT. C - DAY\nThree.\n";
        let result = parse(input);
        let titles: Vec<&str> = result
            .document
            .scenes
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, ["INT. A - DAY", "EXT. B - NIGHT", "INT. C - DAY"]);
    }

    #[test]
    fn test_character_not_duplicated_by_action_mention() {
        let input = "INT. HALL - DAY\nJOHN\nHello.\n\nJOHN paces. JOHN shouts.\n";
        let result = parse(input);
        assert_eq!(result.document.scenes[0].characters, ["JOHN"]);
    }

    #[test]
    fn test_hint_override_beats_capitalization() {
        let hints = ImportHints::new().with_character("mumbles");
        let input = "INT. HALL - DAY\nmumbles\nI can't say it loudly.\n";
        let result = parse_with_hints(input, &hints);
        assert_eq!(
            result.document.scenes[0].body,
            [Block::dialogue("mumbles", "", "I can't say it loudly.")]
        );
    }

    #[test]
    fn test_transition_before_heading_never_lands_in_previous_body() {
        let input = "INT. A - DAY\nHe leaves.\n\nCUT TO:\n\nINT. B - DAY\nHe arrives.\n";
        let result = parse(input);
        let scenes = &result.document.scenes;
        assert_eq!(scenes[0].body, [Block::action("He leaves.")]);
        assert_eq!(scenes[1].transition, "CUT TO:");
        assert!(scenes[1].body.iter().all(|b| b.text() != Some("CUT TO:")));
    }

    #[test]
    fn test_blank_separated_action_merges_with_blank_line() {
        let input = "INT. A - DAY\nFirst paragraph.\n\nSecond paragraph.\n";
        let result = parse(input);
        assert_eq!(
            result.document.scenes[0].body,
            [Block::action("First paragraph.\n\nSecond paragraph.")]
        );
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_kitchen_scene() {
        let result = parse("INT. KITCHEN - DAY\nJOHN walks in.\n\nJOHN\nHello.\n");
        let scene = &result.document.scenes[0];
        assert_eq!(scene.title, "INT. KITCHEN - DAY");
        assert_eq!(
            scene.body,
            [
                Block::action("JOHN walks in."),
                Block::dialogue("JOHN", "", "Hello."),
            ]
        );
        assert_eq!(scene.characters, ["JOHN"]);
    }

    #[test]
    fn test_leading_transition_attaches_to_first_scene() {
        let result = parse("CUT TO:\nINT. BAR - NIGHT\n");
        let scenes = &result.document.scenes;
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].title, "INT. BAR - NIGHT");
        assert_eq!(scenes[0].transition, "CUT TO:");
        assert!(scenes[0].body.is_empty());
    }

    #[test]
    fn test_prop_over_collection_is_literal() {
        let result = parse("INT. ROOM - DAY\nSHE grabs the KNIFE from the drawer.\n");
        let scene = &result.document.scenes[0];
        assert!(scene.characters.is_empty());
        // permissive heuristic: both caps tokens land in props
        assert_eq!(scene.props, ["SHE", "KNIFE"]);
    }

    #[test]
    fn test_hinted_indent_window() {
        let hints = ImportHints::new()
            .with_character("DETECTIVE")
            .with_character_indent(3);
        let input = concat!(
            "INT. STATION - NIGHT\n",
            "   DETECTIVE\n",
            "Talk.\n",
            "\n",
            "           AVA\n", // 11 columns, inside the window
            "Never.\n",
            "\n",
            "                    SIRENS WAIL\n", // 20 columns, outside
        );
        let result = parse_with_hints(input, &hints);
        let scene = &result.document.scenes[0];
        assert_eq!(
            scene.body,
            [
                Block::dialogue("DETECTIVE", "", "Talk."),
                Block::dialogue("AVA", "", "Never."),
                Block::action("SIRENS WAIL"),
            ]
        );
        assert_eq!(scene.characters, ["DETECTIVE", "AVA"]);
    }

    #[test]
    fn test_consecutive_action_lines_space_joined() {
        let result = parse("INT. ROOM - DAY\nHe sat down.\nHe sighed.\n");
        assert_eq!(
            result.document.scenes[0].body,
            [Block::action("He sat down. He sighed.")]
        );
    }
}

mod warnings {
    use super::*;

    #[test]
    fn test_headingless_text_is_rescued_with_warning() {
        let result = parse("He runs through the rain.\n\nHe stops.\n");
        let scenes = &result.document.scenes;
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].title, "UNTITLED SCENE");
        assert_eq!(
            scenes[0].body,
            [Block::action("He runs through the rain.\n\nHe stops.")]
        );
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w.kind, WarningKind::FallbackScene) && w.severity == Severity::Minor));
    }

    #[test]
    fn test_unknown_beat_marker_warns_and_keeps_note() {
        let result = parse("INT. HALL - DAY\n[[the confusing bit]]\nHe waits.\n");
        let scene = &result.document.scenes[0];
        assert_eq!(scene.anchor_role, None);
        assert_eq!(scene.notes, "the confusing bit");
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w.kind, WarningKind::UnrecognizedBeat(_))));
    }

    #[test]
    fn test_known_beat_marker_sets_anchor_silently() {
        let result = parse("INT. HALL - DAY\n[[MIDPOINT]]\nHe turns.\n");
        let scene = &result.document.scenes[0];
        assert_eq!(scene.anchor_role.as_deref(), Some("midpoint"));
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_blank_input_warns_empty() {
        let result = parse("\n   \n\n");
        assert!(result.document.scenes.is_empty());
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w.kind, WarningKind::EmptyDocument)));
    }
}

mod finalize {
    use super::*;

    #[test]
    fn test_import_to_project_to_assembled_text() {
        let hints = ImportHints::new()
            .with_title("THE LONG NIGHT")
            .with_author("Jane Doe");
        let input = concat!(
            "THE LONG NIGHT\n",
            "Jane Doe\n",
            "\n",
            "INT. KITCHEN - DAY\n",
            "JOHN walks in.\n",
            "\n",
            "JOHN\n",
            "Hello.\n",
            "\n",
            "CUT TO:\n",
            "\n",
            "EXT. YARD - NIGHT\n",
            "Rain falls.\n",
        );
        let result = parse_with_hints(input, &hints);

        let mut project = ProjectFile::new("Untitled Project");
        project.apply_import(&result.document).unwrap();

        assert_eq!(project.project.title, "THE LONG NIGHT");
        assert_eq!(project.project.meta.author, "Jane Doe");

        let script = project.active_script().unwrap();
        let chunks = project.chunks_in_order(script);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].title, "INT. KITCHEN - DAY");
        assert_eq!(chunks[1].title, "EXT. YARD - NIGHT");
        assert!(chunks.iter().all(|c| c.est_page_length > 0.0));

        let text = scenechunks::project::assembled_active_script(&project).unwrap();
        assert!(text.starts_with("INT. KITCHEN - DAY\n\nJOHN walks in.\n"));
        assert!(text.contains("JOHN\n    Hello."));
        assert!(text.contains("EXT. YARD - NIGHT"));
    }

    #[test]
    fn test_anchor_roles_match_template_vocabulary() {
        let input = "INT. A - DAY\n[[INCITING INCIDENT]]\nGo.\n\nINT. B - DAY\n[[CLIMAX]]\nEnd.\n";
        let result = parse(input);
        let template = scenechunks::structure::by_id("3-act");
        for scene in &result.document.scenes {
            let role = scene.anchor_role.as_deref().unwrap();
            assert!(template.beat(role).is_some(), "no beat for {role}");
        }
    }
}
