// The markup builders import their data via `super::content`, so both
// modules are included side by side here.

#![allow(dead_code)]
mod content {
    include!("../src/core/content.rs");
}
mod markup {
    include!("../src/core/markup.rs");
}

use content::*;

#[test]
fn tracks_have_unique_ids_and_problems() {
    assert_eq!(TRACKS.len(), 5);
    for (i, track) in TRACKS.iter().enumerate() {
        assert!(!track.problems.is_empty(), "{} has no problems", track.id);
        for other in &TRACKS[i + 1..] {
            assert_ne!(track.id, other.id);
        }
    }
}

#[test]
fn track_colors_parse_as_hex() {
    for track in TRACKS {
        assert!(
            hex_to_rgb(track.color).is_some(),
            "bad color on {}: {}",
            track.id,
            track.color
        );
    }
}

#[test]
fn track_lookup_by_id() {
    let track = track_by_id("wireless").unwrap();
    assert_eq!(track.id, "wireless");
    assert!(track_by_id("nonexistent").is_none());
}

#[test]
fn hex_to_rgb_parses_and_rejects() {
    assert_eq!(hex_to_rgb("#0066ff"), Some((0, 102, 255)));
    assert_eq!(hex_to_rgb("#ffffff"), Some((255, 255, 255)));
    assert_eq!(hex_to_rgb("#000000"), Some((0, 0, 0)));
    assert_eq!(hex_to_rgb("0066ff"), Some((0, 102, 255)));
    assert_eq!(hex_to_rgb("#fff"), None);
    assert_eq!(hex_to_rgb("#zzzzzz"), None);
    assert_eq!(hex_to_rgb(""), None);
}

#[test]
fn nav_pages_cover_every_loader_target() {
    let ids: Vec<&str> = NAV_PAGES.iter().map(|p| p.id).collect();
    for required in ["home", "tracks", "timeline", "guidelines", "contact"] {
        assert!(ids.contains(&required), "missing nav page {required}");
    }
}

#[test]
fn home_shows_hero_and_every_highlight() {
    let html = markup::home_html();
    assert!(html.contains(SITE_TITLE));
    assert!(html.contains(SITE_SUBTITLE));
    assert!(html.contains(ORGANIZERS));
    for item in HOME_HIGHLIGHTS {
        assert!(html.contains(item), "missing highlight: {item}");
    }
}

#[test]
fn grid_renders_one_card_per_track() {
    let html = markup::tracks_grid_html();
    assert_eq!(html.matches(r#"id="track-card-"#).count(), TRACKS.len());
    for track in TRACKS {
        assert!(html.contains(track.title));
    }
    // Builders are pure over static tables.
    assert_eq!(html, markup::tracks_grid_html());
}

#[test]
fn track_modal_lists_every_problem() {
    for track in TRACKS {
        let html = markup::track_modal_html(track);
        assert!(html.contains(r#"id="modal-close""#));
        assert!(html.contains(track.title));
        for problem in track.problems {
            assert!(
                html.contains(problem.title),
                "{} modal missing problem {}",
                track.id,
                problem.title
            );
        }
    }
}

#[test]
fn registration_modal_shows_key_dates() {
    let html = markup::registration_modal_html();
    assert!(html.contains(REGISTRATION_DATES));
    assert!(html.contains(GRAND_DEMO_DATES));
    assert!(html.contains(r#"id="modal-close""#));
}

#[test]
fn timeline_covers_all_phases() {
    let html = markup::timeline_html();
    for phase in TIMELINE_PHASES {
        assert!(html.contains(phase.phase));
        assert!(html.contains(phase.dates));
        for round in phase.rounds {
            assert!(html.contains(round.round));
        }
    }
}

#[test]
fn guidelines_include_sections_and_awards() {
    let html = markup::guidelines_html();
    for section in GUIDELINE_SECTIONS {
        assert!(html.contains(section.title));
    }
    for award in AWARDS {
        assert!(html.contains(award.title));
        assert!(html.contains(award.prize));
    }
}

#[test]
fn contact_lists_every_card() {
    let html = markup::contact_html();
    for card in CONTACT_CARDS {
        assert!(html.contains(card.title));
        for (label, value) in card.items {
            assert!(html.contains(label) && html.contains(value));
        }
    }
}
