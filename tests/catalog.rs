// Dataset invariants for the built-in project catalog.
// Native-friendly: no wasm/browser APIs are touched.

use std::collections::HashSet;

use portfolio_fx::{PROJECTS, ProjectCatalog};

#[test]
fn project_ids_are_unique_and_slug_shaped() {
    let mut seen = HashSet::new();
    for p in PROJECTS {
        assert!(seen.insert(p.id), "duplicate project id '{}'", p.id);
        assert!(!p.id.is_empty());
        for c in p.id.chars() {
            assert!(c.is_ascii_lowercase() || c == '-', "invalid char '{}' in id '{}'", c, p.id);
        }
    }
}

#[test]
fn every_record_is_fully_populated() {
    for p in PROJECTS {
        assert!(!p.title.is_empty(), "empty title for '{}'", p.id);
        assert!(!p.description.is_empty(), "empty description for '{}'", p.id);
        assert!(!p.challenges.is_empty() && !p.solutions.is_empty(), "missing write-up for '{}'", p.id);
        assert!(!p.features.is_empty(), "no features for '{}'", p.id);
        assert!(!p.tech_stack.is_empty(), "no tech stack for '{}'", p.id);
    }
}

#[test]
fn catalog_indexes_every_page_project() {
    let catalog = ProjectCatalog::builtin();
    assert_eq!(catalog.len(), 16);
    for id in [
        "life-number", "snake", "sorting", "timetable", "rock-paper-scissors", "gesture", "face-cursor", "weather",
        "sspl", "rotation", "mouse-gesture", "tumor", "clipperboard", "lan", "neural", "progress",
    ] {
        assert!(catalog.get(id).is_some(), "'{}' missing from catalog", id);
    }
}

#[test]
fn rock_paper_scissors_lists_five_features() {
    let rps = ProjectCatalog::builtin().get("rock-paper-scissors").unwrap();
    assert_eq!(rps.features.len(), 5);
    assert_eq!(rps.features.last(), Some(&"Speed control (fast/slow) and restart button"));
}

#[test]
fn catalog_json_round_trips_ids_in_order() {
    let json = portfolio_fx::project_catalog_json().unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    let ids: Vec<&str> = parsed.iter().map(|v| v["id"].as_str().unwrap()).collect();
    let expected: Vec<&str> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}
