//! Static project metadata shown in the project modal.
//! Record text lives in `projects.rs`; this module only indexes it.

use serde::Serialize;

mod projects;

pub use projects::PROJECTS;

/// Descriptive record for one portfolio project (immutable, baked at build time).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str], // display order
    pub tech_stack: &'static [&'static str],
    pub challenges: &'static str,
    pub solutions: &'static str,
}

/// Lookup table from project id to record. Linear scan: the list is tiny.
#[derive(Clone, Copy, Debug)]
pub struct ProjectCatalog {
    records: &'static [ProjectRecord],
}

impl ProjectCatalog {
    pub const fn new(records: &'static [ProjectRecord]) -> Self {
        Self { records }
    }

    pub fn builtin() -> Self {
        Self::new(PROJECTS)
    }

    pub fn get(&self, id: &str) -> Option<&'static ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ProjectRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.records)
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.get("snake").map(|r| r.title), Some("Snake Game"));
        assert!(catalog.get("does-not-exist").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn json_export_uses_field_names() {
        let json = ProjectCatalog::builtin().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &parsed[0];
        assert_eq!(first["id"], "life-number");
        assert!(first["tech_stack"].is_array());
    }
}
