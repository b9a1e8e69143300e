//! The fixed registry of trusted sources.
//!
//! Matching is case-insensitive substring containment in either direction,
//! so `"drik panchang (online)"` and `"Drik"` both match `"Drik Panchang"`.
//! Blank names never match.

use serde::{Deserialize, Serialize};

/// Canonical names of the trusted sources.
pub const TRUSTED_SOURCES: [&str; 12] = [
    "Encyclopaedia Britannica",
    "Jainworld.com",
    "Digital Jain Pathshala",
    "Jain Study Center",
    "Jain eLibrary",
    "The Jains by Paul Dundas",
    "Jainism: An Introduction by Jeffery D. Long",
    "The Heart of Jainism by Sinclair Stevenson",
    "Jaina Path of Purification by Padmanabh S. Jaini",
    "Tattvartha Sutra",
    "Drik Panchang",
    "Swiss Ephemeris",
];

/// Category of a cited source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Academic,
    JainInstitution,
    Panchang,
    ScholarlyWork,
}

/// A citation attached to content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedSource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed_date: Option<String>,
}

impl TrustedSource {
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            url: None,
            page: None,
            accessed_date: None,
        }
    }
}

/// Read-only view over [`TRUSTED_SOURCES`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrustedSourceRegistry;

impl TrustedSourceRegistry {
    pub fn entries(&self) -> &'static [&'static str] {
        &TRUSTED_SOURCES
    }

    /// The registry entry a declared name matches, if any.
    pub fn matching_entry(&self, name: &str) -> Option<&'static str> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        TRUSTED_SOURCES.iter().copied().find(|entry| {
            let entry = entry.to_lowercase();
            needle.contains(&entry) || entry.contains(&needle)
        })
    }

    pub fn is_trusted(&self, name: &str) -> bool {
        self.matching_entry(name).is_some()
    }

    /// The registry entry that `name` contains, case-insensitively.
    ///
    /// One-directional: a fragment of an entry name does not match.
    pub fn contains_entry(&self, name: &str) -> Option<&'static str> {
        let haystack = name.trim().to_lowercase();
        TRUSTED_SOURCES
            .iter()
            .copied()
            .find(|entry| haystack.contains(&entry.to_lowercase()))
    }
}
