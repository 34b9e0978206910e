use serde::{Deserialize, Serialize};

/// Reference civilizations: short code and display title.
const DEFAULT_CIVS: [(&str, &str); 10] = [
    ("en", "English"),
    ("ru", "Rus"),
    ("ab", "Abbasid Dynasty"),
    ("hr", "Holy Roman Empire"),
    ("fr", "French"),
    ("ch", "Chinese"),
    ("de", "Delhi Sultanate"),
    ("ma", "Malians"),
    ("mo", "Mongols"),
    ("ot", "Ottomans"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivEntry {
    pub code: String,
    pub title: String,
}

/// Ordered mapping from civilization codes to display titles.
///
/// Only used for labelling and for resolving a title picked in a selector
/// back to its code; the heatmap itself is keyed by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivTable {
    entries: Vec<CivEntry>,
}

impl CivTable {
    pub fn new(entries: Vec<CivEntry>) -> Self {
        Self { entries }
    }

    pub fn title(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.title.as_str())
    }

    pub fn code_for_title(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.code.as_str())
    }

    /// Accepts either a code or a title.
    pub fn resolve(&self, code_or_title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code_or_title)
            .or_else(|| self.entries.iter().find(|e| e.title == code_or_title))
            .map(|e| e.code.as_str())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CivEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CivTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_CIVS
                .iter()
                .map(|(code, title)| CivEntry {
                    code: code.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        )
    }
}
