//! Language definitions for the bilingual order flow

use serde::{Deserialize, Serialize};

/// Languages the order flow understands.
///
/// Customers freely mix English and Tagalog ("Taglish") within a single
/// message, so the parser always scans vocabulary for every language here
/// rather than detecting one up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Tagalog,
}

impl Language {
    /// All supported languages, in the order vocabulary lists are scanned.
    pub const ALL: [Language; 2] = [Language::English, Language::Tagalog];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Tagalog => "tagalog",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
