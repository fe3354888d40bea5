use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named group of key-value pairs introduced by a `[name]` header line.
///
/// Keys keep the order they first appeared in; assigning an existing key
/// again overwrites the value without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    /// Fetch the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All keys of this section in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All key-value pairs of this section in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a value, overwriting any previous assignment of the key.
    /// The key keeps its original position when overwritten.
    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

/// The parsed form of an INI source: an insertion-ordered collection of
/// uniquely named sections.
///
/// A document is populated by a single parse and read-only afterwards, so a
/// fully parsed document can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Fetch the value stored under `key` in `section`. Returns `None` when
    /// either the section or the key does not exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    /// Fetch a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// All section names in the order they first appeared
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// All sections with their names, in the order they first appeared
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// All keys of `section` in insertion order, or `None` when the section
    /// does not exist
    pub fn keys(&self, section: &str) -> Option<impl Iterator<Item = &str>> {
        self.sections.get(section).map(Section::keys)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Open the named section, creating it if this is its first appearance.
    /// Re-opening keeps the section's position and existing entries.
    pub(crate) fn open_section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }
}

impl fmt::Display for Document {
    /// Renders the document back to INI text, one `[name]` block per section
    /// followed by a single blank line. The output parses back into an equal
    /// document; comments and blank lines of the original source are gone.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, section) in &self.sections {
            writeln!(f, "[{name}]")?;
            for (key, value) in section.iter() {
                writeln!(f, "{key} = {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
