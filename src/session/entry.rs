//! Entry types shown in the browser list

use std::fmt;
use std::path::PathBuf;

/// One displayable line of the list, typically `KEY=VALUE`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    /// Create an entry from its display text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Create an entry from a key/value pair, joined as `KEY=VALUE`
    #[must_use]
    pub fn from_pair(key: &str, value: &str) -> Self {
        Self(format!("{key}={value}"))
    }

    /// Display text of the entry
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against the display text
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// All entries loaded at startup, in source order
///
/// Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: Vec<Entry>,
}

impl EntrySet {
    /// Create an entry set from an ordered list of entries
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in source order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Iterate entries in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<E: Into<Entry>> FromIterator<E> for EntrySet {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Where the entries of a session were loaded from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// The variables of the running process
    #[default]
    Environment,
    /// A dotenv-style file
    File(PathBuf),
}

impl SourceKind {
    /// Short label for list titles
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Environment => "Environment".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
