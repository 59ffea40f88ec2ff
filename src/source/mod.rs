//! Entry sources
//!
//! The browser never reads the process environment or the file system
//! directly. It asks an `EntrySource` for an `EntrySet` once at startup.
//!
//! # Implementations
//!
//! - **`ProcessEnvironment`** - every variable of the running process
//! - **`DotenvFile`** - the pairs of a dotenv-style file, in file order
//! - **`StaticEntries`** - a fixed list, for tests and embedding
//!
//! # Examples
//!
//! ```no_run
//! use envlist::source::{DotenvFile, EntrySource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = DotenvFile::new(".env");
//! let entries = source.load()?;
//! for entry in &entries {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::LoadError;

use crate::session::{Entry, EntrySet, SourceKind};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplier of the initial entry set
pub trait EntrySource {
    /// Load all entries in source order
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the underlying data cannot be read or parsed.
    fn load(&self) -> Result<EntrySet, LoadError>;

    /// Label describing where the entries come from
    fn kind(&self) -> SourceKind;
}

/// Variables of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Create a process environment source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EntrySource for ProcessEnvironment {
    fn load(&self) -> Result<EntrySet, LoadError> {
        // vars() panics on non-UTF-8 data; convert lossily instead
        Ok(std::env::vars_os()
            .map(|(key, value)| {
                Entry::from_pair(&key.to_string_lossy(), &value.to_string_lossy())
            })
            .collect())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Environment
    }
}

/// Key/value pairs parsed from a dotenv-style file
///
/// Each key appears once. When a file assigns a key more than once the
/// entry sits where the key first appeared and holds the last value.
#[derive(Debug, Clone)]
pub struct DotenvFile {
    path: PathBuf,
}

impl DotenvFile {
    /// Create a source for the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: dotenvy::Error) -> LoadError {
        LoadError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

impl EntrySource for DotenvFile {
    fn load(&self) -> Result<EntrySet, LoadError> {
        let iter = dotenvy::from_path_iter(&self.path).map_err(|e| self.read_error(e))?;

        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut entries = Vec::new();
        for item in iter {
            let (key, value) = item.map_err(|e| self.read_error(e))?;
            let entry = Entry::from_pair(&key, &value);
            match positions.get(&key) {
                Some(&idx) => entries[idx] = entry,
                None => {
                    positions.insert(key, entries.len());
                    entries.push(entry);
                }
            }
        }

        tracing::debug!(path = %self.path.display(), count = entries.len(), "parsed env file");
        Ok(EntrySet::new(entries))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::File(self.path.clone())
    }
}

/// A fixed, already-known list of entries
#[derive(Debug, Clone, Default)]
pub struct StaticEntries {
    entries: Vec<Entry>,
    kind: SourceKind,
}

impl StaticEntries {
    /// Create a source yielding `entries`, labelled as the environment
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            kind: SourceKind::Environment,
        }
    }

    /// Override the source label
    #[must_use]
    pub fn with_kind(mut self, kind: SourceKind) -> Self {
        self.kind = kind;
        self
    }
}

impl EntrySource for StaticEntries {
    fn load(&self) -> Result<EntrySet, LoadError> {
        Ok(EntrySet::new(self.entries.clone()))
    }

    fn kind(&self) -> SourceKind {
        self.kind.clone()
    }
}

/// Pick the source for an optional file argument
///
/// No argument means the process environment.
#[must_use]
pub fn source_for(file: Option<&Path>) -> Box<dyn EntrySource> {
    match file {
        Some(path) => Box::new(DotenvFile::new(path)),
        None => Box::new(ProcessEnvironment::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn texts(entries: &EntrySet) -> Vec<&str> {
        entries.iter().map(Entry::as_str).collect()
    }

    #[test]
    fn test_dotenv_keeps_file_order() {
        let file = env_file("ZETA=last\nALPHA=first\n# comment\n\nMIDDLE=\"quoted value\"\n");
        let source = DotenvFile::new(file.path());

        let entries = source.load().unwrap();
        assert_eq!(
            texts(&entries),
            vec!["ZETA=last", "ALPHA=first", "MIDDLE=quoted value"]
        );
    }

    #[test]
    fn test_dotenv_duplicate_key_last_wins() {
        let file = env_file("A=1\nB=2\nA=3\n");
        let entries = DotenvFile::new(file.path()).load().unwrap();
        assert_eq!(texts(&entries), vec!["A=3", "B=2"]);
    }

    #[test]
    fn test_dotenv_kind_is_file() {
        let file = env_file("A=1\n");
        let source = DotenvFile::new(file.path());
        assert_eq!(source.kind(), SourceKind::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_dotenv_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.env");
        let err = DotenvFile::new(&path).load().unwrap_err();
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_dotenv_parse_error_fails() {
        let file = env_file("VALID=1\nthis line is not a pair\n");
        assert!(DotenvFile::new(file.path()).load().is_err());
    }

    #[test]
    fn test_process_environment_contains_known_variable() {
        let entries = ProcessEnvironment::new().load().unwrap();
        let expected: Vec<String> = std::env::vars()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        for text in &expected {
            assert!(texts(&entries).contains(&text.as_str()));
        }
        assert_eq!(ProcessEnvironment::new().kind(), SourceKind::Environment);
    }

    #[test]
    fn test_static_entries() {
        let source = StaticEntries::new(vec![Entry::new("A=1")])
            .with_kind(SourceKind::File(PathBuf::from("x.env")));
        assert_eq!(texts(&source.load().unwrap()), vec!["A=1"]);
        assert_eq!(source.kind().label(), "x.env");
    }

    #[test]
    fn test_source_for() {
        assert_eq!(source_for(None).kind(), SourceKind::Environment);
        assert_eq!(
            source_for(Some(Path::new("a.env"))).kind(),
            SourceKind::File(PathBuf::from("a.env"))
        );
    }
}
