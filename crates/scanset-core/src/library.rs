//! Libraries, their names and the reference set.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A case-insensitive library name.
///
/// Equality, hashing and ordering use the lowercased form; [`fmt::Display`]
/// keeps the spelling the name was created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LibraryName {
    original: String,
    key: String,
}

impl LibraryName {
    pub fn new(name: impl Into<String>) -> Self {
        let original = name.into();
        let key = original.to_lowercase();
        Self { original, key }
    }

    /// The name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The normalized comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for LibraryName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for LibraryName {}

impl Hash for LibraryName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for LibraryName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LibraryName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl From<String> for LibraryName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for LibraryName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<LibraryName> for String {
    fn from(name: LibraryName) -> Self {
        name.original
    }
}

/// Classification tag carried by a library in the dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LibraryKind {
    /// A project built as part of the application.
    Project,
    /// A package restored from a feed.
    Package,
    /// A plain assembly reference.
    Reference,
    /// A platform runtime pack.
    RuntimePack,
    #[default]
    Unknown,
    Other(String),
}

impl LibraryKind {
    /// Parse a manifest `type` string. Matching is case-insensitive.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "project" => LibraryKind::Project,
            "package" => LibraryKind::Package,
            "reference" | "referenceassembly" => LibraryKind::Reference,
            "runtimepack" => LibraryKind::RuntimePack,
            "" | "unknown" => LibraryKind::Unknown,
            _ => LibraryKind::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LibraryKind::Project => "project",
            LibraryKind::Package => "package",
            LibraryKind::Reference => "reference",
            LibraryKind::RuntimePack => "runtimepack",
            LibraryKind::Unknown => "unknown",
            LibraryKind::Other(s) => s,
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LibraryKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<LibraryKind> for String {
    fn from(kind: LibraryKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A named unit in a dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: LibraryName,
    #[serde(default)]
    pub kind: LibraryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Declared dependency names, in declaration order. They need not name
    /// libraries that are part of the same manifest.
    #[serde(default)]
    pub dependencies: Vec<LibraryName>,
}

impl Library {
    pub fn new<I, S>(name: impl Into<String>, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: LibraryName::new(name),
            kind: LibraryKind::Unknown,
            version: None,
            dependencies: dependencies
                .into_iter()
                .map(LibraryName::new)
                .collect(),
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}/{}", self.name, v),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The seed set of library names whose transitive dependents are of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    names: HashSet<LibraryName>,
}

impl ReferenceSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(LibraryName::new).collect()
    }

    pub fn contains(&self, name: &LibraryName) -> bool {
        self.names.contains(name)
    }

    pub fn contains_str(&self, name: &str) -> bool {
        self.names.contains(&LibraryName::new(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LibraryName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<LibraryName> for ReferenceSet {
    fn from_iter<T: IntoIterator<Item = LibraryName>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
