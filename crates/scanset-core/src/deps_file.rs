//! Runtime dependency manifest (`*.deps.json`) parsing.
//!
//! The manifest lists every library loaded by an application under
//! `targets.<runtime target>` together with the names it depends on, and the
//! library type (`project`, `package`, ...) under `libraries`. Both sections
//! key their entries as `Name/Version`.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};

use scanset_util::errors::{ScansetError, ScansetResult};

use crate::library::{Library, LibraryKind, LibraryName};

/// A parsed `*.deps.json` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepsFile {
    #[serde(default)]
    pub runtime_target: Option<RuntimeTarget>,
    #[serde(default)]
    pub targets: Entries<Entries<Value>>,
    #[serde(default)]
    pub libraries: Map<String, Value>,
}

/// The `runtimeTarget` section naming the target to read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeTarget {
    #[serde(default)]
    pub name: Option<String>,
}

/// The members of a JSON object in document order.
///
/// Repeated keys are kept as separate entries.
#[derive(Debug, Clone)]
pub struct Entries<T>(Vec<(String, T)>);

impl<T> Entries<T> {
    /// The value of the first entry named `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Debug, Default, Deserialize)]
struct TargetEntry {
    #[serde(default)]
    dependencies: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct LibraryEntry {
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl DepsFile {
    /// Load and parse a deps file from the given path.
    pub fn from_path(path: &Path) -> ScansetResult<Self> {
        let content = scanset_util::fs::read_to_string(path).map_err(|e| ScansetError::DepsFile {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a deps file from a string.
    pub fn from_str(content: &str) -> ScansetResult<Self> {
        serde_json::from_str(content).map_err(|e| {
            ScansetError::DepsFile {
                message: format!("Failed to parse deps file: {e}"),
            }
            .into()
        })
    }

    /// Name of the target whose libraries are read.
    ///
    /// This is `runtimeTarget.name` when present, otherwise the first target.
    pub fn target_name(&self) -> Option<&str> {
        self.runtime_target
            .as_ref()
            .and_then(|rt| rt.name.as_deref())
            .or_else(|| self.targets.keys().next())
    }

    /// Flatten the selected target into libraries, in document order.
    ///
    /// Library names are not deduplicated here, not even repeated keys.
    pub fn to_libraries(&self) -> ScansetResult<Vec<Library>> {
        let Some(target_name) = self.target_name() else {
            return Ok(Vec::new());
        };
        let entries = self
            .targets
            .get(target_name)
            .ok_or_else(|| ScansetError::DepsFile {
                message: format!("Runtime target '{target_name}' not found in targets"),
            })?;

        let mut libraries = Vec::with_capacity(entries.len());
        for (key, value) in entries.iter() {
            let entry: TargetEntry =
                serde_json::from_value(value.clone()).map_err(|e| ScansetError::DepsFile {
                    message: format!("Invalid entry '{key}' in target '{target_name}': {e}"),
                })?;
            let (name, version) = split_key(key);
            let kind = self.kind_of(key);
            libraries.push(Library {
                name: LibraryName::new(name),
                kind,
                version: version.map(str::to_string),
                dependencies: entry
                    .dependencies
                    .keys()
                    .map(|d| LibraryName::new(d.as_str()))
                    .collect(),
            });
        }

        tracing::debug!(
            "read {} libraries from target '{target_name}'",
            libraries.len()
        );
        Ok(libraries)
    }

    fn kind_of(&self, key: &str) -> LibraryKind {
        self.libraries
            .get(key)
            .and_then(|v| serde_json::from_value::<LibraryEntry>(v.clone()).ok())
            .and_then(|e| e.kind)
            .map(|k| LibraryKind::parse(&k))
            .unwrap_or_default()
    }
}

/// Split a `Name/Version` key at its last `/`.
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.rsplit_once('/') {
        Some((name, version)) => (name, Some(version)),
        None => (key, None),
    }
}
