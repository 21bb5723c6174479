//! Core SkillStore implementation

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Result, SkillError};

/// Ordered name -> template mapping
///
/// Serializes as a flat JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    entries: Vec<(String, String)>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert or replace; a replaced entry keeps its position
    pub fn insert(&mut self, name: impl Into<String>, template: impl Into<String>) -> Option<String> {
        let name = name.into();
        let template = template.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, template)),
            None => {
                self.entries.push((name, template));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, template)| (name.as_str(), template.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

impl Serialize for SkillSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, template) in &self.entries {
            map.serialize_entry(name, template)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SkillSetVisitor;

        impl<'de> Visitor<'de> for SkillSetVisitor {
            type Value = SkillSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping skill names to template strings")
            }

            // Repeated keys: last value wins, first position is kept
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<SkillSet, A::Error> {
                let mut skills = SkillSet::new();
                while let Some((name, template)) = access.next_entry::<String, String>()? {
                    skills.insert(name, template);
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(SkillSetVisitor)
    }
}

/// Read a skills document. A missing file is an empty set.
pub fn load(path: impl AsRef<Path>) -> Result<SkillSet> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(?path, "No skills file, starting empty");
            return Ok(SkillSet::new());
        }
        Err(e) => return Err(SkillError::storage(path, e)),
    };

    let skills: SkillSet = serde_json::from_str(&content).map_err(|e| SkillError::storage(path, e))?;
    debug!(?path, count = skills.len(), "Loaded skills");
    Ok(skills)
}

/// Write a skills document by replacing the file atomically.
///
/// The JSON goes to a temp file in the target's directory which is then
/// renamed over the target, so readers never observe a partial write.
pub fn save(path: impl AsRef<Path>, skills: &SkillSet) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut content = serde_json::to_string_pretty(skills).map_err(|e| SkillError::storage(path, e))?;
    content.push('\n');

    fs::create_dir_all(dir).map_err(|e| SkillError::storage(path, e))?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SkillError::storage(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| SkillError::storage(path, e))?;
    tmp.persist(path).map_err(|e| SkillError::storage(path, e))?;

    debug!(?path, count = skills.len(), "Saved skills");
    Ok(())
}

/// Durable CRUD over the skills document
///
/// Every mutation is written through immediately. When a write fails the
/// in-memory change is kept, the store is marked dirty and the error is
/// returned; `flush` retries the write.
#[derive(Debug)]
pub struct SkillStore {
    path: PathBuf,
    skills: SkillSet,
    dirty: bool,
}

impl SkillStore {
    /// Open the store backed by the given file, loading it if present
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let skills = load(&path)?;
        debug!(?path, "Opened skill store");
        Ok(Self {
            path,
            skills,
            dirty: false,
        })
    }

    /// Create a new skill; names are unique and immutable
    pub fn add(&mut self, name: &str, template: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(SkillError::InvalidName);
        }
        if self.skills.contains(name) {
            return Err(SkillError::DuplicateName(name.to_string()));
        }

        self.skills.insert(name, template);
        info!(name, "Added skill");
        self.persist()
    }

    /// Replace the template of an existing skill
    pub fn update(&mut self, name: &str, template: &str) -> Result<()> {
        if !self.skills.contains(name) {
            return Err(SkillError::NotFound(name.to_string()));
        }

        self.skills.insert(name, template);
        info!(name, "Updated skill");
        self.persist()
    }

    /// Remove a skill
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.skills.remove(name).is_none() {
            return Err(SkillError::NotFound(name.to_string()));
        }

        info!(name, "Deleted skill");
        self.persist()
    }

    /// Retry a write that failed earlier. No-op when the file is current.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        warn!(path = ?self.path, "Flushing skills after an earlier failed save");
        self.persist()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.skills.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.skills.names()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the in-memory set is ahead of the file
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn persist(&mut self) -> Result<()> {
        let result = save(&self.path, &self.skills);
        self.dirty = result.is_err();
        result
    }
}
