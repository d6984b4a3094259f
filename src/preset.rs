//! Named preset fragments.
//!
//! A preset maps a short key to a raw command fragment that the `p` token
//! expands in place. Keys are looked up by prefix and the prefix must
//! select exactly one key.

use crate::error::{CalcError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage for preset fragments.
pub trait PresetStore: Send {
    /// All `(key, fragment)` pairs.
    fn entries(&self) -> Result<Vec<(String, String)>>;

    /// Insert or replace a fragment.
    fn insert(&mut self, key: &str, fragment: &str) -> Result<()>;

    /// Remove the fragment stored under exactly `key`.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// The unique `(key, fragment)` whose key starts with `prefix`.
    ///
    /// Zero or several matches fail with `InvalidInput`.
    fn lookup(&self, prefix: &str) -> Result<(String, String)> {
        let mut matches: Vec<(String, String)> = self
            .entries()?
            .into_iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .collect();
        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(CalcError::InvalidInput(format!("no preset matches {prefix}"))),
            n => Err(CalcError::InvalidInput(format!("{n} presets match {prefix}"))),
        }
    }

    /// Remove the unique preset whose key starts with `prefix`, returning it.
    fn remove_prefix(&mut self, prefix: &str) -> Result<(String, String)> {
        let (key, fragment) = self.lookup(prefix)?;
        self.remove(&key)?;
        Ok((key, fragment))
    }
}

/// In-memory store, keeping insertion order.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::preset::{MemoryPresetStore, PresetStore};
///
/// let mut store = MemoryPresetStore::new();
/// store.insert("cs", "j sun").unwrap();
/// store.insert("tr", "j rain").unwrap();
/// assert_eq!(store.lookup("c").unwrap().1, "j sun");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPresetStore {
    entries: Vec<(String, String)>,
}

impl MemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresetStore for MemoryPresetStore {
    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(self.entries.clone())
    }

    fn insert(&mut self, key: &str, fragment: &str) -> Result<()> {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = fragment.to_string(),
            None => self.entries.push((key.to_string(), fragment.to_string())),
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.retain(|(k, _)| k != key);
        Ok(())
    }
}

/// Store backed by a JSON object file.
///
/// The file is read on every access and rewritten atomically (temp file
/// plus rename) on every change. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonPresetStore {
    path: PathBuf,
}

impl JsonPresetStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        let map = serde_json::from_str(&text)?;
        debug!(path = %self.path.display(), "presets loaded");
        Ok(map)
    }

    fn store(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, serde_json::to_string_pretty(map)?)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl PresetStore for JsonPresetStore {
    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(self.load()?.into_iter().collect())
    }

    fn insert(&mut self, key: &str, fragment: &str) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), fragment.to_string());
        self.store(&map)?;
        info!(key, fragment, "preset saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.load()?;
        if map.remove(key).is_some() {
            self.store(&map)?;
            info!(key, "preset deleted");
        }
        Ok(())
    }
}
