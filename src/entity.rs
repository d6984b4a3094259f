//! Named catalog entries.
//!
//! Provides `EntityId`, an interned identifier, `Entity<T>`, a raw record
//! wrapped with its display label and retrieval strings, and `Table<T>`, an
//! ordered collection with O(1) lookup by identifier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

/// Interned canonical identifier of a catalog record.
///
/// Uses `Arc<str>` so copies of configurations that reference the same
/// record share one allocation.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::EntityId;
///
/// let a = EntityId::new("earthquake");
/// let b: EntityId = "earthquake".into();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "earthquake");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntityId(Arc<str>);

impl EntityId {
    /// Create an identifier from a string slice.
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EntityId::from(s))
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw record together with the names used to show and find it.
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<T> {
    id: EntityId,
    label: String,
    retrieval: Vec<String>,
    data: T,
}

impl<T> Entity<T> {
    /// Wrap a record.
    pub fn new(id: impl Into<EntityId>, label: impl Into<String>, retrieval: Vec<String>, data: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            retrieval,
            data,
        }
    }

    /// Canonical identifier.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Display label, unique within its table.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Strings a query is prefix-matched against.
    pub fn retrieval(&self) -> &[String] {
        &self.retrieval
    }

    /// The raw record.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Whether any retrieval string starts with `query`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dmgcalc::Entity;
    ///
    /// let e = Entity::new("flamethrower", "Flamethrower", vec!["kaenhousha".into()], ());
    /// assert!(e.matches("kaen"));
    /// assert!(!e.matches("hou"));
    /// ```
    pub fn matches(&self, query: &str) -> bool {
        self.retrieval.iter().any(|name| name.starts_with(query))
    }
}

/// An ordered table of entities keyed by identifier.
///
/// Iteration follows load order, which is also the order candidates are
/// presented in during disambiguation.
#[derive(Debug, Clone)]
pub struct Table<T> {
    entries: Vec<Entity<T>>,
    index: HashMap<EntityId, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Table<T> {
    /// Build a table, de-duplicating display labels.
    ///
    /// Every entry whose label is shared with another entry gets its
    /// identifier appended in parentheses. A later entry with an
    /// identifier already present replaces the earlier one.
    pub fn from_entries(entries: Vec<Entity<T>>) -> Self {
        let mut label_counts: HashMap<String, usize> = HashMap::new();
        for entry in &entries {
            *label_counts.entry(entry.label.clone()).or_insert(0) += 1;
        }

        let mut table = Self::default();
        for mut entry in entries {
            if label_counts.get(&entry.label).copied().unwrap_or(0) > 1 {
                entry.label = format!("{}({})", entry.label, entry.id);
            }
            match table.index.get(&entry.id) {
                Some(&pos) => table.entries[pos] = entry,
                None => {
                    table.index.insert(entry.id.clone(), table.entries.len());
                    table.entries.push(entry);
                }
            }
        }
        table
    }

    /// Look up an entity by canonical identifier.
    pub fn get(&self, id: &str) -> Option<&Entity<T>> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Iterate in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity<T>> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, label: &str) -> Entity<()> {
        Entity::new(id, label, vec![id.to_string()], ())
    }

    #[test]
    fn test_entity_id_creation() {
        let a = EntityId::new("sun");
        let b = EntityId::from(String::from("sun"));
        assert_eq!(a, b);
        assert!(a == "sun");
    }

    #[test]
    fn test_duplicate_labels_get_identifier() {
        let table = Table::from_entries(vec![
            entity("rotom", "Rotom"),
            entity("rotom-wash", "Rotom"),
            entity("pikachu", "Pikachu"),
        ]);
        assert_eq!(table.get("rotom").unwrap().label(), "Rotom(rotom)");
        assert_eq!(table.get("rotom-wash").unwrap().label(), "Rotom(rotom-wash)");
        assert_eq!(table.get("pikachu").unwrap().label(), "Pikachu");
    }

    #[test]
    fn test_table_keeps_load_order() {
        let table = Table::from_entries(vec![entity("b", "B"), entity("a", "A")]);
        let ids: Vec<_> = table.iter().map(|e| e.id().as_str().to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(table.len(), 2);
        assert!(table.get("c").is_none());
    }

    #[test]
    fn test_matches_any_retrieval_string() {
        let e = Entity::new("x", "X", vec!["alpha".into(), "beta".into()], ());
        assert!(e.matches("be"));
        assert!(e.matches(""));
        assert!(!e.matches("gamma"));
    }
}
