//! The entity catalog.
//!
//! Immutable tables of species, actions, abilities, affinities, items and
//! conditions, built once from a dataset document and shared read-only
//! afterwards (it is `Sync`, so concurrent evaluations borrow it freely).

use crate::entity::{Entity, EntityId, Table};
use crate::error::Result;
use crate::numeric::Effectiveness;
use crate::stats::StatBlock;
use crate::translit::Transliterator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Damage category of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No direct damage.
    #[default]
    Status,
    Physical,
    Special,
}

/// Which combatants an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    SpecificMove,
    SelectedPokemonMeFirst,
    Ally,
    UsersField,
    UserOrAlly,
    OpponentsField,
    User,
    RandomOpponent,
    AllOtherPokemon,
    #[default]
    SelectedPokemon,
    AllOpponents,
    EntireField,
    UserAndAllies,
    AllPokemon,
    AllAllies,
    FaintingPokemon,
    #[serde(other)]
    Other,
}

impl Target {
    /// Whether the action hits several combatants at once.
    pub fn is_spread(self) -> bool {
        matches!(self, Target::AllOtherPokemon | Target::AllOpponents)
    }
}

/// Raw attributes of a combatant species.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Species {
    /// One or two affinities, in order.
    #[serde(default)]
    pub affinities: Vec<EntityId>,
    pub stats: StatBlock,
    #[serde(default)]
    pub abilities: Vec<EntityId>,
    #[serde(default)]
    pub moves: Vec<EntityId>,
}

impl Species {
    /// Whether `affinity` is one of the species' own affinities.
    pub fn has_affinity(&self, affinity: &str) -> bool {
        self.affinities.iter().any(|a| a == affinity)
    }
}

/// Raw attributes of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Base power; 0 means no direct damage.
    #[serde(default, deserialize_with = "power_or_zero")]
    pub power: u32,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub target: Target,
    pub affinity: EntityId,
}

fn power_or_zero<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

/// Relation sets of one affinity against defending affinities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Affinity {
    #[serde(default)]
    pub no_effect: Vec<EntityId>,
    #[serde(default)]
    pub half_effect: Vec<EntityId>,
    #[serde(default)]
    pub double_effect: Vec<EntityId>,
}

impl Affinity {
    /// Multiplier of this affinity against a set of target affinities.
    ///
    /// Each target contributes 0, 1/2 or 2 (checked in that order) or
    /// leaves the multiplier unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dmgcalc::catalog::Affinity;
    ///
    /// let water = Affinity {
    ///     no_effect: vec![],
    ///     half_effect: vec!["water".into(), "grass".into()],
    ///     double_effect: vec!["fire".into(), "rock".into()],
    /// };
    /// assert_eq!(water.effectiveness_against(&["fire", "rock"]).to_f64(), 4.0);
    /// assert_eq!(water.effectiveness_against(&["grass", "fire"]).to_f64(), 1.0);
    /// ```
    pub fn effectiveness_against(&self, targets: &[&str]) -> Effectiveness {
        targets.iter().fold(Effectiveness::NEUTRAL, |acc, target| {
            if self.no_effect.iter().any(|a| a == target) {
                Effectiveness::IMMUNE
            } else if self.half_effect.iter().any(|a| a == target) {
                acc.halved()
            } else if self.double_effect.iter().any(|a| a == target) {
                acc.doubled()
            } else {
                acc
            }
        })
    }
}

/// Marker record for abilities; only the identifier matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ability {}

/// Marker record for held items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {}

/// Marker record for battlefield conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {}

/// All entity tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub species: Table<Species>,
    pub actions: Table<Action>,
    pub abilities: Table<Ability>,
    pub affinities: Table<Affinity>,
    pub items: Table<Item>,
    pub conditions: Table<Condition>,
}

/// One dataset record: identifier, naming and raw attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct Record<T> {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Native-script or plain names, expanded into retrieval strings.
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(flatten)]
    pub data: T,
}

/// The dataset document a catalog is built from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub species: Vec<Record<Species>>,
    #[serde(default)]
    pub actions: Vec<Record<Action>>,
    #[serde(default)]
    pub abilities: Vec<Record<Ability>>,
    #[serde(default)]
    pub affinities: Vec<Record<Affinity>>,
    #[serde(default)]
    pub items: Vec<Record<Item>>,
    #[serde(default)]
    pub conditions: Vec<Record<Condition>>,
}

impl Catalog {
    /// Parse a JSON dataset and build the catalog.
    pub fn from_json(text: &str, transliterator: Option<&Transliterator>) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(text)?;
        Ok(Self::from_dataset(dataset, transliterator))
    }

    /// Build the catalog from an already parsed dataset.
    ///
    /// Names are passed through `transliterator` when one is given. A name
    /// it cannot consume contributes no retrieval strings; the record is
    /// kept and stays reachable by its other names.
    pub fn from_dataset(dataset: Dataset, transliterator: Option<&Transliterator>) -> Self {
        let catalog = Self {
            species: build_table(dataset.species, transliterator),
            actions: build_table(dataset.actions, transliterator),
            abilities: build_table(dataset.abilities, transliterator),
            affinities: build_table(dataset.affinities, transliterator),
            items: build_table(dataset.items, transliterator),
            conditions: build_table(dataset.conditions, transliterator),
        };
        debug!(
            species = catalog.species.len(),
            actions = catalog.actions.len(),
            abilities = catalog.abilities.len(),
            "catalog built"
        );
        catalog
    }
}

fn retrieval_strings(id: &str, names: Vec<String>, transliterator: Option<&Transliterator>) -> Vec<String> {
    let Some(t) = transliterator else {
        return names;
    };
    names
        .iter()
        .filter_map(|name| match t.expand(name) {
            Ok(readings) => Some(readings),
            Err(err) => {
                warn!(id, name = name.as_str(), %err, "name not transliterable, readings dropped");
                None
            }
        })
        .flatten()
        .collect()
}

fn build_table<T>(records: Vec<Record<T>>, transliterator: Option<&Transliterator>) -> Table<T> {
    let entries = records
        .into_iter()
        .map(|record| {
            let label = record.label.unwrap_or_else(|| record.id.clone());
            let names = if record.names.is_empty() {
                vec![label.clone()]
            } else {
                record.names
            };
            let retrieval = retrieval_strings(&record.id, names, transliterator);
            Entity::new(record.id, label, retrieval, record.data)
        })
        .collect();
    Table::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::Replacement;

    const DATASET: &str = r#"{
        "species": [
            {"id": "garchomp", "label": "Garchomp", "names": ["gaburiasu"],
             "affinities": ["dragon", "ground"],
             "stats": {"vitality": 108, "offense": 130, "defense": 95,
                       "special_offense": 80, "special_defense": 85, "speed": 102},
             "abilities": ["rough-skin"], "moves": ["earthquake"]}
        ],
        "actions": [
            {"id": "earthquake", "names": ["jishin"], "power": 100,
             "category": "physical", "target": "all-other-pokemon", "affinity": "ground"},
            {"id": "swords-dance", "power": null, "category": "status",
             "target": "user", "affinity": "normal"}
        ],
        "affinities": [
            {"id": "ground", "no_effect": ["flying"], "double_effect": ["fire"]}
        ],
        "conditions": [{"id": "sun"}]
    }"#;

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(DATASET, None).unwrap();
        let garchomp = catalog.species.get("garchomp").unwrap();
        assert_eq!(garchomp.label(), "Garchomp");
        assert_eq!(garchomp.data().stats.offense, 130);
        assert!(garchomp.data().has_affinity("ground"));

        let eq = catalog.actions.get("earthquake").unwrap();
        assert_eq!(eq.data().power, 100);
        assert!(eq.data().target.is_spread());

        let dance = catalog.actions.get("swords-dance").unwrap();
        assert_eq!(dance.data().power, 0);
        assert_eq!(dance.data().category, Category::Status);

        assert_eq!(catalog.conditions.get("sun").unwrap().retrieval(), ["sun"]);
        assert!(catalog.items.is_empty());
    }

    #[test]
    fn test_catalog_transliterates_names() {
        let t = Transliterator::new([
            ("じ", Replacement::Alternatives(vec!["ji".into(), "zi".into()])),
            ("し", Replacement::Single("shi".into())),
            ("ん", Replacement::Single("n".into())),
        ]);
        let dataset = r#"{"actions": [{"id": "earthquake", "names": ["じしん"],
            "power": 100, "category": "physical", "affinity": "ground"}]}"#;
        let catalog = Catalog::from_json(dataset, Some(&t)).unwrap();
        let eq = catalog.actions.get("earthquake").unwrap();
        assert_eq!(eq.retrieval(), ["jishin", "zishin"]);
    }

    #[test]
    fn test_untransliterable_name_is_dropped() {
        let t = Transliterator::new([
            ("じ", Replacement::Single("ji".into())),
            ("し", Replacement::Single("shi".into())),
            ("ん", Replacement::Single("n".into())),
        ]);
        let dataset = r#"{"actions": [
            {"id": "earthquake", "names": ["じしん", "じしんX"],
             "power": 100, "category": "physical", "affinity": "ground"},
            {"id": "surf", "names": ["なみのり"],
             "power": 90, "category": "special", "affinity": "water"}]}"#;
        let catalog = Catalog::from_json(dataset, Some(&t)).unwrap();
        assert_eq!(catalog.actions.get("earthquake").unwrap().retrieval(), ["jishin"]);
        let surf = catalog.actions.get("surf").unwrap();
        assert!(surf.retrieval().is_empty());
        assert_eq!(surf.data().power, 90);
    }

    #[test]
    fn test_effectiveness_immunity_dominates() {
        let ground = Affinity {
            no_effect: vec!["flying".into()],
            half_effect: vec![],
            double_effect: vec!["fire".into()],
        };
        assert!(ground.effectiveness_against(&["fire", "flying"]).is_immune());
        assert!(ground.effectiveness_against(&["flying", "fire"]).is_immune());
    }
}
