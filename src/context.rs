//! The resolved context modifier rules are evaluated against.
//!
//! A `RuleContext` is built once per configuration, after the effective
//! action has been resolved and the effectiveness multiplier computed. It
//! only carries identifiers and derived flags; rule predicates never see
//! the running modifier value.

use crate::catalog::{Category, Target};
use crate::numeric::Effectiveness;
use std::collections::HashSet;

/// Everything a modifier rule predicate may inspect.
///
/// Absent items are represented by an empty identifier, so a rule that
/// tests for a specific item simply never matches.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::catalog::{Category, Target};
/// use dmgcalc::context::RuleContext;
/// use dmgcalc::numeric::Effectiveness;
///
/// let ctx = RuleContext {
///     action: "flamethrower",
///     power: 90,
///     declared_affinity: "fire",
///     affinity: "fire",
///     declared_category: Category::Special,
///     category: Category::Special,
///     target: Target::SelectedPokemon,
///     attacker_species: "charizard",
///     attacker_ability: "blaze",
///     defender_ability: "thick-fat",
///     attacker_item: "",
///     defender_item: "",
///     attacker_override: false,
///     effectiveness: Effectiveness::NEUTRAL,
///     defender_affinities: vec!["normal"],
///     conditions: ["sun"].into_iter().collect(),
/// };
/// assert!(ctx.has("sun"));
/// assert!(ctx.is_special());
/// ```
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    /// Action identifier.
    pub action: &'a str,
    /// Power after any doubling, before the power chain.
    pub power: u32,
    /// Affinity the action is declared with.
    pub declared_affinity: &'a str,
    /// Affinity after action-specific and ability overrides.
    pub affinity: &'a str,
    pub declared_category: Category,
    pub category: Category,
    pub target: Target,
    pub attacker_species: &'a str,
    pub attacker_ability: &'a str,
    pub defender_ability: &'a str,
    pub attacker_item: &'a str,
    pub defender_item: &'a str,
    /// Whether the attacker holds an override affinity.
    pub attacker_override: bool,
    pub effectiveness: Effectiveness,
    /// Defender's effective affinities.
    pub defender_affinities: Vec<&'a str>,
    pub conditions: HashSet<&'a str>,
}

impl<'a> RuleContext<'a> {
    /// Whether the condition `id` is active.
    pub fn has(&self, id: &str) -> bool {
        self.conditions.contains(id)
    }

    pub fn is_physical(&self) -> bool {
        self.category == Category::Physical
    }

    pub fn is_special(&self) -> bool {
        self.category == Category::Special
    }

    /// Whether the action's affinity is one of `affinities`.
    pub fn affinity_in(&self, affinities: &[&str]) -> bool {
        affinities.contains(&self.affinity)
    }

    /// Whether the action hits several targets in a double battle.
    pub fn is_spread_in_doubles(&self) -> bool {
        self.has(crate::ids::condition::DOUBLES) && self.target.is_spread()
    }
}
