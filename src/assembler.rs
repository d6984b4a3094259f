//! Configuration assembly.
//!
//! Turns a [`ParsedCommand`] into fully resolved [`BattleConfig`]s:
//!
//! 1. every name in the command is resolved against the catalog (prompting
//!    when a query is ambiguous) and the settings are applied to a
//!    [`ConfigDraft`];
//! 2. the draft runs through the enrichment passes in order, each mapping
//!    one draft to one or more drafts:
//!    species fixups, ability selection, attacker build expansion,
//!    defender build expansion;
//! 3. every resulting draft is finished, which fails with the first unset
//!    field.

use crate::catalog::{Catalog, Category};
use crate::command::{ParsedCommand, Setting, Side};
use crate::config::{BattleConfig, CombatantDraft, ConfigDraft};
use crate::entity::{Entity, Table};
use crate::error::Result;
use crate::ids::{affinity, item, species};
use crate::query::{retrieve, Prompt};
use crate::stats::{Growth, MAX_INVESTMENT};
use tracing::{debug, warn};

/// Abilities picked automatically, highest priority first.
pub const ABILITY_PRIORITY: [&str; 20] = [
    "multiscale",
    "galvanize",
    "pixilate",
    "iron-fist",
    "reckless",
    "supreme-overlord",
    "sheer-force",
    "tough-claws",
    "technician",
    "guts",
    "huge-power",
    "pure-power",
    "water-bubble",
    "purifying-salt",
    "tinted-lens",
    "solid-rock",
    "filter",
    "adaptability",
    "regenerator",
    "unaware",
];

/// Shared inputs of the enrichment passes.
#[derive(Debug, Clone, Copy)]
pub struct PassContext<'c> {
    pub catalog: &'c Catalog,
    /// Quality every expanded build is reset to.
    pub quality: u8,
}

/// One enrichment pass.
pub type Pass = for<'c> fn(ConfigDraft<'c>, &PassContext<'c>) -> Vec<ConfigDraft<'c>>;

/// The enrichment passes, in the order they run.
pub const PASSES: [(&str, Pass); 4] = [
    ("species fixups", species_fixups),
    ("ability selection", select_abilities),
    ("attacker builds", expand_attacker),
    ("defender builds", expand_defender),
];

/// Look up `id`, warning when the dataset lacks it.
fn required<'c, T>(table: &'c Table<T>, id: &str) -> Option<&'c Entity<T>> {
    let found = table.get(id);
    if found.is_none() {
        warn!(id, "catalog entry missing, skipping");
    }
    found
}

/// Force the override affinity or held item of species whose form fixes it.
pub fn species_fixups<'c>(mut draft: ConfigDraft<'c>, cx: &PassContext<'c>) -> Vec<ConfigDraft<'c>> {
    for side in [&mut draft.attacker, &mut draft.defender] {
        let Some(entity) = side.species else {
            continue;
        };
        match entity.id().as_str() {
            species::TERAPAGOS_STELLAR => {
                if let Some(stellar) = required(&cx.catalog.affinities, affinity::STELLAR) {
                    side.override_affinity = Some(stellar);
                }
            }
            species::ZACIAN_CROWNED | species::ZAMAZENTA_CROWNED => {
                if let Some(none) = required(&cx.catalog.items, item::NO_ITEM) {
                    side.item = Some(none);
                }
            }
            species::OGERPON_WELLSPRING | species::OGERPON_HEARTHFLAME | species::OGERPON_CORNERSTONE => {
                if let Some(mask) = required(&cx.catalog.items, item::OGERPON_MASK) {
                    side.item = Some(mask);
                }
            }
            _ => {}
        }
    }
    vec![draft]
}

/// Pick an ability for each combatant that has none.
///
/// The first entry of [`ABILITY_PRIORITY`] the species can have wins;
/// otherwise its first listed ability.
pub fn select_abilities<'c>(mut draft: ConfigDraft<'c>, cx: &PassContext<'c>) -> Vec<ConfigDraft<'c>> {
    for side in [&mut draft.attacker, &mut draft.defender] {
        if side.ability.is_some() {
            continue;
        }
        let Some(entity) = side.species else {
            continue;
        };
        let own = &entity.data().abilities;
        let chosen = ABILITY_PRIORITY
            .iter()
            .copied()
            .find(|preferred| own.iter().any(|a| a == preferred))
            .or_else(|| own.first().map(|a| a.as_str()));
        if let Some(id) = chosen {
            side.ability = required(&cx.catalog.abilities, id);
        }
    }
    vec![draft]
}

fn with_build<'c>(draft: &ConfigDraft<'c>, quality: u8, investment: u16, growth: Growth) -> ConfigDraft<'c> {
    let mut variant = draft.clone();
    variant.attacker.set_build(investment, growth);
    variant.attacker.quality = quality;
    variant
}

/// Fan an attacker without investment out into the usual builds.
///
/// Without a held item the two boosting-item builds (maximum investment,
/// neutral growth) come first; then maximum investment with boosting
/// growth, maximum neutral, and zero neutral.
pub fn expand_attacker<'c>(draft: ConfigDraft<'c>, cx: &PassContext<'c>) -> Vec<ConfigDraft<'c>> {
    if draft.attacker.investment.is_some() {
        return vec![draft];
    }
    let mut variants = Vec::with_capacity(5);
    if draft.attacker.item.is_none() {
        for id in [item::CHOICE_ITEM, item::TYPE_BOOST] {
            if let Some(held) = required(&cx.catalog.items, id) {
                let mut variant = with_build(&draft, cx.quality, MAX_INVESTMENT, Growth::Neutral);
                variant.attacker.item = Some(held);
                variants.push(variant);
            }
        }
    }
    variants.push(with_build(&draft, cx.quality, MAX_INVESTMENT, Growth::Boosting));
    variants.push(with_build(&draft, cx.quality, MAX_INVESTMENT, Growth::Neutral));
    variants.push(with_build(&draft, cx.quality, 0, Growth::Neutral));
    variants
}

/// Fan a defender without investment out into defense/vitality builds.
///
/// Zero and maximum defense, each with zero and maximum vitality; a
/// special action against a defender without an item adds an
/// assault-vest build.
pub fn expand_defender<'c>(draft: ConfigDraft<'c>, cx: &PassContext<'c>) -> Vec<ConfigDraft<'c>> {
    if draft.defender.investment.is_some() {
        return vec![draft];
    }
    let build = |investment: u16, growth: Growth, vitality: u16| {
        let mut variant = draft.clone();
        variant.defender.set_build(investment, growth);
        variant.defender.quality = cx.quality;
        variant.vitality_investment = Some(vitality);
        variant.vitality_quality = cx.quality;
        variant
    };

    let mut variants = vec![
        build(0, Growth::Neutral, 0),
        build(0, Growth::Neutral, MAX_INVESTMENT),
        build(MAX_INVESTMENT, Growth::Boosting, 0),
        build(MAX_INVESTMENT, Growth::Boosting, MAX_INVESTMENT),
    ];
    let special = draft
        .action
        .map(|action| action.data().category == Category::Special)
        .unwrap_or(false);
    if special && draft.defender.item.is_none() {
        if let Some(vest) = required(&cx.catalog.items, item::ASSAULT_VEST) {
            let mut variant = build(MAX_INVESTMENT, Growth::Boosting, MAX_INVESTMENT);
            variant.defender.item = Some(vest);
            variants.push(variant);
        }
    }
    variants
}

/// Run `drafts` through every pass in order.
pub fn enrich<'c>(drafts: Vec<ConfigDraft<'c>>, cx: &PassContext<'c>) -> Vec<ConfigDraft<'c>> {
    PASSES.iter().fold(drafts, |drafts, (name, pass)| {
        let next: Vec<_> = drafts.into_iter().flat_map(|draft| pass(draft, cx)).collect();
        debug!(pass = *name, count = next.len(), "enrichment pass done");
        next
    })
}

/// Resolves names and applies settings for one command.
pub struct Assembler<'c, 'p> {
    catalog: &'c Catalog,
    prompt: &'p mut dyn Prompt,
    level: u8,
    quality: u8,
}

impl<'c, 'p> Assembler<'c, 'p> {
    /// Create an assembler whose drafts start at `level` and `quality`.
    pub fn new(catalog: &'c Catalog, prompt: &'p mut dyn Prompt, level: u8, quality: u8) -> Self {
        Self {
            catalog,
            prompt,
            level,
            quality,
        }
    }

    /// Build the unexpanded draft for `parsed`.
    pub fn draft(&mut self, parsed: &ParsedCommand) -> Result<ConfigDraft<'c>> {
        let catalog = self.catalog;
        let mut draft = ConfigDraft::new(self.level, self.quality);
        draft.attacker.species = Some(retrieve(&catalog.species, &parsed.attacker, None::<&[&str]>, self.prompt)?);
        draft.defender.species = Some(retrieve(&catalog.species, &parsed.defender, None::<&[&str]>, self.prompt)?);

        for setting in &parsed.attacker_settings {
            self.apply(&mut draft, Side::Attacker, setting)?;
        }
        for setting in &parsed.defender_settings {
            self.apply(&mut draft, Side::Defender, setting)?;
        }
        for query in &parsed.conditions {
            let condition = retrieve(&catalog.conditions, query, None::<&[&str]>, self.prompt)?;
            draft.conditions.push(condition);
        }
        Ok(draft)
    }

    /// Build, enrich and finish every configuration for `parsed`.
    pub fn assemble(&mut self, parsed: &ParsedCommand) -> Result<Vec<BattleConfig<'c>>> {
        let draft = self.draft(parsed)?;
        let cx = PassContext {
            catalog: self.catalog,
            quality: self.quality,
        };
        let configs = enrich(vec![draft], &cx)
            .iter()
            .map(ConfigDraft::finish)
            .collect::<Result<Vec<_>>>()?;
        for config in &configs {
            debug!(
                attacker = %config.attacker.species.id(),
                defender = %config.defender.species.id(),
                action = %config.action.id(),
                attacker_investment = config.attacker.investment,
                defender_investment = config.defender.investment,
                vitality_investment = config.vitality_investment,
                "configuration assembled"
            );
        }
        Ok(configs)
    }

    fn apply(&mut self, draft: &mut ConfigDraft<'c>, side: Side, setting: &Setting) -> Result<()> {
        let catalog = self.catalog;
        let owner: &mut CombatantDraft<'c> = match side {
            Side::Attacker => &mut draft.attacker,
            Side::Defender => &mut draft.defender,
        };
        match setting {
            Setting::Ability { query, restricted } => {
                let restriction = match (*restricted, owner.species) {
                    (true, Some(entity)) => Some(entity.data().abilities.as_slice()),
                    _ => None,
                };
                owner.ability = Some(retrieve(&catalog.abilities, query, restriction, self.prompt)?);
            }
            Setting::Investment(amount) => owner.investment = Some(*amount),
            Setting::Quality(amount) => owner.quality = *amount,
            Setting::Growth(growth) => owner.growth = *growth,
            Setting::Item(query) => {
                owner.item = Some(retrieve(&catalog.items, query, None::<&[&str]>, self.prompt)?);
            }
            Setting::Rank(rank) => owner.rank = *rank,
            Setting::Override(query) => {
                owner.override_affinity =
                    Some(retrieve(&catalog.affinities, query, None::<&[&str]>, self.prompt)?);
            }
            Setting::Level(level) => owner.level = *level,
            Setting::Investments(block) => {
                owner.investments = Some(*block);
                owner.investment = Some(0);
                if side == Side::Defender {
                    draft.vitality_investment = Some(0);
                }
            }
            Setting::Qualities(block) => owner.qualities = Some(*block),
            Setting::Nature(nature) => owner.nature = Some(*nature),
            Setting::Action { query, restricted } => {
                let restriction = match (*restricted, draft.attacker.species) {
                    (true, Some(entity)) => Some(entity.data().moves.as_slice()),
                    _ => None,
                };
                draft.action = Some(retrieve(&catalog.actions, query, restriction, self.prompt)?);
            }
            Setting::VitalityInvestment(amount) => draft.vitality_investment = Some(*amount),
            Setting::VitalityQuality(amount) => draft.vitality_quality = *amount,
            Setting::AttackerBuild { investment, growth } => draft.attacker.set_build(*investment, *growth),
            Setting::DefenderBuild {
                investment,
                growth,
                vitality,
            } => {
                draft.defender.set_build(*investment, *growth);
                draft.vitality_investment = Some(*vitality);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Ability, Action, Item, Species, Target};
    use crate::stats::StatBlock;

    fn catalog() -> Catalog {
        let species = |id: &str, abilities: &[&str]| {
            Entity::new(
                id,
                id,
                vec![id.to_string()],
                Species {
                    affinities: vec!["normal".into()],
                    stats: StatBlock::new([100; 6]),
                    abilities: abilities.iter().map(|&a| a.into()).collect(),
                    moves: vec!["swift".into()],
                },
            )
        };
        let item_entry = |id: &str| Entity::new(id, id, vec![id.to_string()], Item {});
        let ability_entry = |id: &str| Entity::new(id, id, vec![id.to_string()], Ability {});
        Catalog {
            species: Table::from_entries(vec![
                species("zacian-crowned", &["intrepid-sword"]),
                species("snorlax", &["immunity", "thick-fat", "gluttony"]),
                species("dragonite", &["inner-focus", "multiscale"]),
            ]),
            actions: Table::from_entries(vec![Entity::new(
                "swift",
                "Swift",
                vec!["swift".into()],
                Action {
                    power: 60,
                    category: Category::Special,
                    target: Target::AllOpponents,
                    affinity: "normal".into(),
                },
            )]),
            abilities: Table::from_entries(vec![
                ability_entry("intrepid-sword"),
                ability_entry("immunity"),
                ability_entry("thick-fat"),
                ability_entry("multiscale"),
            ]),
            items: Table::from_entries(vec![
                item_entry("choice-item"),
                item_entry("type-boost"),
                item_entry("assault-vest"),
                item_entry("no-item"),
            ]),
            ..Catalog::default()
        }
    }

    fn draft<'c>(catalog: &'c Catalog, attacker: &str, defender: &str) -> ConfigDraft<'c> {
        let mut draft = ConfigDraft::default();
        draft.attacker.species = catalog.species.get(attacker);
        draft.defender.species = catalog.species.get(defender);
        draft.action = catalog.actions.get("swift");
        draft
    }

    #[test]
    fn test_ability_priority_then_first() {
        let catalog = catalog();
        let cx = PassContext { catalog: &catalog, quality: 31 };
        let out = select_abilities(draft(&catalog, "snorlax", "dragonite"), &cx);
        assert_eq!(out[0].attacker.ability.unwrap().id().as_str(), "immunity");
        assert_eq!(out[0].defender.ability.unwrap().id().as_str(), "multiscale");
    }

    #[test]
    fn test_fixup_forces_item() {
        let catalog = catalog();
        let cx = PassContext { catalog: &catalog, quality: 31 };
        let out = species_fixups(draft(&catalog, "zacian-crowned", "snorlax"), &cx);
        assert_eq!(out[0].attacker.item.unwrap().id().as_str(), "no-item");
        assert!(out[0].defender.item.is_none());
    }

    #[test]
    fn test_attacker_expansion_counts() {
        let catalog = catalog();
        let cx = PassContext { catalog: &catalog, quality: 31 };
        let base = draft(&catalog, "snorlax", "dragonite");
        let out = expand_attacker(base.clone(), &cx);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0].attacker.item.unwrap().id().as_str(), "choice-item");
        assert_eq!(out[1].attacker.item.unwrap().id().as_str(), "type-boost");
        assert_eq!(out[4].attacker.investment, Some(0));
        let growths: Vec<Growth> = out.iter().map(|d| d.attacker.growth).collect();
        assert_eq!(
            growths,
            [Growth::Neutral, Growth::Neutral, Growth::Boosting, Growth::Neutral, Growth::Neutral]
        );

        let mut held = base;
        held.attacker.item = catalog.items.get("no-item");
        assert_eq!(expand_attacker(held, &cx).len(), 3);
    }

    #[test]
    fn test_defender_expansion_adds_vest_for_special() {
        let catalog = catalog();
        let cx = PassContext { catalog: &catalog, quality: 31 };
        let out = expand_defender(draft(&catalog, "snorlax", "dragonite"), &cx);
        assert_eq!(out.len(), 5);
        assert_eq!(out[1].vitality_investment, Some(252));
        assert_eq!(out[4].defender.item.unwrap().id().as_str(), "assault-vest");
    }

    #[test]
    fn test_enrich_multiplies_fan_out() {
        let catalog = catalog();
        let cx = PassContext { catalog: &catalog, quality: 31 };
        let out = enrich(vec![draft(&catalog, "snorlax", "dragonite")], &cx);
        assert_eq!(out.len(), 25);
        assert!(out.iter().all(|d| d.finish().is_ok()));
    }
}
