//! The damage engine.
//!
//! [`resolve`] runs one fully resolved [`BattleConfig`] through the fixed
//! sequence of stages and produces an [`Output`]:
//!
//! ```text
//! effective action -> effectiveness -> stat selection
//!   -> power chain -> attack chain -> defense chain
//!   -> base damage -> final-stage steps -> random roll
//!   -> same-affinity bonus -> effectiveness -> burn
//!   -> damage chain -> floor clamp
//! ```
//!
//! The engine is a pure function of the configuration and the catalog.
//! [`resolve_all`] evaluates several configurations, concurrently on the
//! rayon pool when asked to, and returns outputs in input order.

use crate::catalog::{Catalog, Category};
use crate::config::{BattleConfig, Combatant};
use crate::context::RuleContext;
use crate::error::{CalcError, Result};
use crate::ids::{ability, action, affinity, condition, species};
use crate::numeric::{Effectiveness, Modifier};
use crate::output::{Damage, Output, OutputParts, ReportedStat, ROLL_COUNT};
use crate::rules::{self, ATTACK_RULES, DAMAGE_RULES, DEFENSE_RULES, FINAL_STEPS, POWER_DOUBLING, POWER_RULES};
use crate::stats::{apply_rank, derive_stat, StatInputs, StatKind};
use rayon::prelude::*;
use tracing::{debug, warn};

/// The action as it behaves for this configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveAction<'c> {
    pub affinity: &'c str,
    pub category: Category,
    /// Power after action-specific overrides and doubling.
    pub power: u32,
}

/// Resolve the action's affinity, category and power.
pub fn effective_action<'c>(config: &BattleConfig<'c>) -> EffectiveAction<'c> {
    let data = config.action.data();
    let action_id = config.action.id().as_str();
    let attacker = &config.attacker;

    let mut resolved = EffectiveAction {
        affinity: data.affinity.as_str(),
        category: data.category,
        power: data.power,
    };

    let tera_blast_override = action_id == action::TERA_BLAST && attacker.override_affinity.is_some();
    if action_id == action::TERA_BLAST {
        if let Some(override_id) = attacker.override_id() {
            resolved.affinity = override_id;
            if config.has_condition(condition::FORCE_PHYSICAL) {
                resolved.category = Category::Physical;
            }
            if override_id == affinity::STELLAR {
                resolved.power = 100;
            }
        }
    }

    if resolved.affinity == affinity::NORMAL && !tera_blast_override {
        match attacker.ability_id() {
            ability::PIXILATE => resolved.affinity = affinity::FAIRY,
            ability::GALVANIZE => resolved.affinity = affinity::ELECTRIC,
            _ => {}
        }
    }

    if action_id == action::IVY_CUDGEL {
        match attacker.species.id().as_str() {
            species::OGERPON_WELLSPRING => resolved.affinity = affinity::WATER,
            species::OGERPON_HEARTHFLAME => resolved.affinity = affinity::FIRE,
            species::OGERPON_CORNERSTONE => resolved.affinity = affinity::ROCK,
            _ => {}
        }
    }

    for &(name, flag) in POWER_DOUBLING {
        if action_id == name && config.has_condition(flag) {
            resolved.power = resolved.power.saturating_mul(2);
        }
    }

    resolved
}

/// Affinities the defender is hit as: its override, unless that override
/// is the universal tag, otherwise its species affinities.
pub fn defender_affinities<'c>(defender: &Combatant<'c>) -> Vec<&'c str> {
    match defender.override_affinity {
        Some(tag) if tag.id() != affinity::STELLAR => vec![tag.id().as_str()],
        _ => defender
            .species
            .data()
            .affinities
            .iter()
            .map(|a| a.as_str())
            .collect(),
    }
}

/// Effectiveness of `move_affinity` against the defender.
pub fn effectiveness(config: &BattleConfig, catalog: &Catalog, move_affinity: &str) -> Effectiveness {
    if move_affinity == affinity::STELLAR && config.defender.override_affinity.is_some() {
        return Effectiveness::DOUBLE;
    }
    match catalog.affinities.get(move_affinity) {
        Some(entry) => entry
            .data()
            .effectiveness_against(&defender_affinities(&config.defender)),
        None => {
            warn!(affinity = move_affinity, "affinity missing from catalog, assuming neutral");
            Effectiveness::NEUTRAL
        }
    }
}

/// Attacking and defending stat inputs, with the level each is derived at.
struct StatSelection {
    attack: StatInputs,
    attack_level: u8,
    defense: StatInputs,
    defense_level: u8,
}

fn select_stats(config: &BattleConfig, category: Category) -> Result<StatSelection> {
    let attacker = &config.attacker;
    let defender = &config.defender;
    let action_id = config.action.id().as_str();

    let (attack, defense_kind) = match action_id {
        action::PSYSHOCK => (attacker.stat_inputs(StatKind::SpecialOffense), StatKind::Defense),
        action::BODY_PRESS => (attacker.stat_inputs(StatKind::Defense), StatKind::Defense),
        action::FOUL_PLAY => (foul_play_inputs(config), StatKind::Defense),
        _ if config.has_condition(condition::FORCE_PHYSICAL) || category == Category::Physical => {
            (attacker.stat_inputs(StatKind::Offense), StatKind::Defense)
        }
        _ if config.has_condition(condition::FORCE_SPECIAL) || category == Category::Special => (
            attacker.stat_inputs(StatKind::SpecialOffense),
            StatKind::SpecialDefense,
        ),
        _ => return Err(CalcError::NonDamagingAction(action_id.to_string())),
    };

    Ok(StatSelection {
        attack,
        attack_level: attacker.level,
        defense: defender.stat_inputs(defense_kind),
        defense_level: defender.level,
    })
}

/// The defender's offense, built from the defender's per-stat overrides
/// where present and the attacker's scalar inputs otherwise.
fn foul_play_inputs(config: &BattleConfig) -> StatInputs {
    let attacker = &config.attacker;
    let defender = &config.defender;
    StatInputs {
        base: defender.species.data().stats.offense,
        investment: defender
            .investments
            .map(|block| block.offense)
            .unwrap_or(attacker.investment),
        quality: defender
            .qualities
            .map(|block| block.offense.min(u16::from(u8::MAX)) as u8)
            .unwrap_or(attacker.quality),
        growth: defender
            .nature
            .map(|nature| nature.growth_for(StatKind::Offense))
            .unwrap_or(attacker.growth),
    }
}

/// Same-affinity bonus for the attacker using `move_affinity`.
///
/// | override      | match                       | factor (adapted) |
/// |---------------|-----------------------------|------------------|
/// | none          | species affinity            | 1.5 (2.0)        |
/// | universal tag | species affinity            | 2.0              |
/// | universal tag | otherwise                   | 1.2              |
/// | other         | override and species        | 2.0 (2.25)       |
/// | other         | override only               | 1.5 (2.0)        |
/// | other         | species only                | 1.5              |
pub fn same_affinity_bonus(attacker: &Combatant, move_affinity: &str) -> Option<Modifier> {
    let adapted = attacker.ability_id() == ability::ADAPTABILITY;
    let in_species = attacker.species.data().has_affinity(move_affinity);
    let factor = match attacker.override_id() {
        None => in_species.then_some(if adapted { 8192 } else { 6144 }),
        Some(affinity::STELLAR) => Some(if in_species { 8192 } else { 4915 }),
        Some(tag) => match (move_affinity == tag, in_species) {
            (true, true) => Some(if adapted { 9216 } else { 8192 }),
            (true, false) => Some(if adapted { 8192 } else { 6144 }),
            (false, true) => Some(6144),
            (false, false) => None,
        },
    };
    factor.map(Modifier)
}

/// Integer base damage: `floor(floor(level*2/5+2) * power * attack / defense) / 50 + 2`.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::engine::base_damage;
///
/// assert_eq!(base_damage(50, 90, 150, 100), 61);
/// ```
pub fn base_damage(level: u8, power: u32, attack: u32, defense: u32) -> u32 {
    let level_factor = u64::from(level) * 2 / 5 + 2;
    let scaled = level_factor * u64::from(power) * u64::from(attack) / u64::from(defense.max(1));
    (scaled / 50 + 2) as u32
}

/// Expand one value into the sixteen roll outcomes, `floor(value * r / 100)`
/// for `r` in 85..=100.
pub fn roll(value: u32) -> [u32; ROLL_COUNT] {
    let mut rolls = [0; ROLL_COUNT];
    for (slot, r) in rolls.iter_mut().zip(85u64..=100) {
        *slot = (u64::from(value) * r / 100) as u32;
    }
    rolls
}

/// Resolve one configuration.
///
/// Fails with [`CalcError::NonDamagingAction`] when the action has no
/// damage category and nothing forces one.
pub fn resolve(config: &BattleConfig, catalog: &Catalog) -> Result<Output> {
    let attacker = &config.attacker;
    let defender = &config.defender;
    let action_id = config.action.id().as_str();
    let mut applied: Vec<&'static str> = Vec::new();

    // Stage 1-2
    let resolved = effective_action(config);
    let effectiveness = effectiveness(config, catalog, resolved.affinity);

    // Stage 3
    let stats = select_stats(config, resolved.category)?;
    let attack_stat = derive_stat(stats.attack, stats.attack_level);
    let defense_stat = derive_stat(stats.defense, stats.defense_level);

    let ctx = RuleContext {
        action: action_id,
        power: resolved.power,
        declared_affinity: config.action.data().affinity.as_str(),
        affinity: resolved.affinity,
        declared_category: config.action.data().category,
        category: resolved.category,
        target: config.action.data().target,
        attacker_species: attacker.species.id().as_str(),
        attacker_ability: attacker.ability_id(),
        defender_ability: defender.ability_id(),
        attacker_item: attacker.item_id(),
        defender_item: defender.item_id(),
        attacker_override: attacker.override_affinity.is_some(),
        effectiveness,
        defender_affinities: defender_affinities(defender),
        conditions: config.conditions.iter().map(|c| c.id().as_str()).collect(),
    };

    // Stage 4
    let power = rules::accumulate(POWER_RULES, &ctx, &mut applied)
        .apply(resolved.power)
        .max(1);

    // Stage 5
    let mut attack = apply_rank(attack_stat, attacker.rank);
    if attacker.ability_id() == ability::HUSTLE {
        attack = Modifier::ONE_POINT_FIVE.apply_floor(attack);
        applied.push("hustle");
    }
    let attack = rules::accumulate(ATTACK_RULES, &ctx, &mut applied)
        .apply(attack)
        .max(1);

    // Stage 6
    let mut defense = apply_rank(defense_stat, defender.rank);
    let rock_in_sand = ctx.has(condition::SANDSTORM)
        && ctx.defender_affinities.contains(&affinity::ROCK)
        && ctx.is_special()
        && action_id != action::PSYSHOCK;
    let ice_in_snow =
        ctx.has(condition::SNOW) && ctx.defender_affinities.contains(&affinity::ICE) && ctx.is_physical();
    if rock_in_sand || ice_in_snow {
        defense = Modifier::ONE_POINT_FIVE.apply_floor(defense);
        applied.push("weather defense");
    }
    let defense = rules::accumulate(DEFENSE_RULES, &ctx, &mut applied)
        .apply(defense)
        .max(1);

    // Stage 7-9
    let base = base_damage(attacker.level, power, attack, defense);
    let adjusted = rules::apply_steps(FINAL_STEPS, &ctx, base, &mut applied);
    let mut rolls = roll(adjusted);

    // Stage 10
    if let Some(bonus) = same_affinity_bonus(attacker, resolved.affinity) {
        rolls.iter_mut().for_each(|d| *d = bonus.apply(*d));
        applied.push("same affinity");
    }

    // Stage 11
    rolls.iter_mut().for_each(|d| *d = effectiveness.apply(*d));

    // Stage 12
    if ctx.has(condition::BURN)
        && ctx.is_physical()
        && attacker.ability_id() != ability::GUTS
        && action_id != action::FACADE
    {
        rolls.iter_mut().for_each(|d| *d = Modifier::HALF.apply(*d));
        applied.push("burn");
    }

    let damage_modifier = rules::accumulate(DAMAGE_RULES, &ctx, &mut applied);
    rolls.iter_mut().for_each(|d| *d = damage_modifier.apply(*d));

    // Stage 13
    if !effectiveness.is_immune() {
        rolls.iter_mut().for_each(|d| *d = (*d).max(1));
    }

    let (vitality_investment, vitality_quality) = config.defender_vitality_inputs();
    debug!(
        action = action_id,
        base,
        min = rolls[0],
        max = rolls[ROLL_COUNT - 1],
        "configuration resolved"
    );

    Ok(Output::from_parts(OutputParts {
        damage: Damage::new(rolls),
        attack: ReportedStat::new(attack_stat, stats.attack),
        defense: ReportedStat::new(defense_stat, stats.defense),
        vitality: config.defender_vitality(),
        vitality_investment,
        vitality_quality,
        power,
        effective_attack: attack,
        effective_defense: defense,
        effectiveness,
        applied,
    }))
}

/// Resolve every configuration, preserving input order.
///
/// With `parallel` set the configurations are evaluated on the rayon pool.
/// Either way every configuration is evaluated, and the error reported is
/// the one of the earliest failing configuration in input order.
pub fn resolve_all(configs: &[BattleConfig], catalog: &Catalog, parallel: bool) -> Result<Vec<Output>> {
    let results: Vec<Result<Output>> = if parallel {
        configs.par_iter().map(|config| resolve(config, catalog)).collect()
    } else {
        configs.iter().map(|config| resolve(config, catalog)).collect()
    };
    results.into_iter().collect()
}
