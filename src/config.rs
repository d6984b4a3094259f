//! Battle configurations.
//!
//! A [`ConfigDraft`] is the partially specified form produced by command
//! parsing; every optional field may still be unset. The enrichment passes
//! in [`crate::assembler`] fill it in, and [`ConfigDraft::finish`] turns it
//! into a [`BattleConfig`], the fully resolved value the damage engine
//! consumes.
//!
//! Both forms borrow their entities from the catalog, so copying a
//! configuration is cheap.

use crate::catalog::{Ability, Action, Affinity, Condition, Item, Species};
use crate::entity::Entity;
use crate::error::{CalcError, Result};
use crate::stats::{derive_stat, derive_vitality, Growth, NaturePair, StatBlock, StatInputs, StatKind};

/// Level assumed when none is given.
pub const DEFAULT_LEVEL: u8 = 50;

/// Quality assumed when none is given.
pub const DEFAULT_QUALITY: u8 = 31;

/// One fully resolved combatant.
#[derive(Debug, Clone)]
pub struct Combatant<'c> {
    pub species: &'c Entity<Species>,
    pub ability: &'c Entity<Ability>,
    pub item: Option<&'c Entity<Item>>,
    pub override_affinity: Option<&'c Entity<Affinity>>,
    pub rank: i8,
    pub level: u8,
    /// Scalar investment used for the stat in play.
    pub investment: u16,
    pub quality: u8,
    pub growth: Growth,
    /// Full per-stat investment override.
    pub investments: Option<StatBlock>,
    /// Full per-stat quality override.
    pub qualities: Option<StatBlock>,
    /// Per-stat growth designation; takes priority over `growth`.
    pub nature: Option<NaturePair>,
}

impl<'c> Combatant<'c> {
    /// Ability identifier.
    pub fn ability_id(&self) -> &'c str {
        self.ability.id().as_str()
    }

    /// Held item identifier, or `""` when nothing is held.
    pub fn item_id(&self) -> &'c str {
        self.item.map(|item| item.id().as_str()).unwrap_or("")
    }

    /// Override affinity identifier, if any.
    pub fn override_id(&self) -> Option<&'c str> {
        self.override_affinity.map(|affinity| affinity.id().as_str())
    }

    /// Inputs for one stat, with per-stat overrides applied.
    pub fn stat_inputs(&self, kind: StatKind) -> StatInputs {
        StatInputs {
            base: self.species.data().stats.get(kind),
            investment: self
                .investments
                .map(|block| block.get(kind))
                .unwrap_or(self.investment),
            quality: self
                .qualities
                .map(|block| block.get(kind).min(u16::from(u8::MAX)) as u8)
                .unwrap_or(self.quality),
            growth: self
                .nature
                .map(|nature| nature.growth_for(kind))
                .unwrap_or(self.growth),
        }
    }

    /// Derived value of one non-vitality stat.
    pub fn stat(&self, kind: StatKind) -> u32 {
        derive_stat(self.stat_inputs(kind), self.level)
    }
}

/// A fully resolved configuration, ready for the damage engine.
#[derive(Debug, Clone)]
pub struct BattleConfig<'c> {
    pub attacker: Combatant<'c>,
    pub defender: Combatant<'c>,
    pub action: &'c Entity<Action>,
    pub conditions: Vec<&'c Entity<Condition>>,
    /// Defender vitality investment, unless a per-stat override exists.
    pub vitality_investment: u16,
    pub vitality_quality: u8,
}

impl<'c> BattleConfig<'c> {
    /// Whether the condition `id` is active.
    pub fn has_condition(&self, id: &str) -> bool {
        self.conditions.iter().any(|condition| condition.id() == id)
    }

    /// Defender vitality investment and quality, after per-stat overrides.
    pub fn defender_vitality_inputs(&self) -> (u16, u8) {
        let investment = self
            .defender
            .investments
            .map(|block| block.vitality)
            .unwrap_or(self.vitality_investment);
        let quality = self
            .defender
            .qualities
            .map(|block| block.vitality.min(u16::from(u8::MAX)) as u8)
            .unwrap_or(self.vitality_quality);
        (investment, quality)
    }

    /// Defender's derived vitality.
    pub fn defender_vitality(&self) -> u32 {
        let (investment, quality) = self.defender_vitality_inputs();
        derive_vitality(
            self.defender.species.data().stats.vitality,
            investment,
            quality,
            self.defender.level,
        )
    }
}

/// A combatant whose fields may still be unset.
#[derive(Debug, Clone)]
pub struct CombatantDraft<'c> {
    pub species: Option<&'c Entity<Species>>,
    pub ability: Option<&'c Entity<Ability>>,
    pub item: Option<&'c Entity<Item>>,
    pub override_affinity: Option<&'c Entity<Affinity>>,
    pub rank: i8,
    pub level: u8,
    pub investment: Option<u16>,
    pub quality: u8,
    pub growth: Growth,
    pub investments: Option<StatBlock>,
    pub qualities: Option<StatBlock>,
    pub nature: Option<NaturePair>,
}

impl<'c> Default for CombatantDraft<'c> {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL, DEFAULT_QUALITY)
    }
}

impl<'c> CombatantDraft<'c> {
    /// An empty draft with the given defaults.
    pub fn new(level: u8, quality: u8) -> Self {
        Self {
            species: None,
            ability: None,
            item: None,
            override_affinity: None,
            rank: 0,
            level,
            investment: None,
            quality,
            growth: Growth::Neutral,
            investments: None,
            qualities: None,
            nature: None,
        }
    }

    /// Set scalar investment and growth together.
    pub fn set_build(&mut self, investment: u16, growth: Growth) {
        self.investment = Some(investment);
        self.growth = growth;
    }

    fn finish(&self, fields: &[&'static str; 3]) -> Result<Combatant<'c>> {
        let [species, ability, investment] = *fields;
        Ok(Combatant {
            species: self
                .species
                .ok_or(CalcError::IncompleteConfiguration { field: species })?,
            ability: self
                .ability
                .ok_or(CalcError::IncompleteConfiguration { field: ability })?,
            item: self.item,
            override_affinity: self.override_affinity,
            rank: self.rank,
            level: self.level,
            investment: self
                .investment
                .ok_or(CalcError::IncompleteConfiguration { field: investment })?,
            quality: self.quality,
            growth: self.growth,
            investments: self.investments,
            qualities: self.qualities,
            nature: self.nature,
        })
    }
}

const ATTACKER_FIELDS: [&str; 3] = ["attacker species", "attacker ability", "attacker investment"];
const DEFENDER_FIELDS: [&str; 3] = ["defender species", "defender ability", "defender investment"];

/// A configuration whose fields may still be unset.
#[derive(Debug, Clone)]
pub struct ConfigDraft<'c> {
    pub attacker: CombatantDraft<'c>,
    pub defender: CombatantDraft<'c>,
    pub action: Option<&'c Entity<Action>>,
    pub conditions: Vec<&'c Entity<Condition>>,
    pub vitality_investment: Option<u16>,
    pub vitality_quality: u8,
}

impl<'c> Default for ConfigDraft<'c> {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL, DEFAULT_QUALITY)
    }
}

impl<'c> ConfigDraft<'c> {
    /// An empty draft; both combatants start at `level` and `quality`.
    pub fn new(level: u8, quality: u8) -> Self {
        Self {
            attacker: CombatantDraft::new(level, quality),
            defender: CombatantDraft::new(level, quality),
            action: None,
            conditions: Vec::new(),
            vitality_investment: None,
            vitality_quality: quality,
        }
    }

    /// Check every required field and produce the resolved configuration.
    ///
    /// Fields are checked in a fixed order: action, vitality investment,
    /// then attacker and defender species, ability and investment.
    pub fn finish(&self) -> Result<BattleConfig<'c>> {
        let action = self.action.ok_or(CalcError::IncompleteConfiguration { field: "action" })?;
        let vitality_investment = self
            .vitality_investment
            .ok_or(CalcError::IncompleteConfiguration {
                field: "vitality investment",
            })?;
        Ok(BattleConfig {
            attacker: self.attacker.finish(&ATTACKER_FIELDS)?,
            defender: self.defender.finish(&DEFENDER_FIELDS)?,
            action,
            conditions: self.conditions.clone(),
            vitality_investment,
            vitality_quality: self.vitality_quality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::catalog::Target;

    fn species() -> Entity<Species> {
        Entity::new(
            "garchomp",
            "Garchomp",
            vec!["garchomp".into()],
            Species {
                affinities: vec!["dragon".into(), "ground".into()],
                stats: StatBlock::new([108, 130, 95, 80, 85, 102]),
                abilities: vec!["rough-skin".into()],
                moves: vec![],
            },
        )
    }

    fn action() -> Entity<Action> {
        Entity::new(
            "earthquake",
            "Earthquake",
            vec!["earthquake".into()],
            Action {
                power: 100,
                category: Category::Physical,
                target: Target::AllOtherPokemon,
                affinity: "ground".into(),
            },
        )
    }

    #[test]
    fn test_finish_reports_first_missing_field() {
        let species = species();
        let action = action();
        let ability = Entity::new("rough-skin", "Rough Skin", vec![], Ability {});

        let mut draft = ConfigDraft::default();
        assert_eq!(
            draft.finish().unwrap_err(),
            CalcError::IncompleteConfiguration { field: "action" }
        );

        draft.action = Some(&action);
        draft.vitality_investment = Some(0);
        draft.attacker.species = Some(&species);
        assert_eq!(
            draft.finish().unwrap_err(),
            CalcError::IncompleteConfiguration {
                field: "attacker ability"
            }
        );

        draft.attacker.ability = Some(&ability);
        draft.attacker.investment = Some(252);
        draft.defender.species = Some(&species);
        draft.defender.ability = Some(&ability);
        assert_eq!(
            draft.finish().unwrap_err(),
            CalcError::IncompleteConfiguration {
                field: "defender investment"
            }
        );

        draft.defender.investment = Some(0);
        let config = draft.finish().unwrap();
        assert_eq!(config.attacker.item_id(), "");
        assert_eq!(config.defender_vitality(), 183);
    }

    #[test]
    fn test_per_stat_overrides() {
        let species = species();
        let action = action();
        let ability = Entity::new("rough-skin", "Rough Skin", vec![], Ability {});
        let mut draft = ConfigDraft::default();
        draft.action = Some(&action);
        draft.vitality_investment = Some(0);
        for side in [&mut draft.attacker, &mut draft.defender] {
            side.species = Some(&species);
            side.ability = Some(&ability);
            side.set_build(0, Growth::Neutral);
        }
        draft.defender.investments = Some(StatBlock::new([252, 0, 4, 0, 0, 0]));
        draft.attacker.nature = Some(NaturePair::parse("a-c").unwrap());

        let config = draft.finish().unwrap();
        assert_eq!(config.defender_vitality_inputs(), (252, 31));
        assert_eq!(config.defender.stat_inputs(StatKind::Defense).investment, 4);
        assert_eq!(config.attacker.stat_inputs(StatKind::Offense).growth, Growth::Boosting);
        assert_eq!(
            config.attacker.stat_inputs(StatKind::SpecialOffense).growth,
            Growth::Hindering
        );
    }
}
