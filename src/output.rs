//! Resolution results.
//!
//! An [`Output`] is the read-only result of running one configuration
//! through the damage engine: the sixteen roll outcomes, the stats that
//! produced them, the defender's vitality and the damage ratios against
//! it, plus a breakdown of the modifier rules that fired.

use crate::numeric::Effectiveness;
use crate::stats::StatInputs;
use serde::Serialize;
use std::fmt;

/// Number of random-roll outcomes.
pub const ROLL_COUNT: usize = 16;

/// Sixteen damage outcomes in ascending roll order.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::output::Damage;
///
/// let damage = Damage::new([51, 52, 53, 53, 54, 55, 55, 56, 57, 57, 58, 59, 59, 60, 60, 61]);
/// assert_eq!(damage.min(), 51);
/// assert_eq!(damage.max(), 61);
/// assert!((damage.average() - 56.25).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Damage {
    rolls: [u32; ROLL_COUNT],
}

impl Damage {
    pub fn new(rolls: [u32; ROLL_COUNT]) -> Self {
        Self { rolls }
    }

    /// Outcomes from the lowest roll (85) to the highest (100).
    pub fn rolls(&self) -> &[u32; ROLL_COUNT] {
        &self.rolls
    }

    pub fn min(&self) -> u32 {
        self.rolls[0]
    }

    pub fn max(&self) -> u32 {
        self.rolls[ROLL_COUNT - 1]
    }

    pub fn average(&self) -> f64 {
        self.rolls.iter().map(|&d| f64::from(d)).sum::<f64>() / ROLL_COUNT as f64
    }
}

/// One reported stat with the inputs it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportedStat {
    /// Derived value, before rank and modifiers.
    pub value: u32,
    pub investment: u16,
    pub quality: u8,
    /// Growth sign: `+`, `.` or `-`.
    pub growth: char,
}

impl ReportedStat {
    pub(crate) fn new(value: u32, inputs: StatInputs) -> Self {
        Self {
            value,
            investment: inputs.investment,
            quality: inputs.quality,
            growth: inputs.growth.sign(),
        }
    }
}

/// Result of resolving one configuration.
///
/// Never mutated after construction; every field is exposed through a
/// getter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    damage: Damage,
    attack: ReportedStat,
    defense: ReportedStat,
    vitality: u32,
    vitality_investment: u16,
    vitality_quality: u8,
    power: u32,
    effective_attack: u32,
    effective_defense: u32,
    effectiveness: Effectiveness,
    applied: Vec<&'static str>,
}

/// Builder-style parts handed over by the engine.
pub(crate) struct OutputParts {
    pub damage: Damage,
    pub attack: ReportedStat,
    pub defense: ReportedStat,
    pub vitality: u32,
    pub vitality_investment: u16,
    pub vitality_quality: u8,
    pub power: u32,
    pub effective_attack: u32,
    pub effective_defense: u32,
    pub effectiveness: Effectiveness,
    pub applied: Vec<&'static str>,
}

impl Output {
    pub(crate) fn from_parts(parts: OutputParts) -> Self {
        Self {
            damage: parts.damage,
            attack: parts.attack,
            defense: parts.defense,
            vitality: parts.vitality,
            vitality_investment: parts.vitality_investment,
            vitality_quality: parts.vitality_quality,
            power: parts.power,
            effective_attack: parts.effective_attack,
            effective_defense: parts.effective_defense,
            effectiveness: parts.effectiveness,
            applied: parts.applied,
        }
    }

    pub fn damage(&self) -> &Damage {
        &self.damage
    }

    /// Attacking stat as derived from its inputs.
    pub fn attack(&self) -> &ReportedStat {
        &self.attack
    }

    /// Defending stat as derived from its inputs.
    pub fn defense(&self) -> &ReportedStat {
        &self.defense
    }

    /// Defender's effective vitality.
    pub fn vitality(&self) -> u32 {
        self.vitality
    }

    pub fn vitality_investment(&self) -> u16 {
        self.vitality_investment
    }

    pub fn vitality_quality(&self) -> u8 {
        self.vitality_quality
    }

    /// Power after doubling and the power chain.
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Attacking stat after rank and the attack chain.
    pub fn effective_attack(&self) -> u32 {
        self.effective_attack
    }

    /// Defending stat after rank, weather and the defense chain.
    pub fn effective_defense(&self) -> u32 {
        self.effective_defense
    }

    pub fn effectiveness(&self) -> Effectiveness {
        self.effectiveness
    }

    /// Names of the modifier rules that fired, in application order.
    pub fn applied_rules(&self) -> &[&'static str] {
        &self.applied
    }

    pub fn min_ratio(&self) -> f64 {
        f64::from(self.damage.min()) / f64::from(self.vitality)
    }

    pub fn max_ratio(&self) -> f64 {
        f64::from(self.damage.max()) / f64::from(self.vitality)
    }

    pub fn average_ratio(&self) -> f64 {
        self.damage.average() / f64::from(self.vitality)
    }
}

impl fmt::Display for Output {
    /// One line: attack, vitality, defense, rolls from high to low, and
    /// the max~min percentage.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}({:>3}{}) {:>3}({:>3}) {:>3}({:>3}{})",
            self.attack.value,
            self.attack.investment,
            self.attack.growth,
            self.vitality,
            self.vitality_investment,
            self.defense.value,
            self.defense.investment,
            self.defense.growth,
        )?;
        for roll in self.damage.rolls.iter().rev() {
            write!(f, " {roll:>3}")?;
        }
        write!(
            f,
            " {:>5.1}~{:>5.1}%",
            self.max_ratio() * 100.0,
            self.min_ratio() * 100.0
        )
    }
}
