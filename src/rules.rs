//! Modifier rule tables.
//!
//! Each stage of the damage pipeline owns an ordered table of
//! `(predicate, factor)` rules. Rules are evaluated in table order against
//! an immutable [`RuleContext`]; every rule that applies folds its factor
//! into the running correction with [`Modifier::chain`]. The order matters
//! because each fold rounds.
//!
//! Final-stage steps use the same shape but are applied one by one to the
//! damage value rather than folded.

use crate::context::RuleContext;
use crate::flags;
use crate::ids::{action, condition, item};
use crate::numeric::Modifier;
use tracing::debug;

/// One conditional correction.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short human-readable name, recorded when the rule fires.
    pub name: &'static str,
    pub factor: Modifier,
    pub applies: fn(&RuleContext) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("factor", &self.factor)
            .finish()
    }
}

/// Fold every applicable rule of `rules` into one correction.
///
/// Names of the rules that fired are appended to `applied`.
pub fn accumulate(rules: &[Rule], ctx: &RuleContext, applied: &mut Vec<&'static str>) -> Modifier {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .fold(Modifier::ONE, |acc, rule| {
            debug!(rule = rule.name, factor = rule.factor.raw(), "modifier applied");
            applied.push(rule.name);
            acc.chain(rule.factor)
        })
}

/// Apply every applicable step of `steps` to `value` in order, rounding
/// half-down after each.
pub fn apply_steps(steps: &[Rule], ctx: &RuleContext, value: u32, applied: &mut Vec<&'static str>) -> u32 {
    steps
        .iter()
        .filter(|step| (step.applies)(ctx))
        .fold(value, |acc, step| {
            debug!(rule = step.name, factor = step.factor.raw(), "final-stage step applied");
            applied.push(step.name);
            step.factor.apply(acc)
        })
}

/// Actions whose power doubles while the paired condition is active.
pub const POWER_DOUBLING: &[(&str, &str)] = &[
    ("acrobatics", condition::ACROBATICS_NO_ITEM),
    ("fishious-rend", condition::FISHIOUS_REND_BOOSTED),
    ("bolt-beak", condition::BOLT_BEAK_BOOSTED),
    ("assurance", condition::ASSURANCE_BOOSTED),
    ("hex", condition::HEX_STATUS),
    ("infernal-parade", condition::INFERNAL_PARADE_STATUS),
];

/// Whether `item` is a 1.2x item matching `affinity`.
fn boosts_affinity(item: &str, affinity: &str) -> bool {
    match item {
        item::TYPE_BOOST | item::OGERPON_MASK => true,
        item::ADAMANT_ORB => matches!(affinity, "dragon" | "steel"),
        item::LUSTROUS_ORB => matches!(affinity, "water" | "dragon"),
        item::GRISEOUS_ORB => matches!(affinity, "dragon" | "ghost"),
        item::SOUL_DEW => matches!(affinity, "psychic" | "dragon"),
        other => other.strip_suffix(item::TYPE_BOOST_SUFFIX) == Some(affinity),
    }
}

fn supreme_overlord(ctx: &RuleContext, level: &str) -> bool {
    ctx.attacker_ability == "supreme-overlord" && ctx.has(level)
}

fn paradox_ability(ability: &str) -> bool {
    matches!(ability, "quark-drive" | "protosynthesis")
}

const fn rule(name: &'static str, factor: u32, applies: fn(&RuleContext) -> bool) -> Rule {
    Rule {
        name,
        factor: Modifier(factor),
        applies,
    }
}

/// Power-stage rules.
pub static POWER_RULES: &[Rule] = &[
    rule("aura-break (dark)", 3072, |c| {
        c.defender_ability == "aura-break" && c.attacker_ability == "dark-aura" && c.affinity == "dark"
    }),
    rule("aura-break (fairy)", 3072, |c| {
        c.defender_ability == "aura-break" && c.attacker_ability == "fairy-aura" && c.affinity == "fairy"
    }),
    rule("rivalry (weakened)", 3072, |c| {
        c.attacker_ability == "rivalry" && c.has(condition::RIVALRY_WEAKENED)
    }),
    rule("supreme-overlord 1", 4506, |c| supreme_overlord(c, condition::SUPREME_OVERLORD_1)),
    rule("skin", 4915, |c| {
        matches!(c.attacker_ability, "pixilate" | "galvanize")
            && c.declared_affinity == "normal"
            && !(c.action == action::TERA_BLAST && c.attacker_override)
    }),
    rule("iron-fist", 4915, |c| {
        c.attacker_ability == "iron-fist" && flags::is_punching(c.action)
    }),
    rule("reckless", 4915, |c| c.attacker_ability == "reckless" && flags::is_recoil(c.action)),
    rule("supreme-overlord 2", 4915, |c| supreme_overlord(c, condition::SUPREME_OVERLORD_2)),
    rule("rivalry (boosted)", 5120, |c| {
        c.attacker_ability == "rivalry" && c.has(condition::RIVALRY_BOOSTED)
    }),
    rule("sheer-force", 5325, |c| {
        c.attacker_ability == "sheer-force" && flags::has_secondary_effect(c.action)
    }),
    rule("sand-force", 5325, |c| {
        c.attacker_ability == "sand-force"
            && c.has(condition::SANDSTORM)
            && c.affinity_in(&["rock", "ground", "steel"])
    }),
    rule("analytic", 5325, |c| {
        c.attacker_ability == "analytic" && c.has(condition::ANALYTIC_ACTIVE)
    }),
    rule("tough-claws", 5325, |c| {
        c.attacker_ability == "tough-claws"
            && flags::is_contact(c.action, c.declared_category)
            && c.attacker_item != item::PUNCHING_GLOVE
    }),
    rule("supreme-overlord 3", 5325, |c| supreme_overlord(c, condition::SUPREME_OVERLORD_3)),
    rule("punk-rock", 5325, |c| c.attacker_ability == "punk-rock" && flags::is_sound(c.action)),
    rule("fairy-aura", 5448, |c| {
        c.attacker_ability == "fairy-aura" && c.affinity == "fairy" && c.defender_ability != "aura-break"
    }),
    rule("dark-aura", 5448, |c| {
        c.attacker_ability == "dark-aura" && c.affinity == "dark" && c.defender_ability != "aura-break"
    }),
    rule("supreme-overlord 4", 5734, |c| supreme_overlord(c, condition::SUPREME_OVERLORD_4)),
    rule("sharpness", 6144, |c| c.attacker_ability == "sharpness" && flags::is_slicing(c.action)),
    rule("technician", 6144, |c| c.attacker_ability == "technician" && c.power <= 60),
    rule("flare-boost", 6144, |c| {
        c.attacker_ability == "flare-boost" && c.has(condition::FLARE_BOOST_ACTIVE) && c.is_special()
    }),
    rule("toxic-boost", 6144, |c| {
        c.attacker_ability == "toxic-boost" && c.has(condition::TOXIC_BOOST_ACTIVE) && c.is_physical()
    }),
    rule("strong-jaw", 6144, |c| c.attacker_ability == "strong-jaw" && flags::is_biting(c.action)),
    rule("mega-launcher", 6144, |c| {
        c.attacker_ability == "mega-launcher" && flags::is_pulse(c.action)
    }),
    rule("steely-spirit", 6144, |c| c.attacker_ability == "steely-spirit" && c.affinity == "steel"),
    rule("supreme-overlord 5", 6144, |c| supreme_overlord(c, condition::SUPREME_OVERLORD_5)),
    rule("psyblade", 6144, |c| c.action == "psyblade" && c.has(condition::ELECTRIC_TERRAIN)),
    rule("dry-skin (fire)", 5120, |c| c.defender_ability == "dry-skin" && c.affinity == "fire"),
    rule("muscle-band", 4505, |c| c.attacker_item == item::MUSCLE_BAND && c.is_physical()),
    rule("wise-glasses", 4505, |c| c.attacker_item == item::WISE_GLASSES && c.is_special()),
    rule("punching-glove", 4506, |c| {
        c.attacker_item == item::PUNCHING_GLOVE && flags::is_punching(c.action)
    }),
    rule("affinity item", 4915, |c| boosts_affinity(c.attacker_item, c.affinity)),
    rule("normal-gem", 5325, |c| c.attacker_item == item::NORMAL_GEM && c.affinity == "normal"),
    rule("solar power loss", 2048, |c| {
        matches!(c.action, "solar-beam" | "solar-blade")
            && (c.has(condition::RAIN) || c.has(condition::SANDSTORM) || c.has(condition::SNOW))
    }),
    rule("knock-off", 6144, |c| c.has(condition::KNOCK_OFF_ITEM)),
    rule("grav-apple", 6144, |c| c.action == "grav-apple" && c.has(condition::GRAVITY)),
    rule("expanding-force", 6144, |c| {
        c.action == "expanding-force" && c.has(condition::PSYCHIC_TERRAIN)
    }),
    rule("charge", 8192, |c| c.has(condition::CHARGE) && c.affinity == "electric"),
    rule("brine", 8192, |c| c.action == "brine" && c.has(condition::BRINE_HALF_HP)),
    rule("facade", 8192, |c| c.action == action::FACADE && c.has(condition::FACADE_STATUS)),
    rule("venoshock", 8192, |c| c.action == "venoshock" && c.has(condition::VENOSHOCK_POISONED)),
    rule("retaliate", 8192, |c| c.action == "retaliate" && c.has(condition::RETALIATE_BOOSTED)),
    rule("fusion", 8192, |c| {
        matches!(c.action, "fusion-bolt" | "fusion-flare") && c.has(condition::FUSION_BOOSTED)
    }),
    rule("rising-voltage", 8192, |c| {
        c.action == "rising-voltage" && c.has(condition::ELECTRIC_TERRAIN)
    }),
    rule("terrain weakening", 2048, |c| {
        (c.has(condition::GRASSY_TERRAIN) && matches!(c.action, "earthquake" | "bulldoze"))
            || (c.has(condition::MISTY_TERRAIN) && c.affinity == "dragon")
    }),
    rule("terrain boost", 5325, |c| {
        (c.has(condition::ELECTRIC_TERRAIN) && c.affinity == "electric")
            || (c.has(condition::GRASSY_TERRAIN) && c.affinity == "grass")
            || (c.has(condition::PSYCHIC_TERRAIN) && c.affinity == "psychic")
    }),
];

/// Attack-stat rules.
pub static ATTACK_RULES: &[Rule] = &[
    rule("slow-start", 2048, |c| {
        c.attacker_ability == "slow-start" && c.has(condition::SLOW_START_ACTIVE) && c.is_physical()
    }),
    rule("defeatist", 2048, |c| {
        c.attacker_ability == "defeatist" && c.has(condition::DEFEATIST_ACTIVE)
    }),
    rule("vessel-of-ruin", 3072, |c| c.defender_ability == "vessel-of-ruin" && c.is_special()),
    rule("tablets-of-ruin", 3072, |c| c.defender_ability == "tablets-of-ruin" && c.is_physical()),
    rule("booster (attack)", 5325, |c| {
        c.has(condition::BOOSTER_ATTACK) && paradox_ability(c.attacker_ability)
    }),
    rule("transistor", 5325, |c| c.attacker_ability == "transistor" && c.affinity == "electric"),
    rule("hadron-engine", 5461, |c| {
        c.attacker_ability == "hadron-engine" && c.has(condition::ELECTRIC_TERRAIN) && c.is_special()
    }),
    rule("orichalcum-pulse", 5461, |c| {
        c.attacker_ability == "orichalcum-pulse" && c.has(condition::SUN) && c.is_physical()
    }),
    rule("flower-gift (attack)", 6144, |c| {
        c.attacker_ability == "flower-gift" && c.has(condition::SUN)
    }),
    rule("guts", 6144, |c| c.has(condition::GUTS_ACTIVE)),
    rule("overgrow", 6144, |c| {
        c.attacker_ability == "overgrow" && c.has(condition::OVERGROW_ACTIVE) && c.affinity == "grass"
    }),
    rule("blaze", 6144, |c| {
        c.attacker_ability == "blaze" && c.has(condition::BLAZE_ACTIVE) && c.affinity == "fire"
    }),
    rule("torrent", 6144, |c| {
        c.attacker_ability == "torrent" && c.has(condition::TORRENT_ACTIVE) && c.affinity == "water"
    }),
    rule("swarm", 6144, |c| {
        c.attacker_ability == "swarm" && c.has(condition::SWARM_ACTIVE) && c.affinity == "bug"
    }),
    rule("flash-fire", 6144, |c| {
        c.attacker_ability == "flash-fire" && c.has(condition::FLASH_FIRE_ACTIVE) && c.affinity == "fire"
    }),
    rule("solar-power", 6144, |c| {
        c.attacker_ability == "solar-power" && c.has(condition::SUN) && c.is_special()
    }),
    rule("rocky-payload", 6144, |c| c.attacker_ability == "rocky-payload" && c.affinity == "rock"),
    rule("steelworker", 6144, |c| c.attacker_ability == "steelworker" && c.affinity == "steel"),
    rule("gorilla-tactics", 6144, |c| c.attacker_ability == "gorilla-tactics" && c.is_physical()),
    rule("dragons-maw", 6144, |c| c.attacker_ability == "dragons-maw" && c.affinity == "dragon"),
    rule("huge-power", 8192, |c| c.attacker_ability == "huge-power" && c.is_physical()),
    rule("pure-power", 8192, |c| c.attacker_ability == "pure-power" && c.is_physical()),
    rule("water-bubble (attack)", 8192, |c| {
        c.attacker_ability == "water-bubble" && c.affinity == "water"
    }),
    rule("stakeout", 8192, |c| c.attacker_ability == "stakeout" && c.has(condition::STAKEOUT_ACTIVE)),
    rule("thick-fat", 2048, |c| c.defender_ability == "thick-fat" && c.affinity_in(&["fire", "ice"])),
    rule("heatproof", 2048, |c| c.defender_ability == "heatproof" && c.affinity == "fire"),
    rule("water-bubble (defense)", 2048, |c| {
        c.defender_ability == "water-bubble" && c.affinity == "fire"
    }),
    rule("purifying-salt", 2048, |c| c.defender_ability == "purifying-salt" && c.affinity == "ghost"),
    rule("choice item", 6144, |c| c.attacker_item == item::CHOICE_ITEM),
    rule("choice-band", 6144, |c| c.attacker_item == item::CHOICE_BAND && c.is_physical()),
    rule("choice-specs", 6144, |c| c.attacker_item == item::CHOICE_SPECS && c.is_special()),
    rule("thick-club", 8192, |c| c.attacker_item == item::THICK_CLUB && c.is_physical()),
    rule("deep-sea-tooth", 8192, |c| c.attacker_item == item::DEEP_SEA_TOOTH && c.is_special()),
    rule("light-ball", 8192, |c| c.attacker_item == item::LIGHT_BALL),
];

/// Defense-stat rules.
pub static DEFENSE_RULES: &[Rule] = &[
    rule("beads-of-ruin", 3072, |c| {
        c.attacker_ability == "beads-of-ruin" && c.is_special() && c.action != action::PSYSHOCK
    }),
    rule("sword-of-ruin", 3072, |c| {
        c.attacker_ability == "sword-of-ruin" && (c.is_physical() || c.action == action::PSYSHOCK)
    }),
    rule("booster (defense)", 5325, |c| {
        c.has(condition::BOOSTER_DEFENSE) && paradox_ability(c.defender_ability)
    }),
    rule("flower-gift (defense)", 6144, |c| {
        c.defender_ability == "flower-gift" && c.has(condition::SUN) && c.is_special()
    }),
    rule("marvel-scale", 6144, |c| {
        c.defender_ability == "marvel-scale" && c.has(condition::MARVEL_SCALE_ACTIVE) && c.is_physical()
    }),
    rule("grass-pelt", 6144, |c| {
        c.defender_ability == "grass-pelt" && c.has(condition::GRASSY_TERRAIN) && c.is_physical()
    }),
    rule("fur-coat", 8192, |c| c.defender_ability == "fur-coat" && c.is_physical()),
    rule("eviolite", 6144, |c| c.defender_item == item::EVIOLITE),
    rule("assault-vest", 6144, |c| {
        c.defender_item == item::ASSAULT_VEST && c.is_special() && c.action != action::PSYSHOCK
    }),
    rule("deep-sea-scale", 8192, |c| c.defender_item == item::DEEP_SEA_SCALE && c.is_special()),
    rule("metal-powder", 8192, |c| c.defender_item == item::METAL_POWDER && c.is_physical()),
];

/// Damage rules, applied per outcome after the burn correction.
pub static DAMAGE_RULES: &[Rule] = &[
    rule("screen (spread)", 2732, |c| c.has(condition::SCREEN) && c.is_spread_in_doubles()),
    rule("screen", 2048, |c| c.has(condition::SCREEN) && !c.is_spread_in_doubles()),
    rule("neuroforce", 5120, |c| {
        c.attacker_ability == "neuroforce" && c.effectiveness.is_super_effective()
    }),
    rule("collision-course", 5461, |c| {
        c.action == "collision-course" && c.effectiveness.is_super_effective()
    }),
    rule("electro-drift", 5461, |c| {
        c.action == "electro-drift" && c.effectiveness.is_super_effective()
    }),
    rule("sniper", 6144, |c| c.attacker_ability == "sniper" && c.has(condition::CRITICAL_HIT)),
    rule("tinted-lens", 8192, |c| c.attacker_ability == "tinted-lens" && c.effectiveness.is_resisted()),
    rule("fluffy (fire)", 8192, |c| c.defender_ability == "fluffy" && c.affinity == "fire"),
    rule("multiscale", 2048, |c| {
        c.defender_ability == "multiscale" && c.has(condition::MULTISCALE_ACTIVE)
    }),
    rule("shadow-shield", 2048, |c| {
        c.defender_ability == "shadow-shield" && c.has(condition::SHADOW_SHIELD_ACTIVE)
    }),
    rule("fluffy (contact)", 2048, |c| {
        c.defender_ability == "fluffy" && flags::is_contact(c.action, c.declared_category)
    }),
    rule("punk-rock (defense)", 2048, |c| {
        c.defender_ability == "punk-rock" && flags::is_sound(c.action)
    }),
    rule("ice-scales", 2048, |c| c.defender_ability == "ice-scales" && c.is_special()),
    rule("solid-rock", 3072, |c| {
        c.defender_ability == "solid-rock" && c.effectiveness.is_super_effective()
    }),
    rule("filter", 3072, |c| c.defender_ability == "filter" && c.effectiveness.is_super_effective()),
    rule("prism-armor", 3072, |c| {
        c.defender_ability == "prism-armor" && c.effectiveness.is_super_effective()
    }),
    rule("metronome 2", 4915, |c| c.attacker_item == item::METRONOME && c.has(condition::METRONOME_2)),
    rule("metronome 3", 5734, |c| c.attacker_item == item::METRONOME && c.has(condition::METRONOME_3)),
    rule("metronome 4", 6553, |c| c.attacker_item == item::METRONOME && c.has(condition::METRONOME_4)),
    rule("metronome 5", 7372, |c| c.attacker_item == item::METRONOME && c.has(condition::METRONOME_5)),
    rule("metronome 6", 8192, |c| c.attacker_item == item::METRONOME && c.has(condition::METRONOME_6)),
    rule("expert-belt", 4915, |c| {
        c.attacker_item == item::EXPERT_BELT && c.effectiveness.is_super_effective()
    }),
    rule("life-orb", 5324, |c| c.attacker_item == item::LIFE_ORB),
    rule("resist berry", 2048, |c| {
        (c.defender_item == item::RESIST_BERRY && c.effectiveness.is_super_effective())
            || (c.defender_item == item::CHILAN_BERRY && c.affinity == "normal")
    }),
    rule("minimize", 8192, |c| {
        c.has(condition::MINIMIZED)
            && matches!(
                c.action,
                "stomp" | "steamroller" | "dragon-rush" | "heat-crash" | "flying-press" | "body-slam" | "heavy-slam"
            )
    }),
    rule("dig", 8192, |c| c.has(condition::DIGGING) && matches!(c.action, "earthquake" | "magnitude")),
    rule("dive", 8192, |c| c.has(condition::DIVING) && c.action == "surf"),
];

/// Steps applied in sequence to the base damage, before the random roll.
pub static FINAL_STEPS: &[Rule] = &[
    rule("spread", 3072, |c| c.is_spread_in_doubles()),
    rule("weather weakening", 2048, |c| {
        (c.has(condition::SUN) && c.affinity == "water") || (c.has(condition::RAIN) && c.affinity == "fire")
    }),
    rule("weather boost", 6144, |c| {
        (c.has(condition::SUN) && c.affinity == "fire") || (c.has(condition::RAIN) && c.affinity == "water")
    }),
    rule("glaive-rush", 8192, |c| c.has(condition::GLAIVE_RUSH)),
    rule("critical hit", 6144, |c| c.has(condition::CRITICAL_HIT)),
];
