//! Canonical identifiers the calculator consults by name.
//!
//! The catalog is data-driven; these are the identifiers of records whose
//! presence changes the calculation. A dataset that lacks one of them
//! simply never triggers the corresponding rule.

/// Battlefield and status conditions.
pub mod condition {
    pub const SUN: &str = "sun";
    pub const RAIN: &str = "rain";
    pub const SANDSTORM: &str = "sandstorm";
    pub const SNOW: &str = "snow";
    pub const ELECTRIC_TERRAIN: &str = "electric-terrain";
    pub const GRASSY_TERRAIN: &str = "grassy-terrain";
    pub const MISTY_TERRAIN: &str = "misty-terrain";
    pub const PSYCHIC_TERRAIN: &str = "psychic-terrain";
    pub const SCREEN: &str = "screen";
    pub const DOUBLES: &str = "doubles";
    pub const CRITICAL_HIT: &str = "critical-hit";
    pub const BURN: &str = "burn";
    pub const FORCE_PHYSICAL: &str = "force-physical";
    pub const FORCE_SPECIAL: &str = "force-special";
    pub const GLAIVE_RUSH: &str = "glaive-rush";
    pub const KNOCK_OFF_ITEM: &str = "knock-off-item";
    pub const GRAVITY: &str = "gravity";
    pub const CHARGE: &str = "charge";
    pub const RIVALRY_WEAKENED: &str = "rivalry-weakened";
    pub const RIVALRY_BOOSTED: &str = "rivalry-boosted";
    pub const SUPREME_OVERLORD_1: &str = "supreme-overlord-1";
    pub const SUPREME_OVERLORD_2: &str = "supreme-overlord-2";
    pub const SUPREME_OVERLORD_3: &str = "supreme-overlord-3";
    pub const SUPREME_OVERLORD_4: &str = "supreme-overlord-4";
    pub const SUPREME_OVERLORD_5: &str = "supreme-overlord-5";
    pub const ANALYTIC_ACTIVE: &str = "analytic-active";
    pub const FLARE_BOOST_ACTIVE: &str = "flare-boost-active";
    pub const TOXIC_BOOST_ACTIVE: &str = "toxic-boost-active";
    pub const BRINE_HALF_HP: &str = "brine-half-hp";
    pub const FACADE_STATUS: &str = "facade-status";
    pub const VENOSHOCK_POISONED: &str = "venoshock-poisoned";
    pub const RETALIATE_BOOSTED: &str = "retaliate-boosted";
    pub const FUSION_BOOSTED: &str = "fusion-boosted";
    pub const ACROBATICS_NO_ITEM: &str = "acrobatics-no-item";
    pub const FISHIOUS_REND_BOOSTED: &str = "fishious-rend-boosted";
    pub const BOLT_BEAK_BOOSTED: &str = "bolt-beak-boosted";
    pub const ASSURANCE_BOOSTED: &str = "assurance-boosted";
    pub const HEX_STATUS: &str = "hex-status";
    pub const INFERNAL_PARADE_STATUS: &str = "infernal-parade-status";
    pub const SLOW_START_ACTIVE: &str = "slow-start-active";
    pub const DEFEATIST_ACTIVE: &str = "defeatist-active";
    pub const BOOSTER_ATTACK: &str = "booster-attack";
    pub const BOOSTER_DEFENSE: &str = "booster-defense";
    pub const GUTS_ACTIVE: &str = "guts-active";
    pub const OVERGROW_ACTIVE: &str = "overgrow-active";
    pub const BLAZE_ACTIVE: &str = "blaze-active";
    pub const TORRENT_ACTIVE: &str = "torrent-active";
    pub const SWARM_ACTIVE: &str = "swarm-active";
    pub const FLASH_FIRE_ACTIVE: &str = "flash-fire-active";
    pub const STAKEOUT_ACTIVE: &str = "stakeout-active";
    pub const MARVEL_SCALE_ACTIVE: &str = "marvel-scale-active";
    pub const MULTISCALE_ACTIVE: &str = "multiscale-active";
    pub const SHADOW_SHIELD_ACTIVE: &str = "shadow-shield-active";
    pub const METRONOME_2: &str = "metronome-2";
    pub const METRONOME_3: &str = "metronome-3";
    pub const METRONOME_4: &str = "metronome-4";
    pub const METRONOME_5: &str = "metronome-5";
    pub const METRONOME_6: &str = "metronome-6";
    pub const MINIMIZED: &str = "minimized";
    pub const DIGGING: &str = "digging";
    pub const DIVING: &str = "diving";
}

/// Held items.
pub mod item {
    pub const MUSCLE_BAND: &str = "muscle-band";
    pub const WISE_GLASSES: &str = "wise-glasses";
    pub const PUNCHING_GLOVE: &str = "punching-glove";
    /// Generic 1.2x power item, matching any affinity.
    pub const TYPE_BOOST: &str = "type-boost";
    /// Suffix of the per-affinity 1.2x items, e.g. `fire-boost`.
    pub const TYPE_BOOST_SUFFIX: &str = "-boost";
    pub const ADAMANT_ORB: &str = "adamant-orb";
    pub const LUSTROUS_ORB: &str = "lustrous-orb";
    pub const GRISEOUS_ORB: &str = "griseous-orb";
    pub const SOUL_DEW: &str = "soul-dew";
    pub const OGERPON_MASK: &str = "ogerpon-mask";
    pub const NORMAL_GEM: &str = "normal-gem";
    /// Generic choice item, boosting either category.
    pub const CHOICE_ITEM: &str = "choice-item";
    pub const CHOICE_BAND: &str = "choice-band";
    pub const CHOICE_SPECS: &str = "choice-specs";
    pub const THICK_CLUB: &str = "thick-club";
    pub const DEEP_SEA_TOOTH: &str = "deep-sea-tooth";
    pub const LIGHT_BALL: &str = "light-ball";
    pub const EVIOLITE: &str = "eviolite";
    pub const ASSAULT_VEST: &str = "assault-vest";
    pub const DEEP_SEA_SCALE: &str = "deep-sea-scale";
    pub const METAL_POWDER: &str = "metal-powder";
    pub const METRONOME: &str = "metronome";
    pub const EXPERT_BELT: &str = "expert-belt";
    pub const LIFE_ORB: &str = "life-orb";
    /// Generic super-effective-halving berry.
    pub const RESIST_BERRY: &str = "resist-berry";
    pub const CHILAN_BERRY: &str = "chilan-berry";
    /// Placeholder held by forms whose item is fixed and irrelevant.
    pub const NO_ITEM: &str = "no-item";
}

/// Abilities.
pub mod ability {
    pub const ADAPTABILITY: &str = "adaptability";
    pub const PIXILATE: &str = "pixilate";
    pub const GALVANIZE: &str = "galvanize";
    pub const GUTS: &str = "guts";
    pub const HUSTLE: &str = "hustle";
}

/// Affinities.
pub mod affinity {
    pub const NORMAL: &str = "normal";
    pub const FAIRY: &str = "fairy";
    pub const ELECTRIC: &str = "electric";
    pub const WATER: &str = "water";
    pub const FIRE: &str = "fire";
    pub const ROCK: &str = "rock";
    pub const ICE: &str = "ice";
    /// The universal affinity tag: super effective against any combatant
    /// holding an override affinity.
    pub const STELLAR: &str = "stellar";
}

/// Species with hard-coded fixups.
pub mod species {
    pub const TERAPAGOS_STELLAR: &str = "terapagos-stellar";
    pub const ZACIAN_CROWNED: &str = "zacian-crowned";
    pub const ZAMAZENTA_CROWNED: &str = "zamazenta-crowned";
    pub const OGERPON_WELLSPRING: &str = "ogerpon-wellspring-mask";
    pub const OGERPON_HEARTHFLAME: &str = "ogerpon-hearthflame-mask";
    pub const OGERPON_CORNERSTONE: &str = "ogerpon-cornerstone-mask";
}

/// Actions with hard-coded behavior.
pub mod action {
    pub const TERA_BLAST: &str = "tera-blast";
    pub const IVY_CUDGEL: &str = "ivy-cudgel";
    pub const PSYSHOCK: &str = "psyshock";
    pub const BODY_PRESS: &str = "body-press";
    pub const FOUL_PLAY: &str = "foul-play";
    pub const FACADE: &str = "facade";
}
