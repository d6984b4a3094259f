//! Fixed action classifications.
//!
//! Several modifier rules key on a family of actions (punching, recoil,
//! sound, ...) rather than on a single name. The families are closed name
//! lists; the dataset does not carry these flags.

use crate::catalog::Category;

const PUNCHING: &[&str] = &[
    "mega-punch",
    "fire-punch",
    "ice-punch",
    "thunder-punch",
    "dizzy-punch",
    "mach-punch",
    "dynamic-punch",
    "focus-punch",
    "meteor-mash",
    "shadow-punch",
    "hammer-arm",
    "ice-hammer",
    "bullet-punch",
    "drain-punch",
    "plasma-fists",
    "wicked-blow",
    "surging-strikes",
];

const RECOIL: &[&str] = &[
    "double-edge",
    "wood-hammer",
    "brave-bird",
    "take-down",
    "submission",
    "volt-tackle",
    "flare-blitz",
    "head-smash",
    "high-jump-kick",
    "head-charge",
    "wild-charge",
];

/// Physical actions that do not make contact.
const NON_CONTACT_PHYSICAL: &[&str] = &[
    "triple-arrows",
    "grav-apple",
    "aqua-cutter",
    "hyperspace-fury",
    "order-up",
    "rock-throw",
    "rock-slide",
    "smack-down",
    "aura-wheel",
    "last-respects",
    "pyro-ball",
    "spirit-shackle",
    "rock-tomb",
    "rock-wrecker",
    "lands-wrath",
    "fusion-bolt",
    "attack-order",
    "ice-shard",
    "sky-attack",
    "leafage",
    "psycho-cut",
    "thousand-arrows",
    "thousand-waves",
    "salt-cure",
    "earthquake",
    "natural-gift",
    "bulldoze",
    "self-destruct",
    "shadow-bone",
    "fissure",
    "scale-shot",
    "meteor-assault",
    "stone-edge",
    "sand-tomb",
    "sacred-fire",
    "wicked-torque",
    "explosion",
    "raging-fury",
    "diamond-storm",
    "gunk-shot",
    "seed-bomb",
    "bullet-seed",
    "twineedle",
    "egg-bomb",
    "barrage",
    "precipice-blades",
    "ivy-cudgel",
    "icicle-crash",
    "icicle-spear",
    "gigaton-hammer",
    "tera-starstorm",
    "tera-blast",
    "poison-sting",
    "barb-barrage",
    "spike-cannon",
    "dragon-darts",
    "drum-beating",
    "flower-trick",
    "fling",
    "pay-day",
    "blazing-torque",
    "razor-leaf",
    "petal-blizzard",
    "secret-power",
    "mountain-gale",
    "combat-torque",
    "feint",
    "photon-geyser",
    "beat-up",
    "freeze-shock",
    "glacial-lance",
    "present",
    "bone-rush",
    "noxious-torque",
    "poltergeist",
    "bone-club",
    "bonemerang",
    "magical-torque",
    "magnitude",
    "magnet-bomb",
    "pin-missile",
    "metal-burst",
    "rock-blast",
];

/// Special actions that make contact.
const CONTACT_SPECIAL: &[&str] = &[
    "electro-drift",
    "trump-card",
    "grass-knot",
    "wring-out",
    "draining-kiss",
    "petal-dance",
    "infestation",
];

const SOUND: &[&str] = &[
    "relic-song",
    "snore",
    "heal-bell",
    "screech",
    "sing",
    "sparkling-aria",
    "echoed-voice",
    "overdrive",
    "chatter",
    "noble-roar",
    "metal-sound",
    "grass-whistle",
    "psychic-noise",
    "uproar",
    "clanging-scales",
    "parting-shot",
    "clangorous-soul",
    "shadow-panic",
    "disarming-voice",
    "supersonic",
    "howl",
    "confide",
    "growl",
    "snarl",
    "hyper-voice",
    "boomburst",
    "eerie-spell",
    "torch-song",
    "clangorous-soulblaze",
    "roar",
    "perish-song",
    "alluring-voice",
    "bug-buzz",
    "round",
];

/// Actions with a secondary effect that sheer force removes.
const SECONDARY_EFFECT: &[&str] = &[
    "poison-sting",
    "smog",
    "poison-tail",
    "cross-poison",
    "sludge",
    "poison-jab",
    "sludge-bomb",
    "shell-side-arm",
    "sludge-wave",
    "gunk-shot",
    "poison-fang",
    "ember",
    "flame-wheel",
    "fire-punch",
    "burning-jealousy",
    "lava-plume",
    "blaze-kick",
    "flamethrower",
    "heat-wave",
    "inferno",
    "sacred-fire",
    "searing-shot",
    "fire-blast",
    "flare-blitz",
    "blue-flare",
    "scald",
    "steam-eruption",
    "ice-burn",
    "scorching-sands",
    "powder-snow",
    "ice-punch",
    "freeze-dry",
    "ice-beam",
    "blizzard",
    "freezing-glare",
    "body-slam",
    "nuzzle",
    "thunder-shock",
    "spark",
    "thunder-punch",
    "discharge",
    "thunderbolt",
    "thunder",
    "zap-cannon",
    "volt-tackle",
    "bolt-strike",
    "freeze-shock",
    "force-palm",
    "bounce",
    "lick",
    "dragon-breath",
    "tri-attack",
    "water-pulse",
    "dynamic-punch",
    "chatter",
    "hurricane",
    "confusion",
    "psybeam",
    "strange-steam",
    "fake-out",
    "snore",
    "stomp",
    "headbutt",
    "waterfall",
    "zing-zap",
    "icicle-crash",
    "air-slash",
    "sky-attack",
    "heart-stamp",
    "zen-headbutt",
    "extrasensory",
    "rock-slide",
    "astonish",
    "twister",
    "dragon-rush",
    "bite",
    "dark-pulse",
    "fiery-wrath",
    "double-iron-bash",
    "iron-head",
    "fire-fang",
    "thunder-fang",
    "ice-fang",
    "trop-kick",
    "aurora-beam",
    "lunge",
    "breaking-swipe",
    "play-rough",
    "crush-claw",
    "fire-lash",
    "razor-shell",
    "liquidation",
    "grav-apple",
    "rock-smash",
    "thunderous-kick",
    "shadow-bone",
    "crunch",
    "iron-tail",
    "mystical-fire",
    "mist-ball",
    "struggle-bug",
    "skitter-smack",
    "snarl",
    "spirit-break",
    "moonblast",
    "energy-ball",
    "seed-flare",
    "apple-acid",
    "focus-blast",
    "acid",
    "acid-spray",
    "earth-power",
    "luster-purge",
    "psychic",
    "bug-buzz",
    "shadow-ball",
    "flash-cannon",
    "bubble-beam",
    "electroweb",
    "drum-beating",
    "icy-wind",
    "glaciate",
    "low-sweep",
    "mud-shot",
    "bulldoze",
    "rock-tomb",
    "octazooka",
    "muddy-water",
    "leaf-tornado",
    "mud-slap",
    "night-daze",
    "power-up-punch",
    "metal-claw",
    "meteor-mash",
    "diamond-storm",
    "steel-wing",
    "fiery-dance",
    "charge-beam",
    "rapid-spin",
    "flame-charge",
    "aura-wheel",
    "ancient-power",
    "secret-power",
    "spirit-shackle",
    "anchor-shot",
    "throat-chop",
    "sparkling-aria",
    "eerie-spell",
];

const SLICING: &[&str] = &[
    "aqua-cutter",
    "cut",
    "air-cutter",
    "air-slash",
    "stone-axe",
    "behemoth-blade",
    "slash",
    "cross-poison",
    "psycho-cut",
    "psyblade",
    "razor-shell",
    "x-scissor",
    "secret-sword",
    "sacred-sword",
    "solar-blade",
    "tachyon-cutter",
    "night-slash",
    "aerial-ace",
    "kowtow-cleave",
    "population-bomb",
    "razor-leaf",
    "mighty-cleave",
    "ceaseless-edge",
    "bitter-blade",
    "leaf-blade",
    "fury-cutter",
];

const BITING: &[&str] = &[
    "fishious-rend",
    "crunch",
    "bite",
    "thunder-fang",
    "jaw-lock",
    "ice-fang",
    "psychic-fangs",
    "poison-fang",
    "hyper-fang",
    "fire-fang",
];

const PULSE: &[&str] = &[
    "dark-pulse",
    "origin-pulse",
    "terrain-pulse",
    "aura-sphere",
    "water-pulse",
    "dragon-pulse",
];

pub fn is_punching(action: &str) -> bool {
    PUNCHING.contains(&action)
}

pub fn is_recoil(action: &str) -> bool {
    RECOIL.contains(&action)
}

/// Whether the action makes contact. Uses the declared category.
pub fn is_contact(action: &str, category: Category) -> bool {
    match category {
        Category::Physical => !NON_CONTACT_PHYSICAL.contains(&action),
        Category::Special => CONTACT_SPECIAL.contains(&action),
        Category::Status => false,
    }
}

pub fn is_sound(action: &str) -> bool {
    SOUND.contains(&action)
}

pub fn has_secondary_effect(action: &str) -> bool {
    SECONDARY_EFFECT.contains(&action)
}

pub fn is_slicing(action: &str) -> bool {
    SLICING.contains(&action)
}

pub fn is_biting(action: &str) -> bool {
    BITING.contains(&action)
}

pub fn is_pulse(action: &str) -> bool {
    PULSE.contains(&action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_depends_on_category() {
        assert!(is_contact("close-combat", Category::Physical));
        assert!(!is_contact("earthquake", Category::Physical));
        assert!(is_contact("grass-knot", Category::Special));
        assert!(!is_contact("flamethrower", Category::Special));
        assert!(!is_contact("swords-dance", Category::Status));
    }

    #[test]
    fn test_family_lists() {
        assert!(is_punching("drain-punch"));
        assert!(is_recoil("flare-blitz"));
        assert!(is_sound("boomburst"));
        assert!(has_secondary_effect("flamethrower"));
        assert!(is_slicing("leaf-blade"));
        assert!(is_biting("crunch"));
        assert!(is_pulse("dragon-pulse"));
        assert!(!is_punching("tackle"));
    }
}
