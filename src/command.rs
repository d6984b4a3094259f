//! Command-line parsing.
//!
//! A command is a line of whitespace-separated tokens. A section cursor
//! decides where bare tokens and options go:
//!
//! | token  | section                                  |
//! |--------|------------------------------------------|
//! | `a`    | attacker (initial section)               |
//! | `b`    | defender                                 |
//! | `j`    | condition list                           |
//! | `save` | `save <key> <fragment...>`               |
//! | `del`  | `del <key>`                              |
//!
//! Value options consume the next token; flag options take none. An option
//! met inside the condition list goes to the combatant section that was
//! active before it, and condition collection resumes after it. `p <key>`
//! splices a saved preset fragment in place and scanning continues at the
//! same position.
//!
//! Parsing only classifies tokens and validates numeric arguments; names
//! are resolved against the catalog by [`crate::assembler`].

use crate::error::{CalcError, Result};
use crate::preset::PresetStore;
use crate::stats::{Growth, NaturePair, StatBlock, MAX_INVESTMENT, MAX_QUALITY};

/// Token that splices a preset fragment.
pub const PRESET_TOKEN: &str = "p";

/// Options that consume one argument.
pub const VALUE_OPTIONS: [&str; 16] = [
    "to", "tox", "d", "k", "s", "m", "r", "t", "l", "w", "wx", "h", "hk", "d6", "k6", "seikaku",
];

/// Options that take no argument.
pub const FLAG_OPTIONS: [&str; 15] = [
    "akyoku", "ckyoku", "atokka", "ctokka", "bkyoku", "dkyoku", "btokka", "dtokka", "hb", "hd",
    "hkyoku", "amuburi", "cmuburi", "bmuburi", "dmuburi",
];

/// Upper bound on preset splices in one line, so a preset naming itself
/// cannot loop forever.
const MAX_PRESET_EXPANSIONS: usize = 32;

/// Section the cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Attacker,
    Defender,
    Conditions,
    Save,
    Delete,
}

impl Section {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "a" => Some(Section::Attacker),
            "b" => Some(Section::Defender),
            "j" => Some(Section::Conditions),
            "save" => Some(Section::Save),
            "del" => Some(Section::Delete),
            _ => None,
        }
    }
}

/// Which combatant an option was written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Attacker,
    Defender,
}

/// One parsed option with its validated argument.
///
/// Most settings apply to the combatant of the section they appear in.
/// `Action`, the vitality settings and the build shortcuts always target
/// a fixed combatant.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    /// `to` (restricted to the species' abilities) or `tox`.
    Ability { query: String, restricted: bool },
    /// `d`; `m` stands for the maximum.
    Investment(u16),
    /// `k`
    Quality(u8),
    /// `s a|n|k`
    Growth(Growth),
    /// `m`
    Item(String),
    /// `r`
    Rank(i8),
    /// `t`
    Override(String),
    /// `l`
    Level(u8),
    /// `w` (restricted to the attacker's moves) or `wx`.
    Action { query: String, restricted: bool },
    /// `h`
    VitalityInvestment(u16),
    /// `hk`
    VitalityQuality(u8),
    /// `d6`
    Investments(StatBlock),
    /// `k6`
    Qualities(StatBlock),
    /// `seikaku`
    Nature(NaturePair),
    /// `akyoku`, `atokka`, `amuburi` and their `c` twins.
    AttackerBuild { investment: u16, growth: Growth },
    /// `bkyoku`, `btokka`, `hb`, `hkyoku`, `bmuburi` and their `d` twins.
    DefenderBuild {
        investment: u16,
        growth: Growth,
        vitality: u16,
    },
}

impl Setting {
    /// Parse a value option and its argument.
    pub fn parse(option: &str, value: &str) -> Result<Self> {
        let setting = match option {
            "to" | "tox" => Setting::Ability {
                query: value.to_string(),
                restricted: option == "to",
            },
            "d" => Setting::Investment(match value {
                "m" => MAX_INVESTMENT,
                _ => investment(value)?,
            }),
            "k" => Setting::Quality(quality(value)?),
            "s" => Setting::Growth(match value {
                "a" => Growth::Boosting,
                "n" => Growth::Neutral,
                "k" => Growth::Hindering,
                _ => return Err(invalid(value)),
            }),
            "m" => Setting::Item(value.to_string()),
            "r" => {
                let rank: i8 = number(value)?;
                if !(-6..=6).contains(&rank) {
                    return Err(invalid(value));
                }
                Setting::Rank(rank)
            }
            "t" => Setting::Override(value.to_string()),
            "l" => {
                let level: u8 = number(value)?;
                if !(1..=100).contains(&level) {
                    return Err(invalid(value));
                }
                Setting::Level(level)
            }
            "w" | "wx" => Setting::Action {
                query: value.to_string(),
                restricted: option == "w",
            },
            "h" => Setting::VitalityInvestment(investment(value)?),
            "hk" => Setting::VitalityQuality(quality(value)?),
            "d6" => {
                let block = StatBlock::parse(value)?;
                if block.max_value() > MAX_INVESTMENT {
                    return Err(invalid(value));
                }
                Setting::Investments(block)
            }
            "k6" => {
                let block = StatBlock::parse(value)?;
                if block.max_value() > u16::from(MAX_QUALITY) {
                    return Err(invalid(value));
                }
                Setting::Qualities(block)
            }
            "seikaku" => Setting::Nature(NaturePair::parse(value)?),
            _ => return Err(invalid(option)),
        };
        Ok(setting)
    }

    /// The setting a flag option stands for.
    pub fn flag(option: &str) -> Option<Self> {
        let attacker = |investment, growth| Setting::AttackerBuild { investment, growth };
        let defender = |investment, growth, vitality| Setting::DefenderBuild {
            investment,
            growth,
            vitality,
        };
        match option {
            "akyoku" | "ckyoku" => Some(attacker(MAX_INVESTMENT, Growth::Neutral)),
            "atokka" | "ctokka" => Some(attacker(MAX_INVESTMENT, Growth::Boosting)),
            "amuburi" | "cmuburi" => Some(attacker(0, Growth::Neutral)),
            "bkyoku" | "dkyoku" => Some(defender(MAX_INVESTMENT, Growth::Neutral, 0)),
            "btokka" | "dtokka" => Some(defender(MAX_INVESTMENT, Growth::Boosting, 0)),
            "hb" | "hd" => Some(defender(MAX_INVESTMENT, Growth::Boosting, MAX_INVESTMENT)),
            "hkyoku" => Some(defender(0, Growth::Neutral, MAX_INVESTMENT)),
            "bmuburi" | "dmuburi" => Some(defender(0, Growth::Neutral, 0)),
            _ => None,
        }
    }
}

fn invalid(token: &str) -> CalcError {
    CalcError::InvalidInput(token.to_string())
}

fn number<T: std::str::FromStr>(value: &str) -> Result<T> {
    value.parse().map_err(|_| invalid(value))
}

fn investment(value: &str) -> Result<u16> {
    let amount: u16 = number(value)?;
    if amount > MAX_INVESTMENT {
        return Err(invalid(value));
    }
    Ok(amount)
}

fn quality(value: &str) -> Result<u8> {
    let amount: u8 = number(value)?;
    if amount > MAX_QUALITY {
        return Err(invalid(value));
    }
    Ok(amount)
}

/// A calculation request, names still unresolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCommand {
    pub attacker: String,
    pub defender: String,
    /// Settings written under the attacker section, in order.
    pub attacker_settings: Vec<Setting>,
    /// Settings written under the defender section, in order.
    pub defender_settings: Vec<Setting>,
    /// Condition queries, in order.
    pub conditions: Vec<String>,
}

/// What a command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Save { key: String, fragment: String },
    Delete { key: String },
    Calculate(ParsedCommand),
}

/// Whether `token` has a fixed meaning on the command line.
pub fn is_reserved(token: &str) -> bool {
    token == PRESET_TOKEN
        || Section::from_token(token).is_some()
        || VALUE_OPTIONS.contains(&token)
        || FLAG_OPTIONS.contains(&token)
}

/// Parse one command line, splicing presets from `presets`.
///
/// The first bare token under the attacker section names the attacker and
/// the second names the defender without leaving the section, so options
/// that follow still apply to the attacker until `b` is given.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::command::{parse, Command, Setting};
/// use dmgcalc::preset::MemoryPresetStore;
///
/// let presets = MemoryPresetStore::new();
/// let Command::Calculate(parsed) = parse("gab hab to same w jis j suna", &presets).unwrap() else {
///     panic!("expected a calculation");
/// };
/// assert_eq!(parsed.attacker, "gab");
/// assert_eq!(parsed.defender, "hab");
/// assert_eq!(
///     parsed.attacker_settings[0],
///     Setting::Ability { query: "same".into(), restricted: true }
/// );
/// assert_eq!(parsed.conditions, vec!["suna"]);
/// ```
pub fn parse(line: &str, presets: &dyn PresetStore) -> Result<Command> {
    let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let mut parsed = ParsedCommand::default();
    let mut attacker: Option<String> = None;
    let mut defender: Option<String> = None;
    let mut section = Section::Attacker;
    let mut side = Side::Attacker;
    let mut expansions = 0;
    let mut i = 0;

    while i < words.len() {
        let word = words[i].as_str();

        match section {
            Section::Save => {
                return Ok(Command::Save {
                    key: word.to_string(),
                    fragment: words[i + 1..].join(" "),
                })
            }
            Section::Delete => {
                return Ok(Command::Delete { key: word.to_string() });
            }
            _ => {}
        }

        if word == PRESET_TOKEN {
            let key = words
                .get(i + 1)
                .ok_or_else(|| CalcError::InvalidInput("p requires a preset key".to_string()))?;
            expansions += 1;
            if expansions > MAX_PRESET_EXPANSIONS {
                return Err(CalcError::InvalidInput(format!("preset {key} expands too deeply")));
            }
            let (_, fragment) = presets.lookup(key)?;
            let spliced: Vec<String> = fragment.split_whitespace().map(str::to_string).collect();
            words.splice(i..i + 2, spliced);
            continue;
        }

        if let Some(next) = Section::from_token(word) {
            section = next;
            match next {
                Section::Attacker => side = Side::Attacker,
                Section::Defender => side = Side::Defender,
                _ => {}
            }
            i += 1;
            continue;
        }

        // An empty name slot takes the token even when it spells an option.
        match section {
            Section::Attacker if attacker.is_none() => {
                attacker = Some(word.to_string());
                i += 1;
                continue;
            }
            Section::Defender if defender.is_none() => {
                defender = Some(word.to_string());
                i += 1;
                continue;
            }
            _ => {}
        }

        let setting = if VALUE_OPTIONS.contains(&word) {
            let value = words
                .get(i + 1)
                .ok_or_else(|| CalcError::InvalidInput(format!("{word} requires a value")))?;
            i += 1;
            Some(Setting::parse(word, value)?)
        } else {
            Setting::flag(word)
        };
        if let Some(setting) = setting {
            match side {
                Side::Attacker => parsed.attacker_settings.push(setting),
                Side::Defender => parsed.defender_settings.push(setting),
            }
            i += 1;
            continue;
        }

        match section {
            Section::Attacker if defender.is_none() => defender = Some(word.to_string()),
            Section::Conditions => parsed.conditions.push(word.to_string()),
            _ => return Err(invalid(word)),
        }
        i += 1;
    }

    match (attacker, defender) {
        (Some(attacker), Some(defender)) => {
            parsed.attacker = attacker;
            parsed.defender = defender;
            Ok(Command::Calculate(parsed))
        }
        _ => Err(CalcError::InvalidInput(
            "attacker or defender not specified".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::MemoryPresetStore;

    fn calculate(line: &str, presets: &dyn PresetStore) -> ParsedCommand {
        match parse(line, presets).unwrap() {
            Command::Calculate(parsed) => parsed,
            other => panic!("expected calculation, got {other:?}"),
        }
    }

    #[test]
    fn test_sections_route_settings() {
        let presets = MemoryPresetStore::new();
        let parsed = calculate("gar d m s a b dora k 0 hb w jis", &presets);
        assert_eq!(parsed.attacker, "gar");
        assert_eq!(parsed.defender, "dora");
        assert_eq!(
            parsed.attacker_settings,
            vec![Setting::Investment(252), Setting::Growth(Growth::Boosting)]
        );
        assert_eq!(parsed.defender_settings.len(), 3);
        assert_eq!(parsed.defender_settings[0], Setting::Quality(0));
        assert!(matches!(
            parsed.defender_settings[2],
            Setting::Action { restricted: true, .. }
        ));
    }

    #[test]
    fn test_condition_list_lends_options_to_previous_section() {
        let presets = MemoryPresetStore::new();
        let parsed = calculate("gar b dora j hare r 2 ame akyoku suna", &presets);
        assert_eq!(parsed.conditions, vec!["hare", "ame", "suna"]);
        assert_eq!(parsed.defender_settings[0], Setting::Rank(2));
        assert!(parsed.attacker_settings.is_empty());
    }

    #[test]
    fn test_preset_splices_in_place() {
        let mut presets = MemoryPresetStore::new();
        presets.insert("cs", "m kodawari d m").unwrap();
        let parsed = calculate("gar p cs dora", &presets);
        assert_eq!(parsed.defender, "dora");
        assert_eq!(
            parsed.attacker_settings,
            vec![Setting::Item("kodawari".into()), Setting::Investment(252)]
        );
    }

    #[test]
    fn test_option_spelled_names_fill_empty_slots() {
        let presets = MemoryPresetStore::new();
        let parsed = calculate("h rap w jis", &presets);
        assert_eq!(parsed.attacker, "h");
        assert_eq!(parsed.defender, "rap");

        let parsed = calculate("gab b d d 4 w jis", &presets);
        assert_eq!(parsed.defender, "d");
        assert_eq!(parsed.defender_settings[0], Setting::Investment(4));

        // Once the attacker is named, the same token is an option again.
        let parsed = calculate("gab d 4 rap", &presets);
        assert_eq!(parsed.attacker_settings, vec![Setting::Investment(4)]);
        assert_eq!(parsed.defender, "rap");
    }

    #[test]
    fn test_self_referencing_preset_is_rejected() {
        let mut presets = MemoryPresetStore::new();
        presets.insert("loop", "p loop").unwrap();
        assert!(matches!(
            parse("gar dora p loop", &presets),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_save_and_delete() {
        let presets = MemoryPresetStore::new();
        assert_eq!(
            parse("save rain j ame d m", &presets).unwrap(),
            Command::Save {
                key: "rain".into(),
                fragment: "j ame d m".into()
            }
        );
        assert_eq!(
            parse("del ra", &presets).unwrap(),
            Command::Delete { key: "ra".into() }
        );
    }

    #[test]
    fn test_invalid_input() {
        let presets = MemoryPresetStore::new();
        let cases = [
            "",
            "gar",
            "gar dora extra",
            "gar dora r 7",
            "gar dora k 32",
            "gar dora d 300",
            "gar dora s x",
            "gar dora d6 1-2-3",
            "gar dora d",
            "gar dora p missing",
        ];
        for case in cases {
            assert!(
                matches!(parse(case, &presets), Err(CalcError::InvalidInput(_))),
                "{case:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            Setting::flag("hb"),
            Some(Setting::DefenderBuild {
                investment: 252,
                growth: Growth::Boosting,
                vitality: 252
            })
        );
        assert_eq!(
            Setting::flag("cmuburi"),
            Some(Setting::AttackerBuild {
                investment: 0,
                growth: Growth::Neutral
            })
        );
        assert_eq!(Setting::flag("nope"), None);
        assert!(is_reserved("seikaku"));
        assert!(!is_reserved("garchomp"));
    }
}
