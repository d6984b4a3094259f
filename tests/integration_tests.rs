mod common;

use common::{catalog, Scripted};
use dmgcalc::assembler::Assembler;
use dmgcalc::command::{self, Command, ParsedCommand};
use dmgcalc::preset::{JsonPresetStore, MemoryPresetStore, PresetStore};
use dmgcalc::*;

fn parsed(line: &str) -> ParsedCommand {
    match command::parse(line, &MemoryPresetStore::new()).unwrap() {
        Command::Calculate(parsed) => parsed,
        other => panic!("expected a calculation, got {other:?}"),
    }
}

fn configs<'c>(catalog: &'c Catalog, prompt: &mut Scripted, line: &str) -> Result<Vec<BattleConfig<'c>>> {
    Assembler::new(catalog, prompt, 50, 31).assemble(&parsed(line))
}

fn outputs(catalog: &Catalog, line: &str) -> Result<Vec<Output>> {
    let configs = configs(catalog, &mut Scripted::default(), line)?;
    resolve_all(&configs, catalog, false)
}

fn new_session(catalog: Catalog, presets: Box<dyn PresetStore>) -> Session {
    Session::new(catalog, Settings::default(), presets, Box::new(Scripted::default()))
}

/// Power 90 physical, offense 150 against defense 100 at level 50 with
/// nothing else in play.
#[test]
fn test_plain_hit_rolls() {
    let catalog = catalog();
    let out = outputs(&catalog, "gab rap wx jare amuburi bmuburi").unwrap();
    assert_eq!(out.len(), 1);
    let out = &out[0];

    assert_eq!(out.attack().value, 150);
    assert_eq!(out.defense().value, 100);
    assert_eq!(out.vitality(), 205);
    assert_eq!(out.power(), 90);
    assert_eq!(out.effectiveness(), Effectiveness::NEUTRAL);
    assert_eq!(
        out.damage().rolls(),
        &[51, 52, 53, 53, 54, 54, 55, 56, 56, 57, 57, 58, 59, 59, 60, 61]
    );
    assert!(out.applied_rules().is_empty());
    assert!((out.max_ratio() - 61.0 / 205.0).abs() < 1e-12);
}

#[test]
fn test_display_line() {
    let catalog = catalog();
    let out = outputs(&catalog, "gab rap wx jare amuburi bmuburi").unwrap();
    let line = out[0].to_string();
    assert!(line.starts_with("150(  0.) 205(  0) 100(  0.)  61  60  59  59"), "{line}");
    assert!(line.ends_with(" 29.8~ 24.9%"), "{line}");
}

#[test]
fn test_same_affinity_and_spread() {
    let catalog = catalog();

    let single = outputs(&catalog, "gab rap w jis amuburi bmuburi").unwrap();
    assert_eq!(single[0].damage().min(), 85);
    assert_eq!(single[0].damage().max(), 102);
    assert_eq!(single[0].applied_rules(), ["same affinity"]);

    let doubles = outputs(&catalog, "gab rap w jis amuburi bmuburi j daburu").unwrap();
    assert_eq!(doubles[0].damage().min(), 64);
    assert_eq!(doubles[0].damage().max(), 76);
    assert_eq!(doubles[0].applied_rules(), ["spread", "same affinity"]);
}

#[test]
fn test_critical_hit_and_burn() {
    let catalog = catalog();

    let crit = outputs(&catalog, "gab rap wx jare amuburi bmuburi j kyusho").unwrap();
    assert_eq!(crit[0].damage().max(), 91);
    assert_eq!(crit[0].damage().min(), 77);

    let burned = outputs(&catalog, "gab rap wx jare amuburi bmuburi j yakedo").unwrap();
    assert_eq!(burned[0].damage().max(), 30);
    assert_eq!(burned[0].damage().min(), 25);
    assert_eq!(burned[0].applied_rules(), ["burn"]);
}

#[test]
fn test_immune_defender_takes_nothing() {
    let catalog = catalog();
    let out = outputs(&catalog, "gab kai w jis amuburi bmuburi").unwrap();
    assert!(out[0].effectiveness().is_immune());
    assert_eq!(out[0].damage().rolls(), &[0; 16]);
}

#[test]
fn test_second_name_keeps_attacker_section() {
    let catalog = catalog();
    let configs = configs(
        &catalog,
        &mut Scripted::default(),
        "gab rap to same wx jare amuburi bmuburi",
    )
    .unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].attacker.ability.id().as_str(), "rough-skin");
    assert_eq!(configs[0].defender.species.id().as_str(), "lapras");
    assert_eq!(configs[0].defender.ability.id().as_str(), "water-absorb");
}

#[test]
fn test_option_spelled_names() {
    let catalog = catalog();
    let mut prompt = Scripted::default();

    // "k" is a quality option, but an empty name slot takes it first.
    let attacking = configs(&catalog, &mut prompt, "k rap wx jare amuburi bmuburi").unwrap();
    assert_eq!(attacking[0].attacker.species.id().as_str(), "dragonite");
    assert_eq!(attacking[0].defender.species.id().as_str(), "lapras");

    let defending = configs(&catalog, &mut prompt, "gab b k wx jare amuburi bmuburi").unwrap();
    assert_eq!(defending[0].defender.species.id().as_str(), "dragonite");
    assert_eq!(defending[0].defender.quality, 31);
}

#[test]
fn test_ability_restriction_and_selection() {
    let catalog = catalog();

    // Restricted to garchomp's abilities, "suna" is unique.
    let mut prompt = Scripted::default();
    let restricted = configs(&catalog, &mut prompt, "gab rap to suna wx jare amuburi bmuburi").unwrap();
    assert_eq!(restricted[0].attacker.ability.id().as_str(), "sand-veil");
    assert!(prompt.shown.is_empty());

    // Unrestricted it is ambiguous; an invalid key is rejected first.
    let mut prompt = Scripted::new(&["x", "j"]);
    let open = configs(&catalog, &mut prompt, "gab rap tox suna wx jare amuburi bmuburi").unwrap();
    assert_eq!(open[0].attacker.ability.id().as_str(), "sand-stream");
    assert_eq!(
        prompt.shown[0],
        vec![
            ("f".to_string(), "sand-veil".to_string()),
            ("j".to_string(), "sand-stream".to_string())
        ]
    );
}

#[test]
fn test_attacker_fan_out() {
    let catalog = catalog();
    let mut prompt = Scripted::default();

    let open = configs(&catalog, &mut prompt, "gab rap wx jare bmuburi").unwrap();
    assert_eq!(open.len(), 5);
    assert_eq!(open[0].attacker.item_id(), "choice-item");
    assert_eq!(open[1].attacker.item_id(), "type-boost");
    assert_eq!(open[4].attacker.investment, 0);

    let held = configs(&catalog, &mut prompt, "gab rap wx jare m koda bmuburi").unwrap();
    assert_eq!(held.len(), 3);
    assert!(held.iter().all(|c| c.attacker.item_id() == "choice-item"));

    // Item builds carry neutral growth; the third build is the boosting one.
    let out = resolve_all(&open, &catalog, false).unwrap();
    assert_eq!(out[0].attack().value, 182);
    assert_eq!(out[0].attack().growth, '.');
    assert_eq!(out[0].effective_attack(), 273);
    assert_eq!(out[2].attack().value, 200);
    assert_eq!(out[2].effective_attack(), 200);
    assert_eq!(out[3].attack().value, 182);
}

#[test]
fn test_defender_fan_out_adds_vest_for_special() {
    let catalog = catalog();
    let mut prompt = Scripted::default();

    let special = configs(&catalog, &mut prompt, "gab rap wx nami amuburi").unwrap();
    assert_eq!(special.len(), 5);
    assert_eq!(special[4].defender.item_id(), "assault-vest");

    let physical = configs(&catalog, &mut prompt, "gab rap wx jare amuburi").unwrap();
    assert_eq!(physical.len(), 4);

    let both = configs(&catalog, &mut prompt, "gab rap wx nami").unwrap();
    assert_eq!(both.len(), 25);
}

#[test]
fn test_parallel_matches_sequential() {
    let catalog = catalog();
    let configs = configs(&catalog, &mut Scripted::default(), "gab rap wx nami").unwrap();
    let sequential = resolve_all(&configs, &catalog, false).unwrap();
    let parallel = resolve_all(&configs, &catalog, true).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_incomplete_configuration() {
    let catalog = catalog();
    let mut prompt = Scripted::default();

    let err = configs(&catalog, &mut prompt, "gab rap amuburi bmuburi").unwrap_err();
    assert_eq!(err, CalcError::IncompleteConfiguration { field: "action" });

    let err = configs(&catalog, &mut prompt, "gab b rap d 0 wx jare amuburi").unwrap_err();
    assert_eq!(
        err,
        CalcError::IncompleteConfiguration {
            field: "vitality investment"
        }
    );
}

#[test]
fn test_resolution_errors() {
    let catalog = catalog();

    let err = outputs(&catalog, "gab rap wx tsuru amuburi bmuburi").unwrap_err();
    assert_eq!(err, CalcError::NonDamagingAction("swords-dance".to_string()));

    let err = outputs(&catalog, "zzz rap wx jare").unwrap_err();
    assert_eq!(err, CalcError::NoMatch { query: "zzz".to_string() });

    // Restricted to garchomp's moves, surf is out of reach.
    let err = outputs(&catalog, "gab rap w nami").unwrap_err();
    assert_eq!(err, CalcError::NoMatch { query: "nami".to_string() });
}

#[test]
fn test_session_presets() {
    let mut session = new_session(catalog(), Box::new(MemoryPresetStore::new()));

    let saved = session.process("save std amuburi bmuburi").unwrap();
    assert_eq!(
        saved,
        Outcome::Saved {
            key: "std".into(),
            fragment: "amuburi bmuburi".into()
        }
    );

    match session.process("gab rap wx jare p st").unwrap() {
        Outcome::Calculated(out) => {
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].damage().max(), 61);
        }
        other => panic!("expected outputs, got {other:?}"),
    }

    let deleted = session.process("del s").unwrap();
    assert_eq!(deleted.to_string(), "delete preset: std: amuburi bmuburi");

    assert!(matches!(
        session.process("gab rap wx jare p st"),
        Err(CalcError::InvalidInput(_))
    ));
}

#[test]
fn test_session_with_file_presets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.json");

    let mut session = new_session(catalog(), Box::new(JsonPresetStore::new(&path)));
    session.process("save rain j ame").unwrap();
    assert_eq!(session.presets().lookup("r").unwrap().1, "j ame");

    let mut reopened = new_session(catalog(), Box::new(JsonPresetStore::new(&path)));
    match reopened.process("gab rap wx nami amuburi bmuburi p rain").unwrap() {
        Outcome::Calculated(out) => {
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].applied_rules(), ["weather boost"]);
            assert_eq!(out[0].effectiveness().to_f64(), 0.5);
        }
        other => panic!("expected outputs, got {other:?}"),
    }
}
