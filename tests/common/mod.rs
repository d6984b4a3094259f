#![allow(dead_code)]

use dmgcalc::query::Prompt;
use dmgcalc::Catalog;
use std::collections::VecDeque;

pub const DATASET: &str = r#"{
    "species": [
        {"id": "garchomp", "label": "Garchomp", "names": ["gaburiasu"],
         "affinities": ["dragon", "ground"],
         "stats": {"vitality": 108, "offense": 130, "defense": 95,
                   "special_offense": 80, "special_defense": 85, "speed": 102},
         "abilities": ["sand-veil", "rough-skin"],
         "moves": ["earthquake", "dragon-claw", "play-rough"]},
        {"id": "lapras", "label": "Lapras", "names": ["rapurasu"],
         "affinities": ["water", "ice"],
         "stats": {"vitality": 130, "offense": 85, "defense": 80,
                   "special_offense": 85, "special_defense": 95, "speed": 60},
         "abilities": ["water-absorb", "shell-armor", "hydration"],
         "moves": ["surf"]},
        {"id": "dragonite", "label": "Dragonite", "names": ["kairyu"],
         "affinities": ["dragon", "flying"],
         "stats": {"vitality": 91, "offense": 134, "defense": 95,
                   "special_offense": 100, "special_defense": 100, "speed": 80},
         "abilities": ["inner-focus", "multiscale"],
         "moves": ["earthquake"]}
    ],
    "actions": [
        {"id": "earthquake", "label": "Earthquake", "names": ["jishin"], "power": 100,
         "category": "physical", "target": "all-other-pokemon", "affinity": "ground"},
        {"id": "play-rough", "label": "Play Rough", "names": ["jarejiku"], "power": 90,
         "category": "physical", "target": "selected-pokemon", "affinity": "fairy"},
        {"id": "dragon-claw", "label": "Dragon Claw", "names": ["doragonkuroo"], "power": 80,
         "category": "physical", "target": "selected-pokemon", "affinity": "dragon"},
        {"id": "surf", "label": "Surf", "names": ["naminori"], "power": 90,
         "category": "special", "target": "all-other-pokemon", "affinity": "water"},
        {"id": "swords-dance", "label": "Swords Dance", "names": ["tsuruginomai"], "power": null,
         "category": "status", "target": "user", "affinity": "normal"}
    ],
    "abilities": [
        {"id": "sand-veil", "names": ["sunagakure"]},
        {"id": "rough-skin", "names": ["samehada"]},
        {"id": "sand-stream", "names": ["sunaokoshi"]},
        {"id": "water-absorb", "names": ["chosui"]},
        {"id": "shell-armor", "names": ["sheruaamaa"]},
        {"id": "hydration", "names": ["uruoibodi"]},
        {"id": "inner-focus", "names": ["seishinryoku"]},
        {"id": "multiscale", "names": ["maruchisukeiru"]}
    ],
    "affinities": [
        {"id": "ground", "no_effect": ["flying"], "half_effect": ["grass", "bug"],
         "double_effect": ["fire", "electric", "poison", "rock", "steel"]},
        {"id": "fairy", "half_effect": ["fire", "poison", "steel"],
         "double_effect": ["fighting", "dragon", "dark"]},
        {"id": "water", "half_effect": ["water", "grass", "dragon"],
         "double_effect": ["fire", "ground", "rock"]},
        {"id": "dragon", "no_effect": ["fairy"], "half_effect": ["steel"],
         "double_effect": ["dragon"]},
        {"id": "stellar"}
    ],
    "items": [
        {"id": "choice-item", "names": ["kodawari"]},
        {"id": "type-boost", "names": ["ichitennibai"]},
        {"id": "assault-vest", "names": ["totsugekichokki"]},
        {"id": "no-item", "names": ["nashi"]}
    ],
    "conditions": [
        {"id": "sun", "names": ["hare"]},
        {"id": "rain", "names": ["ame"]},
        {"id": "sandstorm", "names": ["suna"]},
        {"id": "doubles", "names": ["daburu"]},
        {"id": "critical-hit", "names": ["kyusho"]},
        {"id": "burn", "names": ["yakedo"]}
    ]
}"#;

pub fn catalog() -> Catalog {
    Catalog::from_json(DATASET, None).unwrap()
}

/// A prompt answering from a fixed script.
#[derive(Debug, Default)]
pub struct Scripted {
    pub lines: VecDeque<String>,
    pub shown: Vec<Vec<(String, String)>>,
}

impl Scripted {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            shown: Vec::new(),
        }
    }
}

impl Prompt for Scripted {
    fn show(&mut self, candidates: &[(String, String)]) {
        self.shown.push(candidates.to_vec());
    }

    fn read_line(&mut self) -> String {
        self.lines.pop_front().expect("prompt script exhausted")
    }
}
