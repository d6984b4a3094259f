//! Greedy longest-match transliteration.
//!
//! A `Transliterator` rewrites native-script text into one or more romanized
//! candidates using a substitution table. At each cursor position the
//! longest registered key wins; a key with several alternative replacements
//! multiplies the set of in-progress candidates.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Replacement for one substitution key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Replacement {
    /// A single spelling.
    Single(String),
    /// Several valid spellings; each branches the output.
    Alternatives(Vec<String>),
}

/// A substitution table with the longest key length precomputed.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::translit::{Replacement, Transliterator};
///
/// let table = Transliterator::new([
///     ("し", Replacement::Alternatives(vec!["si".into(), "shi".into()])),
///     ("か", Replacement::Single("ka".into())),
/// ]);
/// assert_eq!(table.expand("しか").unwrap(), vec!["sika", "shika"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transliterator {
    table: HashMap<String, Replacement>,
    max_key_len: usize,
}

impl Transliterator {
    /// Build a transliterator from `(key, replacement)` pairs.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Replacement)>,
    {
        let table: HashMap<String, Replacement> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let max_key_len = table.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self { table, max_key_len }
    }

    /// Parse a JSON object mapping keys to a string or an array of strings.
    pub fn from_json(text: &str) -> Result<Self> {
        let table: HashMap<String, Replacement> = serde_json::from_str(text)?;
        Ok(Self::new(table))
    }

    /// Longest key length, in characters.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Expand `input` into every candidate spelling, in generation order.
    ///
    /// Duplicates are kept. Empty input yields a single empty candidate.
    pub fn expand(&self, input: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = input.chars().collect();
        let mut outputs = vec![String::new()];
        let mut cursor = 0;

        while cursor < chars.len() {
            let longest = self.max_key_len.min(chars.len() - cursor);
            let found = (1..=longest).rev().find_map(|len| {
                let key: String = chars[cursor..cursor + len].iter().collect();
                self.table.get(&key).map(|replacement| (len, replacement))
            });

            let (len, replacement) = found.ok_or_else(|| CalcError::UnrecognizedCharacter {
                character: chars[cursor],
                input: input.to_string(),
            })?;

            outputs = match replacement {
                Replacement::Single(text) => outputs
                    .into_iter()
                    .map(|mut out| {
                        out.push_str(text);
                        out
                    })
                    .collect(),
                Replacement::Alternatives(alternatives) => outputs
                    .iter()
                    .flat_map(|out| alternatives.iter().map(move |alt| format!("{out}{alt}")))
                    .collect(),
            };
            cursor += len;
        }

        Ok(outputs)
    }
}
