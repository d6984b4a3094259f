//! Query resolution.
//!
//! A query selects every entity with a retrieval string that starts with
//! it. The outcome is a [`Resolution`]: no match, a unique match, or a set
//! of candidates awaiting a keyed selection. Selection goes through a
//! caller-supplied [`Prompt`], so the core logic needs no real input stream.

use crate::entity::{Entity, Table};
use crate::error::{CalcError, Result};
use std::io::{self, BufRead, Write};

/// Selector keys by candidate count, laid out for the home row.
const KEY_LAYOUTS: [&[&str]; 7] = [
    &["f", "j"],
    &["d", "f", "j"],
    &["d", "f", "j", "k"],
    &["s", "d", "f", "j", "k"],
    &["s", "d", "f", "j", "k", "l"],
    &["a", "s", "d", "f", "j", "k", "l"],
    &["a", "s", "d", "f", "j", "k", "l", ";"],
];

/// Selector keys for `count` candidates.
///
/// Two to eight candidates get distinct single keys; more fall back to
/// `"1"` through `"N"`.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::query::selector_keys;
///
/// assert_eq!(selector_keys(2), vec!["f", "j"]);
/// assert_eq!(selector_keys(3), vec!["d", "f", "j"]);
/// assert_eq!(selector_keys(10).last().unwrap(), "10");
/// ```
pub fn selector_keys(count: usize) -> Vec<String> {
    match count {
        2..=8 => KEY_LAYOUTS[count - 2].iter().map(|k| k.to_string()).collect(),
        _ => (1..=count).map(|n| n.to_string()).collect(),
    }
}

/// Something that can show candidates and read a selection line.
///
/// Implementations decide how an abort is signalled; the stdin prompt
/// terminates the process when it reads the abort token.
pub trait Prompt {
    /// Show the keyed candidate labels.
    fn show(&mut self, candidates: &[(String, String)]);

    /// Read one line of selection input.
    fn read_line(&mut self) -> String;

    /// Report a line that is not one of the keys.
    fn reject(&mut self, _line: &str) {}
}

/// Candidates awaiting a keyed selection.
#[derive(Debug)]
pub struct Selection<'a, T> {
    candidates: Vec<(String, &'a Entity<T>)>,
}

impl<'a, T> Selection<'a, T> {
    /// Key/label pairs, in presentation order.
    pub fn labels(&self) -> Vec<(String, String)> {
        self.candidates
            .iter()
            .map(|(key, entity)| (key.clone(), entity.label().to_string()))
            .collect()
    }

    /// The candidate bound to `key`, if any.
    pub fn select(&self, key: &str) -> Option<&'a Entity<T>> {
        self.candidates
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entity)| *entity)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether there are no candidates (never true for a built selection).
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Block on `prompt` until a valid key is entered.
    pub fn resolve_with(&self, prompt: &mut dyn Prompt) -> &'a Entity<T> {
        prompt.show(&self.labels());
        loop {
            let line = prompt.read_line();
            if let Some(entity) = self.select(line.trim()) {
                return entity;
            }
            prompt.reject(&line);
        }
    }
}

/// Outcome of matching a query against a table.
#[derive(Debug)]
pub enum Resolution<'a, T> {
    NoMatch,
    Unique(&'a Entity<T>),
    AwaitingSelection(Selection<'a, T>),
}

/// Match `query` against `table`, optionally restricted to `restriction`.
///
/// With a restriction, only the listed identifiers are considered, in the
/// restriction's order; identifiers missing from the table are skipped.
pub fn lookup<'a, T, S>(table: &'a Table<T>, query: &str, restriction: Option<&[S]>) -> Resolution<'a, T>
where
    S: AsRef<str>,
{
    let matches: Vec<&'a Entity<T>> = match restriction {
        Some(ids) => ids
            .iter()
            .filter_map(|id| table.get(id.as_ref()))
            .filter(|entity| entity.matches(query))
            .collect(),
        None => table.iter().filter(|entity| entity.matches(query)).collect(),
    };

    match matches.len() {
        0 => Resolution::NoMatch,
        1 => Resolution::Unique(matches[0]),
        n => Resolution::AwaitingSelection(Selection {
            candidates: selector_keys(n).into_iter().zip(matches).collect(),
        }),
    }
}

/// Resolve `query` to exactly one entity, prompting when ambiguous.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::entity::{Entity, Table};
/// use dmgcalc::query::{retrieve, Prompt};
///
/// struct NoPrompt;
/// impl Prompt for NoPrompt {
///     fn show(&mut self, _: &[(String, String)]) {}
///     fn read_line(&mut self) -> String { unreachable!() }
/// }
///
/// let table = Table::from_entries(vec![
///     Entity::new("surf", "Surf", vec!["surf".into()], ()),
///     Entity::new("swift", "Swift", vec!["swift".into()], ()),
/// ]);
/// let found = retrieve(&table, "su", None::<&[&str]>, &mut NoPrompt).unwrap();
/// assert_eq!(found.id().as_str(), "surf");
/// assert!(retrieve(&table, "x", None::<&[&str]>, &mut NoPrompt).is_err());
/// ```
pub fn retrieve<'a, T, S>(
    table: &'a Table<T>,
    query: &str,
    restriction: Option<&[S]>,
    prompt: &mut dyn Prompt,
) -> Result<&'a Entity<T>>
where
    S: AsRef<str>,
{
    match lookup(table, query, restriction) {
        Resolution::NoMatch => Err(CalcError::NoMatch {
            query: query.to_string(),
        }),
        Resolution::Unique(entity) => Ok(entity),
        Resolution::AwaitingSelection(selection) => Ok(selection.resolve_with(prompt)),
    }
}

/// A prompt on standard input/output.
///
/// Reading the abort token (or end of input) terminates the process.
#[derive(Debug, Clone)]
pub struct StdinPrompt {
    marker: String,
    abort_token: String,
}

impl StdinPrompt {
    /// Create a prompt printing `marker` and exiting on `abort_token`.
    pub fn new(marker: impl Into<String>, abort_token: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            abort_token: abort_token.into(),
        }
    }
}

impl Prompt for StdinPrompt {
    fn show(&mut self, candidates: &[(String, String)]) {
        let line = candidates
            .iter()
            .map(|(key, label)| format!("{key}: {label}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }

    fn read_line(&mut self) -> String {
        print!("{}", self.marker);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => std::process::exit(0),
            Ok(_) => {}
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if line == self.abort_token {
            std::process::exit(0);
        }
        line
    }

    fn reject(&mut self, line: &str) {
        println!("Invalid input: {line}");
    }
}
