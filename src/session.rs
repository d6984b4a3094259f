//! One calculator session.
//!
//! A [`Session`] owns the catalog, the settings, a preset store and a
//! prompt, and turns command lines into [`Outcome`]s.

use crate::assembler::Assembler;
use crate::catalog::Catalog;
use crate::command::{self, Command};
use crate::engine;
use crate::error::Result;
use crate::output::Output;
use crate::preset::PresetStore;
use crate::query::Prompt;
use crate::settings::Settings;
use std::fmt;
use tracing::{debug, info};

/// Result of processing one command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Saved { key: String, fragment: String },
    Deleted { key: String, fragment: String },
    /// One output per assembled configuration, in generation order.
    Calculated(Vec<Output>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Saved { key, fragment } => write!(f, "save preset: {key}: {fragment}"),
            Outcome::Deleted { key, fragment } => write!(f, "delete preset: {key}: {fragment}"),
            Outcome::Calculated(outputs) => {
                for (i, output) in outputs.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{output}")?;
                }
                Ok(())
            }
        }
    }
}

/// Catalog, settings, presets and prompt for processing command lines.
pub struct Session {
    catalog: Catalog,
    settings: Settings,
    presets: Box<dyn PresetStore>,
    prompt: Box<dyn Prompt>,
}

impl Session {
    pub fn new(catalog: Catalog, settings: Settings, presets: Box<dyn PresetStore>, prompt: Box<dyn Prompt>) -> Self {
        Self {
            catalog,
            settings,
            presets,
            prompt,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn presets(&self) -> &dyn PresetStore {
        self.presets.as_ref()
    }

    /// Process one command line.
    ///
    /// `InvalidInput` and `NoMatch` leave the session unchanged, so the
    /// caller can simply ask for another line.
    pub fn process(&mut self, line: &str) -> Result<Outcome> {
        match command::parse(line, self.presets.as_ref())? {
            Command::Save { key, fragment } => {
                self.presets.insert(&key, &fragment)?;
                Ok(Outcome::Saved { key, fragment })
            }
            Command::Delete { key } => {
                let (key, fragment) = self.presets.remove_prefix(&key)?;
                Ok(Outcome::Deleted { key, fragment })
            }
            Command::Calculate(parsed) => {
                let mut assembler = Assembler::new(
                    &self.catalog,
                    self.prompt.as_mut(),
                    self.settings.default_level,
                    self.settings.default_quality,
                );
                let configs = assembler.assemble(&parsed)?;
                debug!(count = configs.len(), "configurations assembled");
                let outputs = engine::resolve_all(&configs, &self.catalog, self.settings.parallel)?;
                info!(attacker = %parsed.attacker, defender = %parsed.defender, count = outputs.len(), "calculated");
                Ok(Outcome::Calculated(outputs))
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("settings", &self.settings)
            .field("species", &self.catalog.species.len())
            .finish_non_exhaustive()
    }
}
