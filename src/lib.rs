//! # dmgcalc - Deterministic Single-Action Battle Damage Calculator
//!
//! A damage calculator that resolves one action between two combatants:
//! - **Deterministic** resolution with exact fixed-point rounding (scale 4096)
//! - **Data-driven** modifier rules evaluated against an immutable context
//! - **Prefix lookup** over several spellings, including transliterated ones
//! - **Fan-out** of under-specified configurations into common builds
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! A command line flows one way through the crate:
//!
//! ```text
//! [command] → [assembler] → [BattleConfig]* → [engine] → [Output]*
//! ```
//!
//! 1. **Commands** are tokenized into sections, options and queries
//! 2. **Queries** are prefix-matched against the catalog; ambiguous ones go
//!    through an injected [`Prompt`]
//! 3. **Enrichment passes** fill in abilities and fan out investment builds
//! 4. **The engine** runs each configuration through the modifier pipeline
//!    and produces sixteen roll outcomes
//!
//! ### Key Features
//!
//! - **Rule tables**: power, attack, defense and damage corrections are
//!   ordered `(name, factor, predicate)` entries
//! - **Two rounding modes**: chains round half up, applications half down
//! - **Breakdown**: every [`Output`] lists the rules that fired
//! - **Parallel**: expanded configurations are evaluated on the rayon pool,
//!   outputs keep generation order
//!
//! ## Example
//!
//! ```rust
//! use dmgcalc::*;
//! use dmgcalc::numeric::Modifier;
//!
//! // 1.5 * 1.2 = 1.8 at scale 4096
//! let chained = Modifier::ONE_POINT_FIVE.chain(Modifier(4915));
//! assert_eq!(chained, Modifier(7373));
//!
//! // 61 base damage rolls into [51, 61]
//! let rolls = engine::roll(engine::base_damage(50, 90, 150, 100));
//! assert_eq!((rolls[0], rolls[15]), (51, 61));
//! ```
//!
//! ## Modules
//!
//! - [`entity`] - Identifiers, entities and tables
//! - [`catalog`] - Entity catalog and dataset loading
//! - [`translit`] - Longest-match transliteration expander
//! - [`query`] - Prefix query resolution and keyed selection
//! - [`stats`] - Derived stat formulas
//! - [`numeric`] - Fixed-point modifiers and effectiveness
//! - [`config`] - Configuration drafts and resolved configurations
//! - [`command`] - Command-line parsing
//! - [`assembler`] - Name resolution and enrichment passes
//! - [`context`] - Context the modifier rules inspect
//! - [`rules`] - Modifier rule tables
//! - [`flags`] - Action classification lists
//! - [`engine`] - The damage pipeline
//! - [`output`] - Resolution results
//! - [`preset`] - Preset fragment stores
//! - [`settings`] - Session settings
//! - [`session`] - Command processing
//! - [`ids`] - Identifiers the rules consult
//! - [`error`] - Error types

pub mod assembler;
pub mod catalog;
pub mod command;
pub mod config;
pub mod context;
pub mod engine;
pub mod entity;
pub mod error;
pub mod flags;
pub mod ids;
pub mod numeric;
pub mod output;
pub mod preset;
pub mod query;
pub mod rules;
pub mod session;
pub mod settings;
pub mod stats;
pub mod translit;

// Re-export main types for convenience
pub use catalog::{Catalog, Category, Target};
pub use config::{BattleConfig, ConfigDraft};
pub use entity::{Entity, EntityId, Table};
pub use error::{CalcError, Result};
pub use output::{Damage, Output};
pub use query::{retrieve, Prompt, Resolution, StdinPrompt};
pub use session::{Outcome, Session};
pub use settings::Settings;

// Re-export engine entry points
pub use engine::{resolve, resolve_all};

// Re-export numeric types
pub use numeric::{Effectiveness, Modifier};
