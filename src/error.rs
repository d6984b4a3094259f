//! Error types for damage calculation.
//!
//! Every failure the calculator can report is represented by the
//! `CalcError` enum. All of them are recoverable by the caller: an
//! interactive front end reprompts on `InvalidInput` and `NoMatch`.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that can occur while resolving names, assembling a
/// configuration, or running the damage pipeline.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::CalcError;
///
/// let err = CalcError::NoMatch { query: "zz".to_string() };
/// assert_eq!(err.to_string(), "No match for query: zz");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// Transliteration could not consume the text at the cursor.
    #[error("Unrecognized character {character:?} in {input:?}")]
    UnrecognizedCharacter { character: char, input: String },

    /// No entity has a retrieval string starting with the query.
    #[error("No match for query: {query}")]
    NoMatch { query: String },

    /// A command token, argument or preset fragment is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required configuration field is still unset after assembly.
    #[error("Incomplete configuration: {field} is not set")]
    IncompleteConfiguration { field: &'static str },

    /// The selected action deals no direct damage.
    #[error("Action does not deal damage: {0}")]
    NonDamagingAction(String),

    /// A dataset or preset document could not be parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Reading or writing a backing file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Dataset(err.to_string())
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        CalcError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::IncompleteConfiguration { field: "action" };
        assert!(err.to_string().contains("action"));
    }

    #[test]
    fn test_unrecognized_character_display() {
        let err = CalcError::UnrecognizedCharacter {
            character: '@',
            input: "ab@".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("'@'"));
        assert!(display.contains("ab@"));
    }

    #[test]
    fn test_json_error_converts_to_dataset() {
        let err: CalcError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, CalcError::Dataset(_)));
    }
}
