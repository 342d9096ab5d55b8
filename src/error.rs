//! Error handling for ctc-baker.
//! Defines the error taxonomy of the baking transform together with the
//! I/O failures of the loader, writer and directory driver.

use std::io;
use thiserror::Error;

/// Custom error types for ctc-baker operations.
///
/// The first two variants are authoring defects in a catalog: they fail
/// identically on every run until the catalog itself is fixed.
#[derive(Error, Debug)]
pub enum BakerError {
    /// A declared placeholder never appears as a `$NAME$` token in its message
    #[error("Provided placeholder \"{placeholder}\" not found in message \"{message}\" (key: {key}).")]
    UnusedPlaceholder {
        key: String,
        placeholder: String,
        message: String,
    },

    /// The message still contains `$NAME$` tokens after all placeholders were applied
    #[error("Message \"{message}\" is missing placeholder(s): {} (key: {key}).", .tokens.join(","))]
    UnresolvedPlaceholder {
        key: String,
        tokens: Vec<String>,
        message: String,
    },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A catalog file could not be parsed or serialized
    #[error("JSON error in {path}: {source}.")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The loader was pointed at something that is not a `.ctc.json` file
    #[error("Invalid catalog path: {0}.")]
    InvalidCatalogPath(String),
}

impl BakerError {
    /// Catalog key of the offending message, for the two authoring errors.
    pub fn message_key(&self) -> Option<&str> {
        match self {
            BakerError::UnusedPlaceholder { key, .. }
            | BakerError::UnresolvedPlaceholder { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with BakerError as the error type.
pub type BakerResult<T> = Result<T, BakerError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The BakerError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: BakerError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
