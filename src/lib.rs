//! ctc-baker is the final step of a translation pipeline.
//! It takes message catalogs in CTC form, where ICU snippets are hidden behind
//! stable `$NAME$` placeholder tokens, and bakes them into the runtime form
//! with every token replaced by its ICU content.

/// Placeholder substitution and validation
pub mod bake;

/// Typed catalog records
pub mod catalog;

/// Command-line interface module for the ctc-baker binary
pub mod cli;

/// Directory scanning and output file naming
pub mod collector;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Reading CTC catalogs from disk
pub mod loader;

/// Writing baked catalogs to disk
pub mod writer;

pub use bake::bake;
pub use catalog::{BakedMessage, Catalog, CtcMessage, CtcPlaceholder};
pub use error::{BakerError, BakerResult};
