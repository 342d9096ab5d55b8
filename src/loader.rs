//! Loading of CTC catalogs from disk.
//! Shape validation happens here, so the baking code can rely on typed input.

use std::fs;
use std::path::Path;

use log::debug;

use crate::catalog::{Catalog, CtcMessage};
use crate::constants::CTC_SUFFIX;
use crate::error::{BakerError, BakerResult};

/// Returns true if the file name ends with `.ctc.json`.
pub fn is_ctc_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(CTC_SUFFIX))
}

/// Parses an in-memory CTC catalog. The root must be a JSON object.
pub fn parse_ctc_strings(content: &str) -> Result<Catalog<CtcMessage>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Reads and parses a CTC catalog file.
///
/// # Arguments
/// * `path` - Path to a `*.ctc.json` file
///
/// # Returns
/// * `BakerResult<Catalog<CtcMessage>>` - Typed catalog in file order
///
/// # Errors
/// * `BakerError::InvalidCatalogPath` if the file name lacks the `.ctc.json` suffix
/// * `BakerError::IoError` if the file cannot be read
/// * `BakerError::JsonError` if the content is not a well-formed catalog
pub fn load_ctc_strings<P: AsRef<Path>>(path: P) -> BakerResult<Catalog<CtcMessage>> {
    let path = path.as_ref();
    if !is_ctc_file(path) {
        return Err(BakerError::InvalidCatalogPath(format!(
            "can only load {} files, got {}",
            CTC_SUFFIX,
            path.display()
        )));
    }

    debug!("Loading catalog from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_ctc_strings(&content).map_err(|source| BakerError::JsonError {
        path: path.display().to_string(),
        source,
    })
}
