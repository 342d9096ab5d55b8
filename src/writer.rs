//! Serialization of baked catalogs.

use std::fs;
use std::path::Path;

use log::debug;

use crate::catalog::{BakedMessage, Catalog};
use crate::error::{BakerError, BakerResult};

/// Renders a baked catalog as pretty JSON (2-space indent) with a trailing newline.
pub fn to_lhl_json(catalog: &Catalog<BakedMessage>) -> Result<String, serde_json::Error> {
    let mut content = serde_json::to_string_pretty(catalog)?;
    content.push('\n');
    Ok(content)
}

/// Writes a baked catalog to `path`, replacing any existing file.
pub fn save_lhl_strings<P: AsRef<Path>>(
    path: P,
    catalog: &Catalog<BakedMessage>,
) -> BakerResult<()> {
    let path = path.as_ref();
    let content = to_lhl_json(catalog).map_err(|source| BakerError::JsonError {
        path: path.display().to_string(),
        source,
    })?;

    debug!("Writing {} message(s) to {}", catalog.len(), path.display());
    fs::write(path, content).map_err(BakerError::IoError)
}
