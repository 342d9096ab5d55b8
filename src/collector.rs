//! Directory driver: finds `*.ctc.json` catalogs, bakes them and writes the
//! runtime catalogs next to them (or into a separate output directory).

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::bake::bake;
use crate::constants::{CTC_SEGMENT, CTC_SUFFIX};
use crate::error::{BakerError, BakerResult};
use crate::loader::{is_ctc_file, load_ctc_strings};
use crate::writer::save_lhl_strings;

/// Derives the baked file name from a CTC file name.
///
/// `en-US.ctc.json` becomes `en-US.json`. Returns `None` for names that are
/// not CTC catalogs.
pub fn lhl_filename(ctc_filename: &str) -> Option<String> {
    let stem = ctc_filename.strip_suffix(CTC_SUFFIX)?;
    let extension = &CTC_SUFFIX[CTC_SEGMENT.len()..];
    Some(format!("{stem}{extension}"))
}

/// Bakes every CTC catalog directly inside `dir`.
///
/// # Arguments
/// * `dir` - Directory scanned (non-recursively) for `*.ctc.json` files
/// * `output_dir` - Where baked files go; defaults to `dir`
///
/// # Returns
/// * `BakerResult<Vec<String>>` - File names of the baked CTC catalogs, sorted
///
/// # Errors
/// * Any loader, baking or writer error; the first one stops the run
pub fn collect_and_bake_ctc_strings<P: AsRef<Path>>(
    dir: P,
    output_dir: Option<&Path>,
) -> BakerResult<Vec<String>> {
    let dir = dir.as_ref();
    let output_dir = output_dir.unwrap_or(dir);
    if output_dir != dir {
        fs::create_dir_all(output_dir)?;
    }

    let mut baked_filenames = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| BakerError::IoError(e.into()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_ctc_file(path) {
            debug!("Skipping {}", path.display());
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let target = target_path(output_dir, filename)?;

        info!("Baking {}", path.display());
        let ctc_strings = load_ctc_strings(path)?;
        let strings = bake(&ctc_strings)?;
        save_lhl_strings(&target, &strings)?;

        baked_filenames.push(filename.to_string());
    }

    Ok(baked_filenames)
}

fn target_path(output_dir: &Path, filename: &str) -> BakerResult<PathBuf> {
    lhl_filename(filename)
        .map(|name| output_dir.join(name))
        .ok_or_else(|| BakerError::InvalidCatalogPath(filename.to_string()))
}
