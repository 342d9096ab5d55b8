//! ctc-baker's main application entry point.
//! Parses arguments, sets up logging and bakes every catalog of a directory.

use ctc_baker::{
    cli::{get_args, Args},
    collector::collect_and_bake_ctc_strings,
    error::{default_error_handler, BakerResult},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `BakerResult<()>` - Success or the first error met while baking
fn run(args: Args) -> BakerResult<()> {
    let baked = collect_and_bake_ctc_strings(&args.dir, args.output_dir.as_deref())?;

    if baked.is_empty() {
        log::warn!("No *.ctc.json catalogs found in {}", args.dir.display());
    }
    if !args.quiet {
        println!("Baked {} catalog(s).", baked.len());
    }
    Ok(())
}
