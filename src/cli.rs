//! Command-line interface implementation for ctc-baker.
//! Provides argument parsing and help text formatting using clap.

use clap::{builder::FalseyValueParser, error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for ctc-baker.
#[derive(Parser, Debug)]
#[command(author, version, about = "ctc-baker: bake CTC message catalogs into runtime LHL catalogs", long_about = None)]
pub struct Args {
    /// Directory containing *.ctc.json catalogs
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Directory for baked catalogs (defaults to DIR)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging output. Takes precedence over --quiet
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output. Enabled automatically on CI.
    #[arg(short, long, env = "CI", value_parser = FalseyValueParser::new())]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
