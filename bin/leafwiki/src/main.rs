//! leafwiki CLI
//!
//! Generates the bundled handbook wiki as static HTML.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for leafwiki.
#[derive(Parser)]
#[command(
    name = "leafwiki",
    version,
    about = "A static wiki generator driven by a document tree"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "leafwiki.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate the wiki into the output directory
    Build {
        /// Output directory (overrides build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Site language tag (overrides site.language)
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Validate configuration and the site tree without writing files
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    leafwiki::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output, lang } => {
            leafwiki::cmd::build::run(&cli.config, output.as_deref(), lang.as_deref())?;
        }
        Commands::Check { strict } => {
            leafwiki::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
