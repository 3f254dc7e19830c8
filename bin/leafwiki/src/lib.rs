//! leafwiki CLI Library
//!
//! Command implementations and the bundled handbook wiki used by the
//! `leafwiki` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check)
//! - [`handbook`] - The handbook wiki, defined in code
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use leafwiki::cmd;
//!
//! cmd::build::run(Path::new("leafwiki.toml"), Some(Path::new("docs")), None).unwrap();
//! ```

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;
pub mod handbook;

pub use leafwiki_core::Config;
pub use leafwiki_generator::{BuildStats, Site};

/// Load the configuration at `path`, falling back to defaults when the file
/// does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::warn!(?path, "configuration file not found, using defaults");
        return Ok(Config::new("leafwiki"));
    }

    Config::load_with_env(path).wrap_err("Failed to load configuration")
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
