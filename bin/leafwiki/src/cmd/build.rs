//! Build command - generates the handbook wiki

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use leafwiki_core::Config;
use leafwiki_generator::BuildStats;

use crate::{handbook, load_config};

/// Apply command-line overrides to a loaded configuration.
pub fn apply_overrides(config: &mut Config, output: Option<&Path>, lang: Option<&str>) {
    if let Some(dir) = output {
        config.build.output_dir = dir.to_string_lossy().to_string();
    }

    if let Some(tag) = lang {
        tracing::info!(lang = tag, "Overriding site language from CLI");
        config.site.language = tag.to_string();
    }
}

/// Build the handbook into the configured output directory.
pub fn build(config: &Config) -> Result<BuildStats> {
    let site = handbook::site(config).wrap_err("Failed to build site tree")?;
    let output = PathBuf::from(&config.build.output_dir);

    site.generate(&output).wrap_err("Generation failed")
}

/// Run the build command.
pub fn run(config_path: &Path, output: Option<&Path>, lang: Option<&str>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?lang, "Starting build");

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, output, lang);
    config.validate().wrap_err("Invalid configuration")?;

    tracing::debug!(?config, "Loaded configuration");

    let stats = build(&config)?;
    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Stylesheets: {}", stats.stylesheets);
    println!("  Pages:       {}", stats.pages);
    println!("  Language:    {}", config.site.language);
    println!();
    println!("  Duration:    {:.2}s", duration.as_secs_f64());
    println!("  Output:      {}", config.build.output_dir);
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
