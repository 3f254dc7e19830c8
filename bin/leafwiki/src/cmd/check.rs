//! Check command - validate configuration and the site tree

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use leafwiki_core::{Config, lang};

use crate::{handbook, load_config};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and builds the site tree without writing
/// any files.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and site tree");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = load(config_path, &mut result);

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);

        println!("\nChecking site tree...");
        check_site_tree(cfg, &mut result);
    }

    println!();
    for warning in &result.warnings {
        println!("  ⚠ {warning}");
    }
    for error in &result.errors {
        println!("  ✗ {error}");
    }

    if result.has_errors() {
        bail!("Check failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Check failed with {} warning(s) in strict mode",
            result.warnings.len()
        );
    }

    println!("  All checks passed.");
    Ok(())
}

/// Load the configuration the same way `build` does, environment
/// overrides included.
fn load(config_path: &Path, result: &mut ValidationResult) -> Option<Config> {
    if !config_path.exists() {
        result.add_warning(format!(
            "Configuration file {} does not exist, defaults will be used",
            config_path.display()
        ));
    }

    match load_config(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            Some(config)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e:#}"));
            println!("  ✗ Configuration invalid: {e:#}");
            None
        }
    }
}

fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !lang::is_known_language(&config.site.language) {
        result.add_warning(format!(
            "Language '{}' is not one of {}",
            config.site.language,
            lang::KNOWN_LANGUAGES.join(", ")
        ));
    }

    if config.build.output_dir.trim().is_empty() {
        result.add_error("build.output_dir cannot be empty");
    }
}

fn check_site_tree(config: &Config, result: &mut ValidationResult) {
    let site = match handbook::site(config) {
        Ok(site) => site,
        Err(e) => {
            result.add_error(format!("Site tree error: {e}"));
            return;
        }
    };

    for page in site.pages() {
        if let Err(e) = page.render(site.info()) {
            result.add_error(format!("Page '{}' failed to render: {e}", page.id().id()));
        }
    }

    println!(
        "  ✓ {} page(s), {} stylesheet(s)",
        site.pages().len(),
        site.stylesheets().len()
    );
}
