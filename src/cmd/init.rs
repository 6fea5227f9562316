//! Init command implementation
//!
//! Handles the `velura init` command which writes a `.velura.toml` with the
//! default routine settings.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::error::VeluraError;
use crate::fmt::{icon, CHECKMARK, INFO, ROCKET, WARNING};

/// Initialize velura configuration in the current directory
///
/// An existing file is left alone unless `force` is set.
///
/// # Examples
///
/// ```no_run
/// use velura::cmd::init::cmd_init;
///
/// cmd_init(false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(force: bool) -> Result<()> {
    let site_root = env::current_dir().map_err(|source| VeluraError::Io {
        context: "current directory".to_string(),
        source,
    })?;
    init_in(&site_root, force)
}

/// Initialize configuration in `site_root`
pub fn init_in(site_root: &Path, force: bool) -> Result<()> {
    println!(
        "{} {} Initializing velura",
        icon(&ROCKET),
        style("velura init").bold()
    );
    println!();

    if ConfigLoader::exists(site_root) && !force {
        println!(
            "{} Config file already exists: {}",
            icon(&WARNING),
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Pass --force to overwrite it or edit it manually.");
        return Ok(());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, site_root).map_err(VeluraError::from)?;
    log::info!("wrote {}", site_root.join(config::CONFIG_FILE_NAME).display());

    println!(
        "{} Created {}",
        icon(&CHECKMARK),
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();

    println!("{}  Defaults:", icon(&INFO));
    println!(
        "   {} routine tab: {}",
        style("•").dim(),
        style(config.routine.default_time).green()
    );
    println!(
        "   {} preselected steps: {}",
        style("•").dim(),
        style(config.routine.default_steps.join(", ")).green()
    );
    println!(
        "   {} catalog: {}",
        style("•").dim(),
        style("built-in").green()
    );
    println!();

    println!("{}  Next Steps:", icon(&INFO));
    println!(
        "   1. Set {} to serve your own catalog",
        style("catalog = \"path/to/catalog.toml\"").cyan()
    );
    println!(
        "   2. Run {} to preview the routine builder",
        style("velura routine").cyan()
    );
    println!("   3. Run {} to try the skin quiz", style("velura quiz").cyan());

    Ok(())
}
