//! Configuration commands.

use std::path::Path;

use crate::config::{self, Config};

/// Show the effective configuration, or write it to disk with `init`
pub fn cmd_config(
    config: &Config,
    path: Option<&Path>,
    init: bool,
    force: bool,
) -> anyhow::Result<()> {
    if !init {
        match path.map(Path::to_path_buf).or_else(config::config_path) {
            Some(p) => println!("# {}", p.display()),
            None => println!("# (no config directory)"),
        }
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    let written = init_config(config, path, force)?;
    println!("Wrote {}", written.display());
    Ok(())
}

fn init_config(
    config: &Config,
    path: Option<&Path>,
    force: bool,
) -> anyhow::Result<std::path::PathBuf> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_path().ok_or(config::ConfigError::NoConfigDir)?,
    };

    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    match path {
        Some(_) => config::save_to(config, &target)?,
        None => {
            config::save(config)?;
        }
    }
    Ok(target)
}
