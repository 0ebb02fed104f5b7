use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::info;

use super::ExplorerSettings;

/// The settings file shipped with the crate, written out on first load.
pub fn default_settings_toml() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Load explorer settings from a TOML file plus `DAGSCAN`-prefixed
/// environment overrides.
///
/// Missing keys fall back to [`ExplorerSettings::default`]; a missing file
/// is created from the shipped defaults first.
pub fn load_settings(path: &Path) -> Result<ExplorerSettings> {
    if !path.exists() {
        write_settings_to(path, default_settings_toml()).context("Could not create default settings")?;
        info!(path:% = path.display(); "Created new settings file");
    }

    let filename = path.to_str().context("Invalid settings file path")?;

    let cfg = Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix("DAGSCAN").prefix_separator("_").separator("__"))
        .build()
        .context("Could not build settings")?;

    cfg.try_deserialize().context("Invalid settings values")
}

pub fn write_settings_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create settings file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write settings content")?;
    Ok(())
}
