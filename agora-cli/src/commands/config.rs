use std::path::Path;

use agora_core::config::AgoraConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(override_path: Option<&Path>, config: &AgoraConfig) -> Result<()> {
    let config_path = match override_path {
        Some(path) => path.to_path_buf(),
        None => AgoraConfig::config_path()?,
    };
    let status = if config_path.exists() {
        ""
    } else {
        " (not found, using defaults)"
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}{}", config_path.display(), status.dimmed());
    println!();
    println!("{}", "Thresholds".bold());
    print!("{}", config.to_toml()?);

    Ok(())
}
