//! Initialize relcheck configuration

use std::fs;
use std::path::Path;

use relcheck::config::{Config, CONFIG_FILE};
use relcheck::output::OutputMode;

/// Write a default `.relcheck.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        anyhow::bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }

    fs::write(path, Config::sample())?;

    match mode {
        OutputMode::Human => {
            println!("Created {CONFIG_FILE}");
            println!("Edit it to point at your GitLab project, then set RELCHECK_GITLAB_TOKEN.");
        },
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "success": true,
                    "created": CONFIG_FILE,
                })
            );
        },
    }

    Ok(())
}
