//! Project scaffolding for the `init` subcommand.

use anyhow::{Context, bail};
use std::fs;
use std::path::Path;

use crate::cli::output::Output;

/// Default configuration written by `mela-server init`.
const CONFIG_TEMPLATE: &str = r#"# Mela server configuration

[server]
host = "127.0.0.1"
port = 3000
log_level = "info"

[session]
# Seconds of inactivity after which a conversation session is dropped
ttl_secs = 1800
# Seconds between background sweeps of expired sessions
sweep_interval_secs = 300
"#;

/// Scaffold a `mela.toml` in `path`.
pub fn run(path: &Path, force: bool, out: &Output) -> anyhow::Result<()> {
    out.banner();

    let config_path = path.join("mela.toml");
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory {}", path.display()))?;
    fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    out.created("config", &config_path.display().to_string());
    out.success("Project initialized");
    out.info("Start the server with: mela-server");

    Ok(())
}
