use anyhow::Context;
use clap::Parser;
use codes::config::{ConfigManager, ConfigSection, CONFIG_PATH_ENV};
use codes::{Countdown, ThreadPause};
use std::path::PathBuf;

/// Prints a countdown, one value per second.
#[derive(Parser, Debug)]
#[command(name = "countdown", version)]
struct Cli {
    /// TOML file with a [countdown] section
    #[arg(long, value_name = "PATH", env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let manager = ConfigManager::new();
    manager
        .load_layered(cli.config.as_deref())
        .context("loading countdown configuration")?;
    let config = manager.get().countdown;
    log::debug!("{}", serde_json::to_string(&config.to_manifest())?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Countdown::new(config)?
        .run(&mut out, &mut ThreadPause)
        .context("writing countdown")?;
    Ok(())
}
