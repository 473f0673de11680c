use anyhow::Context;
use clap::Parser;
use codes::config::{config_path_from_env, ConfigManager, ConfigSection};
use codes::{duplicates, find_dups};
use std::ffi::OsString;

/// Prints the distinct words among its arguments, then every distinct word
/// except the first argument.
///
/// Every argument is a word, including `-h`, `--version` and `--`. The
/// config file is named by `CODES_CONFIG`.
#[derive(Parser, Debug)]
#[command(name = "find_dups", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(value_name = "WORDS", trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl Cli {
    /// A leading `--` is injected so the parser treats everything the user
    /// typed, a literal `--` included, as a word.
    fn parse_words<I: IntoIterator<Item = OsString>>(args: I) -> Self {
        let mut args = args.into_iter();
        let bin = args.next().unwrap_or_else(|| OsString::from("find_dups"));
        Self::parse_from(std::iter::once(bin).chain(std::iter::once("--".into())).chain(args))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse_words(std::env::args_os());

    let manager = ConfigManager::new();
    manager
        .load_layered(config_path_from_env().as_deref())
        .context("loading find_dups configuration")?;
    let config = manager.get().find_dups;
    log::debug!("{}", serde_json::to_string(&config.to_manifest())?);
    log::debug!("Repeated words: {:?}", duplicates(&cli.words));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    find_dups(&cli.words, &config, &mut out)?;
    Ok(())
}
