//! Interactive shopping list.
//!
//! Reads items from stdin one line at a time, answers on stdout, and keeps
//! the list in memory until it is saved with `/save`.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, error};

use usagi::core::store::ItemStore;
use usagi::dispatch::is_fatal;
use usagi::exit_codes;
use usagi::io::config::{DEFAULT_CONFIG_FILE, load_config};
use usagi::logging;
use usagi::session::{SessionEnd, SessionOptions, run_session};

#[derive(Parser)]
#[command(name = "usagi", version, about = "Usagi's interactive shopping list")]
struct Cli {
    /// Config file (defaults to `usagi.toml` in the current directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append items from FILE before the first prompt (repeatable).
    #[arg(short, long = "load", value_name = "FILE")]
    load: Vec<PathBuf>,

    /// Do not print the welcome banner.
    #[arg(long)]
    no_banner: bool,

    /// Log more to stderr (`-v` info, `-vv` debug). Ignored when `RUST_LOG` is set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) if is_fatal(&err) => {
            error!(error = %err, "list storage exhausted");
            eprintln!("Out of memory");
            exit_codes::OUT_OF_MEMORY
        }
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let cfg = load_config(&config_path).context("load config")?;

    let options = session_options(cli, cfg.banner, cfg.preload);
    let mut store = ItemStore::new();
    let end = run_session(&mut store, io::stdin().lock(), io::stdout().lock(), &options)?;
    debug!(?end, items = store.len(), "session ended");
    match end {
        SessionEnd::Finished | SessionEnd::Quit => Ok(exit_codes::OK),
    }
}

/// Merge config values with CLI flags. Flags win; `--load` files run after `preload`.
fn session_options(cli: &Cli, banner: bool, mut preload: Vec<PathBuf>) -> SessionOptions {
    preload.extend(cli.load.iter().cloned());
    SessionOptions {
        banner: banner && !cli.no_banner,
        preload,
    }
}
