//! Setup wizard step asking for the root directory of a web app.
//!
//! `wizard root` offers the subdirectories of the working directory (or a
//! typed path), checks the answer is a directory, and prints it. Questions go
//! to stderr so stdout carries only the answer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use wizard::error::WizardError;
use wizard::exit_codes;
use wizard::io::config::{
    DEFAULT_CONFIG_FILE, WizardConfig, load_config, render_config, write_config,
};
use wizard::io::prompter::TerminalPrompter;
use wizard::{ask_root_of_web_app, logging};

#[derive(Parser)]
#[command(
    name = "wizard",
    version,
    about = "Ask for the root directory of a web app"
)]
struct Cli {
    /// Log debug diagnostics to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for the web app root and print the chosen path.
    Root(RootArgs),
    /// Manage `wizard.toml`.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
struct RootArgs {
    /// Directory to discover candidates in and resolve answers against.
    #[arg(long)]
    dir: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seconds to wait for each answer (overrides the config; 0 waits forever).
    #[arg(long)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write the default configuration.
    Init {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective configuration.
    Show {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli.command) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_code_for(&err));
        }
    }
}

fn run(command: Command) -> Result<i32> {
    match command {
        Command::Root(args) => cmd_root(&args),
        Command::Config(ConfigCommand::Init { path, force }) => cmd_config_init(&path, force),
        Command::Config(ConfigCommand::Show { config }) => cmd_config_show(&config),
    }
}

fn cmd_root(args: &RootArgs) -> Result<i32> {
    let mut config = load_config(&args.config)?;
    if let Some(secs) = args.timeout {
        config.prompt_timeout_secs = secs;
    }
    let cwd = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("resolve working directory")?,
    };
    debug!(cwd = %cwd.display(), timeout = ?config.prompt_timeout(), "asking for web app root");

    let mut prompter = TerminalPrompter::stdio(config.prompt_timeout());
    let root = ask_root_of_web_app(&cwd, &config, &mut prompter)?;
    println!("{root}");
    Ok(exit_codes::OK)
}

fn cmd_config_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        bail!(
            "config init: {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    write_config(path, &WizardConfig::default())?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_config_show(path: &Path) -> Result<i32> {
    let config = load_config(path)?;
    print!("{}", render_config(&config)?);
    Ok(exit_codes::OK)
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<WizardError>() {
        Some(WizardError::InvalidRootDirectory(_)) => exit_codes::INVALID_ROOT,
        Some(wizard_err) if wizard_err.is_aborted() => exit_codes::ABORTED,
        _ => exit_codes::INVALID,
    }
}
