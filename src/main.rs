//! commitgen - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commitgen::config::{config_file, ensure_api_key, save_api_key};
use commitgen::{
    CommitWorkflow, GitCli, Prompter, TemplateComposer, TerminalPrompter, WorkflowError,
    WorkflowOptions,
};

/// Environment variable holding a tracing filter directive.
const LOG_ENV_VAR: &str = "COMMITGEN_LOG";

/// Generate commit messages for staged changes.
#[derive(Parser, Debug)]
#[command(name = "commitgen")]
#[command(about = "CommitGen - Conventional Commit message generator for staged changes")]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a commit message from staged changes and commit it
    Commit {
        /// Push to the upstream branch after committing
        #[arg(short, long)]
        push: bool,
    },

    /// Show the CommitGen version
    Version,

    /// Store the API key in the config file
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<WorkflowError>()
                .map(WorkflowError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Commit { push } => run_commit(push),
        Command::Version => {
            println!("CommitGen version: {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Config => run_config(&mut TerminalPrompter::new()),
    }
}

fn run_commit(push: bool) -> Result<()> {
    println!("Starting commit workflow...");

    match ensure_api_key() {
        Ok(_) => debug!("API key configured"),
        Err(e) => debug!("No API key available ({}); using template messages", e),
    }

    let gateway = GitCli::new();
    let composer = TemplateComposer::new();
    let mut prompter = TerminalPrompter::new();

    let outcome = CommitWorkflow::new(
        &gateway,
        &composer,
        &mut prompter,
        WorkflowOptions { push },
    )
    .run()?;

    if outcome.pushed {
        println!("Pushed to upstream.");
    }
    println!("Done.");

    Ok(())
}

fn run_config(prompter: &mut dyn Prompter) -> Result<()> {
    let key = prompter
        .secret("OpenAI API key")
        .context("Failed to read API key")?;

    let path = config_file()?;
    save_api_key(&path, &key).context("Failed to save API key")?;

    println!("API key saved to {}", path.display());
    Ok(())
}
