use std::str::FromStr;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use gitdeck::commands::{add, completions, init, nav, present, update};
use gitdeck::session::SessionMode;
use gitdeck::validation::clap_slide_name_validator;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gitdeck")]
#[command(
    about = "Turns your codebase into a slide deck. Ideal for workshops or partly live coding sessions",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a slide deck file in this repository
    Init,

    /// Add the current commit as a new slide
    Add {
        /// Slide name (alphanumeric, dash, underscore only; max 64 characters)
        #[arg(value_parser = clap_slide_name_validator)]
        name: String,
    },

    /// Update the current slide to the current commit
    Update,

    /// Stash changes and go to the next slide
    Next,

    /// Stash changes and go to the previous slide
    Previous,

    /// Stash changes and go to the first slide
    First,

    /// Play the deck from the first slide (read-only navigation)
    Present,

    /// Edit the deck interactively (navigate, update, and insert slides)
    Edit,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::execute(),
        Commands::Add { name } => add::execute(name),
        Commands::Update => update::execute(),
        Commands::Next => nav::next(),
        Commands::Previous => nav::previous(),
        Commands::First => nav::first(),
        Commands::Present => present::execute(SessionMode::Presenter),
        Commands::Edit => present::execute(SessionMode::Editor),
        Commands::Completions { shell } => {
            let shell = completions::Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            completions::generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
