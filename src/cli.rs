use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lockin",
    version,
    about = "Google account dependency (lock-in) self-assessment"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the questionnaire with every key and permitted answer
    Questions(QuestionsCommand),
    /// Write an empty answers file (resets an existing one)
    Init(InitCommand),
    /// Show live category meters for the current answers
    Meters(PathCommand),
    /// List questions that are still unanswered
    Missing(PathCommand),
    /// Render the final report once every question is answered
    Report(ReportCommand),
}

#[derive(Args)]
pub struct QuestionsCommand {
    /// Include the guidance text for each question
    #[arg(long)]
    pub help_text: bool,
}

#[derive(Args)]
pub struct InitCommand {
    /// Answers file or directory (defaults to ./lockin.toml)
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args)]
pub struct PathCommand {
    /// Answers file or directory containing lockin.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ReportCommand {
    /// Answers file or directory containing lockin.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
