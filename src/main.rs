mod cli;
mod config;
mod error;
mod questionnaire;
mod report;
mod scoring;
mod telemetry;
mod template;
mod types;

use crate::error::AuditError;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run(cli: cli::Cli) -> Result<i32, AuditError> {
    match cli.command {
        cli::Commands::Questions(cmd) => {
            print!("{}", report::questions::to_questionnaire(cmd.help_text));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            let path = config::resolve_answers_path(&cmd.path);
            match template::write_template(&path, cmd.dry_run, cmd.no_overwrite)? {
                template::WriteOutcome::DryRun(content) => print!("{content}"),
                template::WriteOutcome::Written => {
                    if !cli.quiet {
                        println!("answers file: {}", path.display());
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Meters(cmd) => {
            let loaded = config::load_audit(&cmd.path)?;
            if !cli.quiet {
                println!("answers file: {}\n", loaded.path.display());
            }
            print!("{}", report::meters::to_meters(&loaded.answers));
            if scoring::is_complete(&loaded.answers) {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Missing(cmd) => {
            let loaded = config::load_audit(&cmd.path)?;
            let missing = scoring::unanswered_keys(&loaded.answers);
            if missing.is_empty() {
                println!("missing: none");
                return Ok(exit_code::SUCCESS);
            }
            print!("{}", report::questions::to_missing_list(&missing));
            eprintln!(
                "warning: {} of {} questions unanswered",
                missing.len(),
                questionnaire::QUESTIONS.len()
            );
            Ok(exit_code::WARNINGS)
        }
        cli::Commands::Report(cmd) => {
            let loaded = config::load_audit(&cmd.path)?;
            let audit = report::AuditReport::build(&loaded.answers, &loaded.config)?;
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&audit, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            if matches!(e, AuditError::IncompleteAssessment(_)) {
                eprintln!("hint: answer the remaining questions, then run `lockin report` again");
            }
            let code = if e.is_invalid_answers() {
                exit_code::BLOCKING
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
