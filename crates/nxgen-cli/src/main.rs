mod cli;
mod commands;
mod config;
mod logger;
mod prompt;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::new::NewProjectUseCase;
use prompt::DialoguerPrompt;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", ui::error_prefix());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config::LoadedConfig { config, source } = config::load(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let format = match cli.log_format {
        Some(format) => format,
        None => logger::parse_log_format(&config.log.format)?,
    };
    logger::init_logger(level, format)?;

    match &source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file found, using defaults"),
    }

    match cli.command {
        Commands::New(args) => {
            let use_case = NewProjectUseCase::new(DialoguerPrompt::new());
            let outcome = use_case.execute(&args, &config)?;
            commands::new::report(&outcome, &args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { target } => {
            let (line, valid) = commands::validate::check(&target);
            println!("{line}");
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
