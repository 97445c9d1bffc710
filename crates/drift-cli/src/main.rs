//! Drift monitor CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use drift_cli::commands::{run_validate, run_value_counts};
use drift_cli::logging::{LogConfig, LogFormat, init_logging};
use drift_model::MonitorOptions;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ValidateArgs, ValueCountsArgs};
use crate::summary::{print_roles, print_tests, print_value_counts};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Validate(args) => exit_on_error(validate(args)),
        Command::ValueCounts(args) => exit_on_error(value_counts(args)),
        Command::Tests => {
            print_tests();
            0
        }
    };
    std::process::exit(exit_code);
}

fn exit_on_error(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

fn validate(args: &ValidateArgs) -> anyhow::Result<()> {
    let options = MonitorOptions::default().with_check_schema(!args.no_check_schema);
    let report = run_validate(&args.job, &options)?;
    print_roles(&report);
    Ok(())
}

fn value_counts(args: &ValueCountsArgs) -> anyhow::Result<()> {
    let options = MonitorOptions::default()
        .with_check_schema(!args.no_check_schema)
        .with_value_count_layout(args.layout.into());
    let report = run_value_counts(&args.job, &args.baseline, &args.sample, &options)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.metrics)?);
    } else {
        print_value_counts(&report);
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config = config.with_level(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    }
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        })
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
}
