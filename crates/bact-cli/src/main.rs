//! Bacteria dynamics dashboard CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use bact_cli::commands::{run_chart, run_page, run_reference, run_sample};
use bact_cli::display::{static_table, tidy_table, wide_table};
use bact_cli::logging::{LogConfig, LogFormat, init_logging};
use bact_cli::types::{ChartRequest, PageRequest, ReferenceRequest, SampleRequest};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Chart(args) => {
            let request = ChartRequest {
                input: args.file,
                output: args.output,
                tidy_csv: args.tidy_csv,
                title: args.title,
                x_label: args.x_label,
                y_label: args.y_label,
                legend_title: args.legend_title,
            };
            run_chart(&request).map(|outcome| {
                println!("{}", wide_table(&outcome.table));
                if !outcome.tidy.is_empty() {
                    println!("{}", tidy_table(&outcome.tidy));
                }
                match &outcome.chart {
                    Some(path) => println!("Chart: {}", path.display()),
                    None => println!("No data rows; chart skipped."),
                }
                if let Some(path) = &outcome.tidy_csv {
                    println!("Tidy CSV: {}", path.display());
                }
            })
        }
        Command::Sample(args) => {
            let request = SampleRequest {
                output: args.output,
                days: args.days,
                seed: args.seed,
                categories: args.categories,
            };
            run_sample(&request).map(|outcome| {
                println!("{}", wide_table(&outcome.table));
                println!(
                    "Sample: {} ({}, {} bytes)",
                    outcome.output.display(),
                    outcome.mime,
                    outcome.bytes
                );
            })
        }
        Command::Reference(args) => {
            let request = ReferenceRequest {
                chart_output: args.chart_output,
            };
            run_reference(&request).map(|outcome| {
                println!("{}", outcome.effect.title);
                println!("{}", static_table(&outcome.effect));
                println!("{}", outcome.mixture.title);
                println!("{}", static_table(&outcome.mixture));
                if let Some(path) = &outcome.chart {
                    println!("Chart: {}", path.display());
                }
            })
        }
        Command::Page(args) => {
            let request = PageRequest {
                upload: args.upload,
                output: args.output,
                seed: args.seed,
            };
            run_page(&request).map(|outcome| {
                if let Some(message) = &outcome.upload_error {
                    eprintln!("warning: {message}");
                }
                println!("Page: {}", outcome.output.display());
                println!("Sample: {}", outcome.sample.display());
            })
        }
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
