//! voyager-install CLI
//!
//! Usage: voyager-install [--force] [--with-dummy] [--with-prefix=<prefix>] [OPTIONS]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use voyager_install::application::{InstallOptions, InstallPlan};
use voyager_install::config;
use voyager_install::domain::ports::InstallEventSink;
use voyager_install::domain::value_objects::TablePrefix;
use voyager_install::infrastructure::OutputMode;
use voyager_install::logging::init_logging;
use voyager_install::presentation::cli::Cli;
use voyager_install::presentation::error::print_error;
use voyager_install::presentation::factory::create_install_use_case;
use voyager_install::presentation::output::{
    plan_to_json, render_plan, write_event, JsonEventSink, OutputFormat, TextEventSink,
};
use voyager_install::presentation::terminal::{detect_capabilities, TerminalCapabilities};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let caps = detect_capabilities().with_color_override(cli.color);
    init_logging(cli.verbose, caps.supports_color);

    let json = cli.json;
    match run(cli, caps) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err, json, caps);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, caps: TerminalCapabilities) -> Result<()> {
    let prefix = TablePrefix::from_option(cli.with_prefix.as_deref())?;
    let options = InstallOptions::new(&cli.project)
        .with_force(cli.force)
        .with_dummy(cli.with_dummy)
        .with_prefix(prefix)
        .with_dry_run(cli.dry_run)
        .with_resume_from(cli.from_step);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if cli.list_steps {
        let plan = InstallPlan::for_options(&options);
        match format {
            OutputFormat::Json => {
                write_event(&mut std::io::stdout().lock(), &plan_to_json(&plan))?
            }
            OutputFormat::Text => print!("{}", render_plan(&plan)),
        }
        return Ok(());
    }

    let (config, warnings) = config::load_for_project(cli.config.as_deref(), &cli.project)?;
    for warning in &warnings {
        warn!("{warning}");
    }

    // Tool output would corrupt the NDJSON stream.
    let (output, sink): (OutputMode, Box<dyn InstallEventSink>) = match format {
        OutputFormat::Json => (OutputMode::Capture, Box::new(JsonEventSink::stdout())),
        OutputFormat::Text => (
            OutputMode::Inherit,
            Box::new(TextEventSink::stdout(caps, cli.verbose)),
        ),
    };
    let use_case = create_install_use_case(config, &cli.project, output);

    use_case.execute_with_events(&options, sink.as_ref())?;
    Ok(())
}
