use std::io;
use std::process::ExitCode;

use argmatch::{
    cli::{Cli, Mode},
    config::Config,
    logging::init_logging,
    output::OutputWriter,
    processor::bootstrapper::is_help,
    report::{run, usage_lines},
};
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    let writer = OutputWriter::new(config.format, config.no_color);

    if config.mode != Mode::Generic && is_help(&config.tokens) {
        let stdout = io::stdout();
        writer.write_usage(&mut stdout.lock(), config.mode, &usage_lines(config.mode))?;
        return Ok(ExitCode::SUCCESS);
    }

    let report = run(&config)?;

    writer.write(&report)?;

    if report.success {
        Ok(ExitCode::SUCCESS)
    } else {
        log::debug!("Argument processing failed");
        Ok(ExitCode::FAILURE)
    }
}
