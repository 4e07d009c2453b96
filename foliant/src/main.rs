//! C10: CLI entry point — flag parsing, logging, signal handling, and
//! wiring folder discovery into the Request Dispatcher.

mod cli;
mod discovery;
mod signals;

use clap::Parser;
use cli::{Cli, CcittFlag};
use foliant_core::{CcittPolicy, EncodeOptions};
use foliant_pipeline::dispatch_folders;
use std::process::ExitCode;

fn ccitt_policy(flag: CcittFlag) -> CcittPolicy {
    match flag {
        CcittFlag::On => CcittPolicy::On,
        CcittFlag::Off => CcittPolicy::Off,
        CcittFlag::Auto => CcittPolicy::Auto,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    signals::install();

    let cli = Cli::parse();
    if let Err(message) = cli.validate() {
        eprintln!("error: {message}");
        return ExitCode::FAILURE;
    }

    let options = match EncodeOptions::new(
        ccitt_policy(cli.ccitt),
        cli.rgbq,
        cli.grq,
        cli.rgbdpi,
        cli.grdpi,
    ) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let folders = match discovery::discover_folders(&cli.input) {
        Ok(folders) => folders,
        Err(err) => {
            eprintln!("error: failed to read --input {}: {err}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    if folders.is_empty() {
        log::warn!("no page folders with TIFF files found under {}", cli.input.display());
    }

    for dir in &cli.output {
        if let Err(err) = std::fs::create_dir_all(dir) {
            eprintln!("error: failed to create --output {}: {err}", dir.display());
            return ExitCode::FAILURE;
        }
    }

    let reports = dispatch_folders(folders, &cli.output, &options);

    let mut had_error = false;
    for report in &reports {
        log::info!(
            "{}: {}/{} pages written",
            report.folder,
            report.pages_written,
            report.pages_total
        );
        for error in &report.page_errors {
            log::warn!("{}: {error}", report.folder);
        }
        if report.pages_written < report.pages_total && report.pages_total > 0 {
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
