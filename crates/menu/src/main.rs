// Chunk: docs/chunks/selector_widget - Type-to-filter selection menu
// Chunk: docs/chunks/terminal_frontend - Terminal canvas and event source
//!
//! lite-menu binary.
//!
//! 1. Parse flags and install logging
//! 2. Merge the config file with the flags
//! 3. Read candidates from stdin
//! 4. Run the menu on the terminal, printing each accepted line to stdout
//!
//! Exit status is 0 when a selection was accepted, 1 when the menu was
//! cancelled and 2 on any error.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use lite_menu::cli::Cli;
use lite_menu::config::{self, Config};
use lite_menu::event_loop::{self, Outcome};
use lite_menu::terminal::TerminalFrontend;
use lite_menu::{logging, CandidateSet, Dispatcher, LayoutEngine};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.display_version {
        println!("lite-menu {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("lite-menu: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    logging::init(cli.log_file.as_deref()).context("failed to open log file")?;

    let raw = config::load(cli.config_file.as_deref())?.merge(cli.overlay());
    let config = Config::resolve(&raw)?;

    let candidates = CandidateSet::read_from(io::stdin().lock(), config.separator.as_deref())
        .context("failed to read candidates from stdin")?;

    // The frontend restores the terminal when it goes out of scope, before
    // any error is reported.
    let mut frontend = TerminalFrontend::start(config.window).context("failed to set up the terminal")?;
    let window = frontend.window();
    let layout = LayoutEngine::new(config.layout, window.width, window.height);
    let mut dispatcher = Dispatcher::new(&candidates, layout, config.options);

    let stdout = io::stdout();
    let outcome = event_loop::run(&mut dispatcher, &mut frontend, |text| {
        let mut out = stdout.lock();
        writeln!(out, "{text}")?;
        out.flush()
    })?;

    Ok(outcome)
}
