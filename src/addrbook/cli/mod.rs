//! Binary-only glue: flags, logging, and the interactive session loop.

mod args;
mod input;
mod logging;
mod print;

use addrbook::api::BookApi;
use addrbook::config::BookConfig;
use addrbook::error::Result;
use addrbook::store::fs::JsonFileStore;
use addrbook::store::BookStore;
use args::Cli;
use chrono::NaiveDate;
use clap::Parser;
use input::{EditorSource, Input, LineSource};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

const PROMPT: &str = "Enter a command: ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let mut api = open_api(&cli)?;
    let source = EditorSource::new()?;

    let stdout = io::stdout();
    run_session(&mut api, source, stdout.lock(), cli.today)
}

fn open_api(cli: &Cli) -> Result<BookApi<JsonFileStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = cli.config_dir.clone().unwrap_or_else(|| cwd.clone());

    let mut config = BookConfig::load(&config_dir)?;
    if let Some(file) = &cli.file {
        config.data_file = cwd.join(file);
    }
    if cli.rollover {
        config.year_rollover = true;
    }

    let store = JsonFileStore::new(config.data_path(&config_dir));
    debug!(path = %store.path().display(), "opening address book");
    BookApi::open(store, config)
}

/// Reads commands from `input` until `close`/`exit`.
/// Ctrl-C and end of input both take the `exit` path, so the book is
/// saved however the session ends.
fn run_session<S, L, W>(
    api: &mut BookApi<S>,
    mut input: L,
    mut out: W,
    today: Option<NaiveDate>,
) -> Result<()>
where
    S: BookStore,
    L: LineSource,
    W: Write,
{
    writeln!(out, "Welcome to the assistant bot!")?;

    loop {
        let line = match input.read_line(PROMPT)? {
            Input::Line(line) => line,
            Input::Interrupted | Input::Eof => {
                writeln!(out)?;
                "exit".to_string()
            }
        };

        let outcome = match today {
            Some(day) => api.dispatch_at(&line, day)?,
            None => api.dispatch(&line)?,
        };
        print::print_result(&mut out, outcome.result())?;
        out.flush()?;

        if outcome.is_exit() {
            return Ok(());
        }
    }
}
