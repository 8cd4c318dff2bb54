use clap::Parser;
use fb2_reader::app::App;
use fb2_reader::config::{ReaderConfig, LOG_FILE_ENV};
use fb2_reader::error::ReaderError;
use fb2_reader::input;
use fb2_reader::storage::{JsonStateStore, StateStore};
use fb2_reader::ui::{CrosstermScreen, SessionEnd, Theme, TuiManager};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;

/// Two-column terminal reader for FictionBook files
#[derive(Parser, Debug)]
#[command(name = "fb2-reader", version, about)]
struct Cli {
    /// Book to open (.fb2 or .fb2.zip)
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), ReaderError> {
    let path = cli.path.ok_or(ReaderError::MissingArgument)?;
    input::ensure_exists(&path)?;

    let config = ReaderConfig::default();
    let store = JsonStateStore::default_location();
    let mut state = store.load();

    println!("Загрузка файла...");
    let book = input::load_book(&path, config.wrap.heading_max_len)?;
    let start_page = state.get(&book.id).copied().unwrap_or(0);
    log::info!("Opening {} at page {}", book.source.display(), start_page + 1);

    let mut app = App::new(book.paragraphs, start_page, config);
    // The screen is dropped, and the terminal restored, before any error
    // is printed by main.
    let end = {
        let mut tui = TuiManager::new(CrosstermScreen::new(Theme::default())?);
        tui.run_event_loop(&mut app, &store, &mut state, &book.id)?
    };

    if let SessionEnd::Aborted { .. } = end {
        log::info!("Reading position of {} left unchanged", book.id);
    }
    Ok(())
}

/// Log to the file named by `FB2_READER_LOG`, filtered by `RUST_LOG`.
///
/// The reader owns the terminal, so without the variable nothing is logged.
fn init_logging() {
    let Some(log_path) = std::env::var_os(LOG_FILE_ENV) else {
        return;
    };

    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!(
            "Cannot open log file {}: {}",
            PathBuf::from(log_path).display(),
            e
        ),
    }
}
