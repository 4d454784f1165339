//! cdplus: an interactive directory navigator for the terminal.
//!
//! This binary initialises the terminal, runs the main event loop, restores
//! the terminal on exit or panic, and finally exports the chosen path to the
//! clipboard and stdout.

mod app;
mod background;
mod clipboard;
mod icons;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use cdplus_core::config::settings::Config;
use cdplus_core::config::{default_config_dir, Settings, CONFIG_FILE};
use cdplus_core::event::{Command, Event};
use cdplus_core::export::{ExportGateway, StdoutSink};
use cdplus_core::format::{lexical_clean, PathFormatter};
use cdplus_core::fs::ops::{DirectoryReader, LocalReader};

use crate::app::{App, WINDOW_TITLE};
use crate::background::spawn_directory_read;
use crate::clipboard::ClipboardSink;
use crate::input::{handle_key, InputState};
use crate::render::render;

/// Browse directories and copy a path in one of several formats.
///
/// Keys: `f` file name, `r` relative path, `a` absolute path, `d` directory,
/// `p` home-relative directory; `/` filters, `q` quits.
#[derive(Debug, Parser)]
#[command(name = "cdplus", version, about)]
struct Cli {
    /// Directory to start in (defaults to the current directory)
    start_dir: Option<PathBuf>,

    /// Directory holding config.toml, keymap.toml and theme.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write logs to this file instead of the default
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    no_clipboard: bool,

    /// Do not print the result on stdout
    #[arg(long)]
    no_stdout: bool,
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("cdplus.log")
}

/// Logs go to a file; the terminal is in raw mode while the UI runs.
fn init_logging(file: &Path, level: &str) -> anyhow::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .with_context(|| format!("failed to open log file {}", file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn resolve_start_dir(arg: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let dir = match arg {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    let absolute = std::path::absolute(&dir)
        .with_context(|| format!("failed to resolve {}", dir.display()))?;
    Ok(lexical_clean(&absolute))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config_dir.clone().or_else(default_config_dir);
    let log_config = config_dir
        .as_ref()
        .and_then(|dir| Config::load(&dir.join(CONFIG_FILE)).ok())
        .unwrap_or_default()
        .log;
    let log_file = cli
        .log_file
        .clone()
        .or(log_config.file)
        .unwrap_or_else(default_log_file);
    init_logging(&log_file, &log_config.level)?;

    let settings = config_dir
        .as_deref()
        .map(Settings::load_from)
        .unwrap_or_default();

    let start_dir = resolve_start_dir(cli.start_dir.clone())?;
    tracing::info!(start = %start_dir.display(), "starting cdplus");

    let reader: Arc<dyn DirectoryReader> = Arc::new(LocalReader);
    let app = App::new(&start_dir, reader.as_ref(), settings)
        .with_context(|| format!("failed to read {}", start_dir.display()))?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, app, reader).await;
    restore_terminal(&mut terminal)?;

    let app = match result {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = export(&app, &cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    reader: Arc<dyn DirectoryReader>,
) -> anyhow::Result<App> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut input_state = InputState::new();

    loop {
        // 1. Apply finished directory reads in arrival order
        while let Ok(event) = rx.try_recv() {
            app = dispatch(app, event, &reader, &tx);
        }

        if app.should_quit() {
            break;
        }

        // 2. Draw
        terminal.draw(|f| render(f, &app))?;

        // 3. Keys
        if event::poll(Duration::from_millis(100))? {
            let TermEvent::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let (event, new_state) = handle_key(
                key,
                app.navigator().mode(),
                &input_state,
                app.keymap(),
            );
            input_state = new_state;
            if let Some(event) = event {
                app = dispatch(app, event, &reader, &tx);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Applies one event and starts whatever read it requests.
fn dispatch(
    app: App,
    event: Event,
    reader: &Arc<dyn DirectoryReader>,
    tx: &mpsc::UnboundedSender<Event>,
) -> App {
    let (app, command) = app.with_event(event);
    if let Some(Command::ReadDirectory(path)) = command {
        spawn_directory_read(Arc::clone(reader), path, tx.clone());
    }
    app
}

/// Formats the pending selection, if any, and hands it to the enabled sinks.
fn export(app: &App, cli: &Cli) -> anyhow::Result<()> {
    let Some(pending) = app.navigator().pending_export() else {
        tracing::info!("quit without export");
        return Ok(());
    };

    let general = &app.config().general;
    let formatter =
        PathFormatter::new(app.initial_dir()).with_home_token(general.home_token.clone());

    let mut gateway = ExportGateway::new();
    if general.copy_to_clipboard && !cli.no_clipboard {
        gateway = gateway.with_sink(Box::new(ClipboardSink));
    }
    if general.print_to_stdout && !cli.no_stdout {
        gateway = gateway.with_sink(Box::new(StdoutSink::stdout()));
    }

    let report = gateway.export(pending, &formatter)?;
    for (sink, error) in &report.failures {
        eprintln!("Warning: {sink}: {error}");
    }
    Ok(())
}
