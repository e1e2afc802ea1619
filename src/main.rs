//! shopdeck - a terminal dashboard for store management.
//!
//! Browse orders, products, and customers in sortable, filterable,
//! paginated tables, with overview and analytics charts alongside.

mod app;
mod config;
mod data;
mod error;
mod events;
mod logging;
mod table;
mod ui;

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use app::App;
use config::Config;
use error::AppError;
use events::Event;

#[derive(Parser)]
#[command(name = "shopdeck", version, about = "Terminal dashboard for store management")]
struct Args {
    /// Page to open on startup.
    #[arg(long, value_parser = config::PAGE_NAMES)]
    page: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.debug)?;

    let mut config = Config::load_or_default();
    if let Some(page) = args.page {
        config.settings.start_page = page;
    }

    info!(start_page = %config.settings.start_page, "starting shopdeck");

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &config);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
        if err.is_critical() {
            eprintln!("Error: {}", err.user_message());
        }
    }
    if args.debug {
        if let Some(dir) = logging::log_directory() {
            eprintln!("Debug logs: {}", dir.display());
        }
    }
    logging::shutdown();
    result.map_err(Into::into)
}

fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(|e| AppError::terminal(format!("could not enter raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| AppError::terminal(format!("could not enter alternate screen: {}", e)))?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
) -> error::Result<()> {
    let mut app = App::new(config)?;

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        match events::next_event()? {
            Event::Resize(_, _) => {
                terminal.autoresize()?;
            }
            event => app.handle_event(event),
        }

        // Page-size changes survive restarts; a failed write only logs.
        if let Some(changed) = app.changed_settings() {
            if let Err(err) = changed.save() {
                warn!(error = %err, "could not save settings");
            }
        }
    }
    Ok(())
}
