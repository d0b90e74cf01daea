mod app;
mod config;
mod domain;
mod input;
mod notifications;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{default_log_path, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Grouping, TaskStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A terminal task dashboard with priority columns and a live completion-rate chart", long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/taskboard/config.json)
    #[arg(long, env = "TASKBOARD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Grouping shown on startup
    #[arg(short, long, value_enum)]
    grouping: Option<Grouping>,

    /// Start with a few sample tasks
    #[arg(long)]
    demo: bool,

    /// Use ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Print a markdown summary when leaving the dashboard
    #[arg(long)]
    summary: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration as JSON
    Config,
}

impl Cli {
    /// Apply command-line flags on top of the loaded config
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(grouping) = self.grouping {
            config.grouping = grouping;
        }
        if self.demo {
            config.demo = true;
        }
        if self.ascii {
            config.use_emoji = false;
        }
        if self.summary {
            config.summary_on_exit = true;
        }
    }
}

/// Tracing is opt-in via RUST_LOG and goes to a log file, since the
/// dashboard owns the terminal.
fn init_tracing() -> Result<()> {
    let Some(filter) = std::env::var("RUST_LOG")
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
    else {
        return Ok(());
    };

    let Some(path) = default_log_path() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let mut config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply_overrides(&mut config);

    match cli.command {
        Some(Commands::Config) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        None => run_tui(&config),
    }
}

fn run_tui(config: &Config) -> Result<()> {
    let store = if config.demo {
        TaskStore::demo(config.grouping.current_bucket())
    } else {
        TaskStore::new()
    };
    let mut app = AppState::new(store, config);
    tracing::info!(grouping = config.grouping.name(), tasks = app.store.len(), "starting dashboard");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if config.summary_on_exit {
        print!("{}", report::render_report(&app.dashboard, chrono::Local::now()));
    }
    tracing::info!(tasks = app.store.len(), score = app.dashboard.score, "dashboard closed");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &Config,
) -> Result<()> {
    let tick_rate = ticker::tick_duration(config.tick_ms);

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Expire toasts
        app.tick();
    }
}
