mod app;
mod catalog;
mod config;
mod input;
mod picker;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use picker::Picker;
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "emoji-fav")]
#[command(about = "Pick an emoji, keep your favorites")]
#[command(version)]
struct Cli {
    /// Config file path (default: ~/.config/emoji-fav/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Theme preset, overrides the config file
    #[arg(long)]
    theme: Option<String>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the resolved catalog and exit
    #[arg(long)]
    print_catalog: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The TUI owns the terminal, so logs only go to a file.
    let log_layer = match cli.log_file {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emoji_fav=info".into()),
        )
        .with(log_layer)
        .init();

    // Load config
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().to_string_lossy().into_owned());
    let mut config = Config::load(&config_path)?;
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }

    let catalog = config.resolve_catalog()?;
    tracing::info!("Loaded {} catalog entries", catalog.len());

    if cli.print_catalog {
        for entry in catalog.iter() {
            println!("{}\t{}\t{}", entry.id, entry.glyph, entry.name);
        }
        return Ok(());
    }

    let theme: Theme = config.resolve_theme()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let picker = Picker::new(catalog, config.behavior.show_notices);
    let mut app = App::new(
        picker,
        theme,
        config.appearance.clone(),
        config.behavior.start_focus,
    );

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            tracing::info!("Exiting");
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => input::map_key(key, app.picker().modal()),
            Event::Mouse(mouse) => input::map_mouse(mouse),
            _ => None,
        };
        if let Some(action) = action {
            tracing::trace!("Action: {:?}", action);
            app.apply(action);
        }
    }
}
