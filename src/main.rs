use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use audit_armor::{
    events, ui, App, DashboardConfig, Overrides, SystemClock, ThemeChoice, DASHBOARD,
};

#[derive(Parser, Debug)]
#[command(name = "audit-armor")]
#[command(about = "Terminal security-status dashboard with a live heartbeat clock")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme: auto, dark or light
    #[arg(long)]
    theme: Option<ThemeChoice>,

    /// Input poll and redraw interval (e.g., "250ms", "1s")
    #[arg(long)]
    tick_rate: Option<String>,

    /// strftime pattern for the heartbeat clock (e.g., "%H:%M:%S")
    #[arg(long)]
    time_format: Option<String>,

    /// Write logs to this file while the dashboard is running
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Render a single frame to stdout and exit
    #[arg(long, conflicts_with = "json")]
    print: bool,

    /// Width used with --print
    #[arg(long, default_value = "80")]
    width: u16,

    /// Height used with --print
    #[arg(long, default_value = "24")]
    height: u16,

    /// Print the dashboard content as JSON and exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = DashboardConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .apply(Overrides {
            theme: args.theme,
            tick_rate: args.tick_rate.clone(),
            time_format: args.time_format.clone(),
            log_file: args.log_file.clone(),
        })?;

    let interactive = !(args.print || args.json);
    init_logging(config.log_file.as_deref(), interactive)?;
    info!(theme = %config.theme, tick_rate = %config.tick_rate, "configuration loaded");

    // Non-interactive modes
    if args.json {
        println!("{}", serde_json::to_string_pretty(&DASHBOARD)?);
        return Ok(());
    }
    if args.print {
        return print_frame(&config, args.width, args.height);
    }

    run_tui(&config)
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so interactive runs only log when a file is
/// given. One-shot modes log warnings to stderr.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let default_level = if interactive { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if !interactive => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
        None => Ok(()),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

/// Render one frame with the real clock and print it.
fn print_frame(config: &DashboardConfig, width: u16, height: u16) -> Result<()> {
    let mut app = App::new(
        Box::new(SystemClock),
        config.theme.resolve(),
        &config.time_format,
    );
    let screen = ui::render_to_string(&app, width, height)?;
    app.unmount();
    print!("{}", screen);
    Ok(())
}

/// Run the interactive dashboard until the user quits.
fn run_tui(config: &DashboardConfig) -> Result<()> {
    let tick_rate = config.tick_rate()?;
    // Query the terminal background before switching screens
    let theme = config.theme.resolve();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Mount the dashboard (starts the heartbeat)
    let mut app = App::new(Box::new(SystemClock), theme, &config.time_format);

    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Stop the heartbeat before tearing the terminal down
    app.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(Event::Key(key)) = events::poll_event(tick_rate)? {
            events::handle_key_event(app, key);
        }

        // Resize needs no handling: the next iteration redraws at the new size
        app.on_tick();
    }

    Ok(())
}
