//! # Read Their Sounds Entry Point
//!
//! Terminal picture book: three buttons (dog, cat, cow) that show the
//! animal's picture together with a fun fact and the sound it makes.
//!
//! ## Usage
//!
//! ```bash
//! # Start the app (pictures are looked up in ./, ./icons/, ./src/icons/,
//! # then <executable dir>/resources/)
//! read-their-sounds
//!
//! # Use a theme for this run only
//! read-their-sounds --theme nord
//!
//! # Show where each picture resolves and exit
//! read-their-sounds --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `1` / `2` / `3` - Show dog / cat / cow
//! - `←→` / `hl` / `Tab` - Move button focus, `Enter` / `Space` - Press
//! - `↑↓` / `jk` - Scroll the fact text
//! - `t` - Next theme
//! - `q` / `Esc` - Quit
//!
//! Buttons can also be clicked with the mouse.
//!
//! ## Logging
//!
//! The terminal belongs to the UI, so logs go to a daily file under the
//! platform data directory (`~/.local/share/read-their-sounds/logs/` on
//! Linux). Use `RUST_LOG` to change the level (default `info`).

use read_their_sounds::assets::ImageResolver;
use read_their_sounds::catalog::AnimalKind;
use read_their_sounds::ui::{self, config::Config, theme::Theme, App, AppLayout};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fmt::Write as _;
use std::io;
use std::panic;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;

const APP_DIR_NAME: &str = "read-their-sounds";
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Read Their Sounds - pick an animal, see it, read its sound
#[derive(Parser, Debug)]
#[command(name = "read-their-sounds")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A tiny terminal picture book of animal sounds", long_about = None)]
struct Args {
    /// Colour theme for this run (see --list-themes); not saved
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the built-in theme names and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the animal catalog and where each picture resolves, then exit
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args);

    let _ = panic::take_hook();

    result
}

/// Route `tracing` output to a daily log file. Returns the writer guard,
/// which must live until exit so buffered lines are flushed.
fn init_logging() -> Option<WorkerGuard> {
    let dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)?;
    let log_dir = dirs.data_local_dir().join("logs");

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Warning: File logging disabled ({}): {}",
            log_dir.display(),
            e
        );
        return None;
    }

    let appender = tracing_appender::rolling::daily(&log_dir, "read-their-sounds.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .compact()
        .try_init()
        .ok();

    Some(guard)
}

fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        print!("{}", theme_list());
        return Ok(());
    }

    let resolver = ImageResolver::for_current_process();

    if args.debug {
        print!("{}", debug_report(&resolver));
        return Ok(());
    }

    // Only the TUI logs, so the listing modes never touch the log directory
    let _log_guard = init_logging();

    let result = run_tui(&args, resolver);
    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}

fn run_tui(args: &Args, resolver: ImageResolver) -> Result<()> {
    let theme = match &args.theme {
        Some(name) => Theme::by_name(name).with_context(|| {
            format!("Unknown theme '{name}'. Use --list-themes to see the available themes")
        })?,
        None => Config::load().resolve_theme(),
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        theme = theme.name,
        "Starting"
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(resolver, theme);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    tracing::info!("Exiting");
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        // Layout is recomputed every frame so resizes rescale the picture
        let size = terminal.size().context("Failed to read terminal size")?;
        let layout = AppLayout::new(Rect::new(0, 0, size.width, size.height));
        app.set_viewport(layout.image_pixels());
        app.set_text_viewport(layout.text_inner());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = match event_reader.read_event(POLL_TIMEOUT)? {
            Some(e) => e,
            None => continue,
        };

        let previous_theme = app.theme.name;
        ui::handle_event(app, &event, &layout);

        if app.theme.name != previous_theme {
            persist_theme(app.theme);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn persist_theme(theme: &Theme) {
    let config = Config {
        theme: theme.name.to_string(),
    };
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save theme: {:#}", e);
    }
}

fn theme_list() -> String {
    let mut out = String::new();
    for theme in Theme::all() {
        let marker = if theme.name == Theme::default_theme().name {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(out, "{}{}", theme.name, marker);
    }
    out
}

fn debug_report(resolver: &ImageResolver) -> String {
    let mut out = String::from("=== Animal Catalog ===\n");
    for animal in AnimalKind::ALL {
        let record = animal.record();
        let _ = writeln!(
            out,
            "  {} {}\n    Sound: {}\n    Image: {}",
            record.emoji, record.name, record.sound, record.image_file
        );
        match resolver.resolve(record.image_file) {
            Some(found) => {
                let _ = writeln!(
                    out,
                    "    Found: {} ({})\n",
                    found.path.display(),
                    found.origin
                );
            }
            None => {
                let _ = writeln!(out, "    Found: NOT FOUND, tried:");
                for (path, _) in resolver.candidates(record.image_file) {
                    let _ = writeln!(out, "      - {}", path.display());
                }
                out.push('\n');
            }
        }
    }
    out
}
