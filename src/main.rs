//! # Glyphref CLI Entry Point
//!
//! A terminal reference for Unicode and emoji characters: browse by
//! category, search, copy glyphs or their HTML entities to the clipboard,
//! and export the current view as a paginated PDF.
//!
//! ## Usage
//!
//! ```bash
//! # Open the TUI
//! glyphref
//!
//! # Export the whole catalog to unicode-emoji-reference.pdf without a TUI
//! glyphref --export
//!
//! # Export to a specific file
//! glyphref --export --output ~/docs/reference.pdf
//!
//! # Print catalog statistics and exit
//! glyphref --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` - Quit
//! - `j` / `Down`, `k` / `Up` - Move selection
//! - `h` / `Left`, `l` / `Right` - Collapse / expand a category
//! - `Enter` - Copy the selected glyph (or toggle a category header)
//! - `e` - Copy the selected character's HTML entity
//! - `/` - Search; `Esc` leaves search and clears the filter
//! - `Tab` / `BackTab` - Cycle category tabs
//! - `p` - Export the current view as PDF
//! - `i` - Show/hide the help modal

use glyphref::dataset::filter::Selector;
use glyphref::dataset::Dataset;
use glyphref::export;
use glyphref::ui;
use glyphref::ui::config::Config;
use glyphref::ui::theme::Theme;
use glyphref::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Glyphref - a terminal Unicode & emoji reference
#[derive(Parser, Debug)]
#[command(name = "glyphref")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse, copy, and export Unicode and emoji characters", long_about = None)]
struct Args {
    /// Export the catalog to a PDF and exit (no TUI)
    #[arg(long)]
    export: bool,

    /// Destination for the exported PDF
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Theme name (overrides and persists the configured theme)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Print catalog statistics and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Restore the terminal before reporting any panic.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    let dataset = Dataset::load();

    if args.debug {
        println!("=== Catalog ===");
        for category in &dataset.categories {
            println!(
                "  {} {} ({}): {} characters",
                category.icon,
                category.name,
                category.id,
                category.items.len()
            );
        }
        println!(
            "\nTotal: {} categories, {} characters",
            dataset.categories.len(),
            dataset.total_count()
        );
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export::EXPORT_FILE_NAME));

    if args.export {
        export::export_document(
            &dataset,
            "",
            &Selector::All,
            dataset.total_count(),
            &output,
        )?;
        println!("Saved {}", output.display());
        return Ok(());
    }

    // Resolve the theme: flag overrides config; an explicit flag persists.
    let mut config = Config::load();
    if let Some(name) = &args.theme {
        let theme = Theme::by_name(name)
            .with_context(|| format!("Unknown theme: {name}"))?;
        config.set_theme(theme);
        if let Err(e) = config.store() {
            eprintln!("Warning: could not save config: {e}");
        }
    }
    let theme = config.resolve_theme();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(dataset, theme.clone());

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &output, &mut event_reader).await;

    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

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

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    export_path: &Path,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        // Housekeeping: expire the toast, then deliver proximity callbacks
        // for sections that scrolled near the viewport.
        app.tick(Instant::now());
        app.update_visibility();

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = match event_reader.read_event(Duration::from_millis(100))? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            // The info modal swallows everything except its close keys.
            if app.show_info {
                match key.code {
                    KeyCode::Char('i') | KeyCode::Esc => {
                        app.toggle_info();
                    }
                    _ => {}
                }
                continue;
            }

            if app.search_mode {
                match key.code {
                    KeyCode::Esc => {
                        app.exit_search_mode();
                    }
                    KeyCode::Down => {
                        app.next();
                    }
                    KeyCode::Up => {
                        app.previous();
                    }
                    KeyCode::Backspace => {
                        app.search_pop_char();
                    }
                    KeyCode::Enter => {
                        app.copy_selected_glyph();
                    }
                    KeyCode::Char(c) => {
                        app.search_push_char(c);
                    }
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('i') => {
                        app.toggle_info();
                    }
                    KeyCode::Char('/') => {
                        app.enter_search_mode();
                    }
                    KeyCode::Esc => {
                        // Clear any active filter.
                        app.exit_search_mode();
                    }
                    KeyCode::Tab => {
                        app.next_tab();
                    }
                    KeyCode::BackTab => {
                        app.previous_tab();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.next();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.previous();
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.handle_left();
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.handle_right();
                    }
                    KeyCode::Enter => {
                        app.activate_selected();
                    }
                    KeyCode::Char('e') => {
                        app.copy_selected_entity();
                    }
                    KeyCode::Char('p') => {
                        let result = export::export_document(
                            &app.dataset,
                            &app.query,
                            &app.selector,
                            app.total_count(),
                            export_path,
                        );
                        match result {
                            Ok(()) => app.notify(format!("Saved {}", export_path.display())),
                            Err(e) => app.notify_error(format!("Export failed: {e}")),
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
