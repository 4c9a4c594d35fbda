//! MonkeyFinder - Browse monkey species and rate them
//!
//! Fetches the monkey catalog once and either prints it (`--plain`) or shows
//! it in a terminal UI where each monkey can be given 0 to 5 stars.

use std::io;
use std::panic;
use std::process;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use monkeyfinder::app::{App, AppState};
use monkeyfinder::cache::{MonkeyCache, MonkeyError};
use monkeyfinder::cli::{Cli, StartupConfig};
use monkeyfinder::data::{self, HttpMonkeySource, MonkeySource};
use monkeyfinder::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Installs the log subscriber; `RUST_LOG` overrides `default_filter`
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Renders the UI based on the current application state
fn render_ui<S: MonkeySource>(frame: &mut ratatui::Frame, app: &App<S>) {
    match &app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::MonkeyList => {
            ui::render_monkey_list(frame, app);
        }
        AppState::MonkeyDetail(_) => {
            ui::render_monkey_detail(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a loading message while data is being fetched
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading monkeys...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

/// Prints monkeys to stdout without starting the terminal UI
///
/// Ratings are never shown here: they only live as long as the interactive
/// session that sets them.
async fn run_plain(config: &StartupConfig) -> Result<(), MonkeyError> {
    let mut cache = MonkeyCache::with_source(HttpMonkeySource::with_url(config.url.clone()));

    // Fetch failures are swallowed by the cache and show up as an empty list
    if cache.get_monkeys().await.is_empty() {
        println!("No monkeys found");
        return Ok(());
    }

    if let Some((lat, lon)) = config.near {
        if let Some(monkey) = cache.closest_to(lat, lon) {
            let km = data::geo::distance_km(lat, lon, monkey.latitude, monkey.longitude);
            println!("Closest monkey: {} ({:.0} km away)", monkey.name, km);
        }
    }

    match &config.initial_monkey {
        Some(name) => {
            let monkey = cache.find_monkey_by_name(name)?;
            println!("{}", monkey.name);
            println!("  Location:    {}", monkey.location);
            println!("  Population:  {}", ui::format_population(monkey.population));
            println!("  Coordinates: {:.4}, {:.4}", monkey.latitude, monkey.longitude);
            println!("  Image:       {}", monkey.image);
            println!();
            println!("{}", monkey.details);
        }
        // --near alone prints just the closest monkey
        None if config.near.is_some() => {}
        None => {
            for monkey in cache.monkeys() {
                println!(
                    "{:<26} {:<28} {:>12}",
                    monkey.name,
                    monkey.location,
                    ui::format_population(monkey.population)
                );
            }
        }
    }

    Ok(())
}

/// Runs the interactive terminal UI until the user quits
async fn run_tui(config: &StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance, carrying --name and --near over
    let mut app = App::with_startup_config(config);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Trigger the one and only catalog fetch
    app.load_monkeys().await;

    // Main event loop
    loop {
        // Redraw only after navigation or a rating change
        if app.take_dirty() {
            terminal.draw(|f| render_ui(f, &app))?;
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => {
                    terminal.draw(|f| render_ui(f, &app))?;
                }
                _ => {}
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    if config.plain {
        init_tracing("warn");
        if let Err(e) = run_plain(&config).await {
            eprintln!("error: {}", e);
            process::exit(1);
        }
        Ok(())
    } else {
        // Logging stays off while the terminal UI owns the screen
        init_tracing("off");
        run_tui(&config).await
    }
}
