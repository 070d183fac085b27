//! attr_tui - Interactive sandbox for the attribute engine

mod app;
mod config;
mod input;
mod ui;
mod world;

use app::App;
use attr_core::DurationKind;
use config::SandboxConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::TerminalKeys;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> io::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sandbox.toml"));
    let config = SandboxConfig::load_or_default(&config_path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    setup_logging(&config.log_dir)?;

    let mut app = App::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    tracing::info!(config = %config_path.display(), "sandbox started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

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

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let quit = matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        if quit {
            break;
        }
        if app.gain_pending() {
            prompt_level_gain(terminal, app)?;
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::PageUp, _) => app.scroll_log(true),
            (KeyCode::PageDown, _) => app.scroll_log(false),
            (KeyCode::Char('?'), _) => app.toggle_help(),

            (KeyCode::Char('x'), _) => app.drain(false),
            (KeyCode::Char('X'), _) => app.drain(true),
            (KeyCode::Char('z'), _) => app.drain_random(),
            (KeyCode::Char('m'), _) => app.drain_from_monster(),
            (KeyCode::Char('r'), _) => app.restore_selected(),
            (KeyCode::Char('y'), _) => app.restore_random(),
            (KeyCode::Char('R'), _) => app.restore_all(),
            (KeyCode::Char('t'), _) => app.tick(1),
            (KeyCode::Char('T'), _) => app.tick(10),

            (KeyCode::Char('g'), _) => prompt_level_gain(terminal, app)?,
            (KeyCode::Char('+'), _) => app.raise_base(1),
            (KeyCode::Char('-'), _) => app.raise_base(-1),
            (KeyCode::Char('p'), _) => app.rebalance(),

            (KeyCode::Char('e'), _) => app.toggle_ego(),
            (KeyCode::Char('u'), _) => app.toggle_mutation(true),
            (KeyCode::Char('n'), _) => app.toggle_mutation(false),
            (KeyCode::Char('w'), _) => app.cycle_form(),
            (KeyCode::Char('f'), _) => app.toggle_duration(DurationKind::Might),
            (KeyCode::Char('o'), _) => app.toggle_duration(DurationKind::Fortitude),
            (KeyCode::Char('b'), _) => app.toggle_duration(DurationKind::Brilliance),
            (KeyCode::Char('a'), _) => app.toggle_duration(DurationKind::Agility),
            (KeyCode::Char('v'), _) => app.toggle_duration(DurationKind::DivineStamina),
            (KeyCode::Char('s'), _) => app.cycle_sustain(),
            (KeyCode::Char('F'), _) => app.cycle_favor(),
            (KeyCode::Char('c'), _) => app.reset(),
            _ => {}
        }
    }

    Ok(())
}

/// Show the prompt, then block on the terminal until it is answered or interrupted
fn prompt_level_gain(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    app.prompting = true;
    terminal.draw(|f| ui::draw(f, app))?;
    app.level_gain(&mut TerminalKeys::default());
    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn setup_logging(log_dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "attr_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::DEBUG.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // The writer must outlive the UI loop
    std::mem::forget(guard);

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}
