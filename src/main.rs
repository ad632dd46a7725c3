//! folio: a terminal portfolio presenter.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{app_state, config, content, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio presenter", long_about = None)]
struct Args {
    /// Portfolio content as JSON (defaults to the built-in sample)
    #[arg(value_name = "PORTFOLIO")]
    portfolio: Option<PathBuf>,

    /// Maximum text wrap width
    #[arg(long)]
    wrap: Option<usize>,

    /// Write logs to this file (level via RUST_LOG, default warn)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(wrap) = args.wrap {
        cfg.wrap_width = wrap;
    }

    let _log_guard = init_logging(args.log_file.as_deref())?;

    let portfolio = match &args.portfolio {
        Some(path) => content::Portfolio::load(path)?,
        None => content::Portfolio::sample(),
    };

    let registry = content::registry();
    let state = app_state::AppState::new(portfolio, registry, cfg.probe_offset, cfg.wrap_width);
    tracing::info!(sections = state.registry.len(), "starting folio");

    run_tui(state, &cfg)
}

/// Logs go to a file because stderr belongs to the terminal UI.
fn init_logging(
    path: Option<&Path>,
) -> io::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let file = std::fs::File::create(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(Some(guard))
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    let tick = Duration::from_millis(cfg.tick_rate_ms);

    loop {
        let size = terminal.size()?;
        app.resize(usize::from(size.width), usize::from(size.height));
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll with the tick timeout so glides keep advancing while idle.
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                    KeyCode::PageUp => app.page_up(),
                    KeyCode::PageDown => app.page_down(),
                    KeyCode::Home => app.home(),
                    KeyCode::End => app.end(),
                    KeyCode::Left | KeyCode::Char('h') => app.select_prev_nav(),
                    KeyCode::Right | KeyCode::Char('l') => app.select_next_nav(),
                    KeyCode::Enter => app.activate_selected(),
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = usize::from(u8::try_from(c).unwrap_or(b'1') - b'1');
                        app.activate_index(index);
                    }
                    _ => {}
                },
                Event::Resize(width, height) => {
                    app.resize(usize::from(width), usize::from(height));
                }
                _ => {}
            }
        } else {
            app.on_tick();
        }
    }
}
