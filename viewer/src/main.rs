mod app;
mod fetch;
mod theme;
mod ui;

use std::io::{stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::App;

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let endpoint_url = std::env::var("TODO_API_URL")
        .context("TODO_API_URL is not set; point it at the todo endpoint")?;

    let mut session = TerminalSession::new()?;
    let mut app = App::new(endpoint_url);

    run_app(&mut session.terminal, &mut app).await
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        // Yield so spawned fetch tasks make progress; crossterm's
        // event::poll is blocking and doesn't yield to the runtime.
        tokio::task::yield_now().await;

        app.process_fetch_events();

        terminal.draw(|frame| ui::draw(frame, app.viewer(), app.spinner_tick()))?;

        if handle_events(app)? {
            return Ok(());
        }
    }
}

fn handle_events(app: &mut App) -> Result<bool> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind};

    if !event::poll(std::time::Duration::from_millis(50))? {
        return Ok(false);
    }
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('r') => app.refresh(),
            _ => {}
        }
    }
    Ok(false)
}
