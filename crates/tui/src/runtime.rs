//! Runtime: terminal lifecycle and the unified event loop.
//!
//! - A dedicated task blocks on `crossterm::event::read()` and forwards
//!   events over a channel, so poll/read stay on one thread and resize
//!   delivery is reliable across terminals.
//! - A single `tokio::select!` loop routes input to the `App` and drives
//!   ticks. Ticking is adaptive: a fast interval while a scroll tween is in
//!   flight or an engine timer is pending, a slow one otherwise (the engine
//!   exposes `next_deadline()` precisely so idle frames cost nothing).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use scrollspy_engine::EngineConfig;
use scrollspy_types::Page;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::app::App;
use crate::ui;

const FAST_TICK: Duration = Duration::from_millis(50);
const IDLE_TICK: Duration = Duration::from_millis(1000);

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel. Mouse-move events are dropped at
/// the source; nothing downstream consumes them.
fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::spawn(async move {
        let poll_window = Duration::from_millis(16);
        loop {
            match event::poll(poll_window) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        let is_mouse_move = matches!(
                            &event,
                            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved
                        );
                        if !is_mouse_move && sender.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!("failed to read terminal event: {error}");
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!("failed to poll terminal events: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|frame| ui::draw(frame, app))?;
    Ok(())
}

/// Handle one raw crossterm event. Returns whether a render is needed.
fn handle_input_event(app: &mut App, input_event: Event, now: Instant) -> bool {
    match input_event {
        Event::Key(key_event) => app.handle_key(key_event, now),
        Event::Mouse(mouse_event) => app.handle_mouse(mouse_event, now),
        Event::Resize(width, height) => {
            app.resize(width, height);
            true
        }
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => false,
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// task, runs the event loop, and restores the terminal on the way out.
pub async fn run_app(page: Page, config: EngineConfig) -> Result<()> {
    let mut input_receiver = spawn_input_task();
    let mut app = App::new(page, config);

    let mut terminal = setup_terminal()?;
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    app.resize(width, height);

    let result = event_loop(&mut terminal, &mut app, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut current_interval = IDLE_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app)?;

    loop {
        // Tick fast only while something is actually moving or scheduled.
        let target_interval = if app.needs_fast_tick() { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(input_event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = &input_event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                needs_render = handle_input_event(app, input_event, Instant::now());
            }

            _ = ticker.tick() => {
                needs_render = app.on_tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
        if needs_render {
            render(terminal, app)?;
        }
    }

    Ok(())
}
