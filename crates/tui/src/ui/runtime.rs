//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Forward crossterm events from a dedicated blocking input thread.
//! - Route keys and mouse events to the focused component and execute the
//!   returned `Effect`s until none are left.
//! - Redraw only after something was handled.
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{debug, info, warn};
use wordsplit_types::{Effect, Msg};
use wordsplit_util::Document;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

/// Whether the event loop should keep running after processing effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    forward_events(event::read)
}

/// Forwards events produced by `read` until it fails or the receiver drops.
fn forward_events<F>(mut read: F) -> mpsc::Receiver<Event>
where
    F: FnMut() -> std::io::Result<Event> + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        loop {
            match read() {
                Ok(event) => {
                    if let Err(e) = sender.blocking_send(event) {
                        debug!("Input channel closed: {}", e);
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read event: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
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

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        main_view.render(frame, area, app);
    })?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Executes effects, feeding any follow-up effects back in until the queue
/// drains or an effect asks to quit.
pub(crate) fn process_effects(app: &mut App, main_view: &mut MainView, mut effects: Vec<Effect>) -> LoopControl {
    while !effects.is_empty() {
        let mut follow_up = Vec::new();
        for effect in effects.drain(..) {
            if effect.is_navigation() {
                debug!(?effect, "Navigating");
            }
            match effect {
                Effect::ShowModal(modal) => main_view.set_open_modal_kind(app, Some(modal)),
                Effect::CloseModal => main_view.set_open_modal_kind(app, None),
                Effect::SendMsg(msg) => follow_up.extend(main_view.handle_message(app, msg)),
                Effect::Quit => return LoopControl::Exit,
            }
        }
        effects = follow_up;
    }
    LoopControl::Continue
}

async fn event_loop(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    render(terminal, app, main_view)?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                // Input channel closed; shut down cleanly.
                let Some(event) = maybe_event else { break };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
                        break;
                    }
                let effects = handle_input_event(app, main_view, event);
                if process_effects(app, main_view, effects) == LoopControl::Exit {
                    break;
                }
            }
            _ = signal::ctrl_c() => { break; }
        }
        render(terminal, app, main_view)?;
    }
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal even when the loop fails.
pub async fn run_app(document: Document) -> Result<()> {
    info!(document = %document.name, total_words = document.total_words, "Starting TUI");
    let mut app = App::new(document, theme::load_from_env());
    let mut main_view = MainView::new();

    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;

    if let Some(unit_size) = app.applied_unit_size {
        info!(unit_size, units = app.document.unit_count(unit_size), "Exiting with unit splitting enabled");
    }
    outcome
}
