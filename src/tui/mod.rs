//! # TUI Adapter
//!
//! The ratatui-specific Display Surface. Handles terminal I/O, renders the
//! list, collects titles through a modal dialog, and translates keyboard and
//! mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms per poll and redraws only
//! when an event arrived or the store reported a change through its
//! listener.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ──► dialog open? ──yes──► TitleDialog ──Submit──► Action::Add / Edit
//!                  │
//!                  no
//!                  ▼
//!            TodoListState ──► Add/Edit opens dialog, Toggle/Delete/Quit ──► Action
//! ```

mod component;
pub mod components;
mod event;
mod ui;

use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::DefaultTerminal;
use ratatui::style::Style;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{BlankTitles, ResolvedConfig};
use crate::core::state::App;
use crate::core::store::Change;
use crate::tui::component::EventHandler;
use crate::tui::components::todo_list::resolve_done_style;
use crate::tui::components::{DialogEvent, DialogKind, ListEvent, TitleDialog, TodoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub list: TodoListState,
    /// Add/edit prompt (None = hidden)
    pub dialog: Option<TitleDialog>,
    /// Completed-row style, resolved once from config
    pub done_style: Style,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            list: TodoListState::new(app.store.len()),
            dialog: None,
            done_style: resolve_done_style(&app.done_style),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Harmlessly ignored by terminals without the Kitty keyboard protocol
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);
    info!(
        "Starting with {} items (seed={:?}, blank_titles={:?})",
        app.store.len(),
        config.seed,
        config.blank_titles
    );

    // The store's change notification marks the screen stale
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    app.store.subscribe(move |change: &Change| {
        debug!("Store changed: {:?}", change);
        flag.set(true);
    });

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &dirty);

    drop(guard);
    ratatui::restore();
    info!(
        "Exiting with {} items ({} done)",
        app.store.len(),
        app.store.done_count()
    );
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    dirty: &Cell<bool>,
) -> std::io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw || dirty.replace(false) {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.list.len = app.store.len();
            if handle_event(app, tui, event) {
                return Ok(());
            }
        }
    }
}

/// Route one event. Returns `true` when the app should quit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit),
        TuiEvent::Resize => return false,
        _ => {}
    }

    // Open dialog captures all input
    if let Some(dialog) = tui.dialog.as_mut() {
        match dialog.handle_event(&event) {
            Some(DialogEvent::Submit(text)) => {
                let kind = dialog.kind;
                tui.dialog = None;
                if let Some(action) = title_action(app.blank_titles, kind, text) {
                    return dispatch(app, tui, action);
                }
            }
            Some(DialogEvent::Cancel) => tui.dialog = None,
            Some(DialogEvent::ContentChanged) | None => {}
        }
        return false;
    }

    match tui.list.handle_event(&event) {
        Some(ListEvent::Add) => {
            tui.dialog = Some(TitleDialog::add());
            false
        }
        Some(ListEvent::Edit(index)) => {
            tui.dialog = app
                .store
                .get(index)
                .map(|item| TitleDialog::edit(index, &item.title));
            false
        }
        Some(ListEvent::Toggle(index)) => dispatch(app, tui, Action::ToggleDone(index)),
        Some(ListEvent::Delete(index)) => dispatch(app, tui, Action::Delete(index)),
        Some(ListEvent::Quit) => dispatch(app, tui, Action::Quit),
        None => false,
    }
}

/// Turn a dialog submission into an action, dropping blank titles when
/// configured to ignore them.
fn title_action(policy: BlankTitles, kind: DialogKind, title: String) -> Option<Action> {
    if policy == BlankTitles::Ignore && title.trim().is_empty() {
        info!("Ignoring blank title for {:?}", kind);
        return None;
    }
    Some(match kind {
        DialogKind::Add => Action::Add(title),
        DialogKind::Edit(index) => Action::Edit { index, title },
    })
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Ok(Effect::Quit) => true,
        Ok(effect) => {
            tui.list.apply_effect(effect, app.store.len());
            false
        }
        // Already on the status line via app.error
        Err(_) => false,
    }
}
