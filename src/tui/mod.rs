// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
//
// Input dispatch is layered: Modal → Form text entry → Global → View.

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod views;

use crate::analytics::CtaKind;
use crate::config::Config;
use crate::content::SiteContent;
use crate::faq::CategoryTab;
use crate::forms::FieldKind;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done (including on error, so the shell is never left in raw mode).
pub fn run(content: SiteContent, config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(content, config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Blocks on `event::poll` with a short timeout so the UI redraws at a
/// steady cadence even without input (toast expiry, uptime).
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(Duration::from_millis(200)).unwrap_or(false) {
            if let Ok(Event::Key(key_event)) = event::read() {
                handle_key_event(app, key_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Activation keys: Enter and Space behave identically wherever a widget
/// can be activated, matching pointer activation.
fn is_activation_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Enter | KeyCode::Char(' '))
}

/// Handle keyboard input
/// Layered dispatch: Modal → Form text entry → Global → View-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Contact form text entry captures printable input so typing
    // "q" into the name field doesn't quit the app
    if handle_contact_entry(app, &key_event) {
        return;
    }

    // Layer 3: Global keys (work regardless of view)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: View-specific keys (routed through InputHandler for
    // debounce and hold-to-repeat)
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            if !app.handle_key_press(key) {
                return;
            }
            handle_view_keys(app, key);
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync.
    // Without this, keys get stuck in "pressed" state after modal closes.
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
        ModalAction::Submitted(form) => {
            app.modal = None;
            app.record_form_submit(form);
        }
    }

    true
}

/// Contact view text entry - returns true if the key went into a field
///
/// Only printable characters and Backspace are absorbed; navigation,
/// Esc and F-keys fall through so the view remains escapable.
fn handle_contact_entry(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.view != View::Contact || key_event.kind != KeyEventKind::Press {
        return false;
    }

    match key_event.code {
        KeyCode::Char(c) => {
            if let Some(field) = app.contact_form.focused_field_mut() {
                field.push_char(c);
                return true;
            }
            false
        }
        KeyCode::Backspace => {
            if let Some(field) = app.contact_form.focused_field_mut() {
                field.backspace();
                return true;
            }
            false
        }
        KeyCode::Enter => {
            // Enter inside a multiline field inserts a newline; on the
            // submit row it submits. Single-line fields advance focus.
            if app.contact_form.is_on_submit() {
                app.submit_contact_form();
            } else if let Some(field) = app.contact_form.focused_field_mut() {
                if field.kind == FieldKind::Multiline {
                    field.push_char('\n');
                } else {
                    app.contact_form.focus_next();
                }
            }
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            app.contact_form.focus_next();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact_form.focus_prev();
            true
        }
        _ => false,
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of current view
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // View switching - F-keys (primary) and letter shortcuts
        KeyCode::F(1) | KeyCode::Char('f') => {
            if app.handle_key_press(key) {
                app.set_view(View::Faq);
            }
            true
        }
        KeyCode::F(2) | KeyCode::Char('p') => {
            if app.handle_key_press(key) {
                app.set_view(View::Pricing);
            }
            true
        }
        KeyCode::F(3) | KeyCode::Char('g') => {
            if app.handle_key_press(key) {
                app.set_view(View::Gallery);
            }
            true
        }
        KeyCode::F(4) | KeyCode::Char('r') => {
            if app.handle_key_press(key) {
                app.set_view(View::Reviews);
            }
            true
        }
        KeyCode::F(5) | KeyCode::Char('c') => {
            if app.handle_key_press(key) {
                app.set_view(View::Contact);
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        // Quote-request modal, pre-filled from the estimator
        KeyCode::Char('b') => {
            if app.handle_key_press(key) {
                let summary = app.estimator.order_summary();
                app.modal = Some(Modal::quote(&summary));
            }
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.cycle_theme();
            }
            true
        }
        // Call-to-action: phone call and WhatsApp
        KeyCode::Char('o') => {
            if app.handle_key_press(key) {
                app.record_cta(CtaKind::Phone);
            }
            true
        }
        KeyCode::Char('w') => {
            if app.handle_key_press(key) {
                app.record_cta(CtaKind::Whatsapp);
            }
            true
        }
        _ => false,
    }
}

/// View-specific key dispatch (called after InputHandler approved the press)
fn handle_view_keys(app: &mut App, key: KeyCode) {
    // Esc jumps back to the landing view from anywhere
    if key == KeyCode::Esc {
        if app.view != View::Faq {
            app.set_view(View::Faq);
        }
        return;
    }

    match app.view {
        View::Faq => match key {
            KeyCode::Down | KeyCode::Char('j') => app.faq.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.faq.select_prev(),
            KeyCode::Right | KeyCode::Tab => app.faq.next_category(),
            KeyCode::Left | KeyCode::BackTab => app.faq.prev_category(),
            KeyCode::Char(c @ '1'..='4') => {
                let i = (c as usize) - ('1' as usize);
                app.faq.select_category(CategoryTab::ORDER[i]);
            }
            key if is_activation_key(key) => app.faq.activate_selected(),
            _ => {}
        },
        View::Pricing => match key {
            KeyCode::Down | KeyCode::Char('j') => app.estimator.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.estimator.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => app.estimator.adjust(1),
            KeyCode::Left | KeyCode::Char('h') => app.estimator.adjust(-1),
            key if is_activation_key(key) => app.activate_estimator_row(),
            _ => {}
        },
        View::Gallery => match key {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right => app.gallery_select_next(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => app.gallery_select_prev(),
            KeyCode::Char('m') => app.gallery_show_more(),
            key if is_activation_key(key) => app.open_lightbox(),
            _ => {}
        },
        View::Reviews => match key {
            KeyCode::Down | KeyCode::Char('j') => app.reviews_scroll += 1,
            KeyCode::Up | KeyCode::Char('k') => {
                app.reviews_scroll = app.reviews_scroll.saturating_sub(1)
            }
            _ => {}
        },
        // Contact is fully handled by the text-entry layer
        View::Contact => {}
    }
}
