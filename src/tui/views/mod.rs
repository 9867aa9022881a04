// Views module - screen-level rendering logic
//
// The shell is fixed: title bar on top, status bar at the bottom, and
// the active section's panel filling the space between. Modals and
// toasts render on top of everything.

mod modal;

use super::app::{App, View};
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background)
    if app.use_theme_background {
        let bg_block = Block::default().style(Style::default().bg(app.theme.background));
        f.render_widget(bg_block, f.area());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Min(5),    // content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    match app.view {
        View::Faq => components::render_faq(f, chunks[1], app),
        View::Pricing => components::render_pricing(f, chunks[1], app),
        View::Gallery => components::render_gallery(f, chunks[1], app),
        View::Reviews => components::render_reviews(f, chunks[1], app),
        View::Contact => components::render_contact(f, chunks[1], app),
    }

    components::render_status(f, chunks[2], app);

    // Render modal overlay (on top of everything)
    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}
