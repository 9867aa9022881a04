// Title bar component
//
// Renders the company name and the active section. When the active view
// is scrolled away from the top the bar gains emphasis, so it reads as
// pinned above the moving content.

use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Whether the active view has scrolled past its top
fn is_scrolled(app: &App) -> bool {
    match app.view {
        View::Faq => app.faq.scroll_offset > 0,
        View::Reviews => app.reviews_scroll > 0,
        _ => false,
    }
}

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = format!(" 🚚 إكسو موف │ {}", app.view.name());

    let mut style = Style::default().fg(app.theme.title);
    let mut border_style = Style::default().fg(app.theme.border);
    if is_scrolled(app) {
        style = style.add_modifier(Modifier::BOLD);
        border_style = Style::default().fg(app.theme.title);
    }

    let title = Paragraph::new(title_text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(border_style)
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
