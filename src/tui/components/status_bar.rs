// Status bar component
//
// Renders at the bottom: uptime, view shortcuts, analytics count, and
// the most recent warning or error from the log buffer.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: uptime, shortcuts, analytics count, last problem
/// - Narrow: uptime and shortcuts only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let mut spans = vec![Span::raw(format!(
        " {} │ F1-F5 الأقسام │ o اتصال │ w واتساب │ q خروج",
        app.uptime()
    ))];

    if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::raw(format!(" │ 📊 {}", app.data_layer.len())));

        // Most recent warn/error, so problems are visible without a log view
        if let Some(problem) = last_problem(app) {
            spans.push(Span::styled(
                format!(" │ {problem}"),
                Style::default().fg(app.theme.error),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

fn last_problem(app: &App) -> Option<String> {
    app.log_buffer
        .get_all()
        .iter()
        .rev()
        .find(|e| matches!(e.level, LogLevel::Warn | LogLevel::Error))
        .map(|e| format!("{} {}", e.level.as_str(), e.message))
}
