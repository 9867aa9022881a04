// Gallery renderer
//
// Shows the currently revealed slice of the gallery, one or two columns
// depending on width, with a "show more" hint while items remain.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let columns = if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        2
    } else {
        1
    };
    let cell_width = (area.width.saturating_sub(4) as usize) / columns;

    let mut lines: Vec<Line> = vec![Line::raw("")];
    let shown = &app.gallery_items[..app.gallery_shown];

    for (row, chunk) in shown.chunks(columns).enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (col, item) in chunk.iter().enumerate() {
            let i = row * columns + col;
            let style = if i == app.gallery_selected {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme.foreground)
            };
            spans.push(Span::styled(
                format!(
                    " 🖼 {:<width$}",
                    item.caption,
                    width = cell_width.saturating_sub(4)
                ),
                style,
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    if app.gallery_has_more() {
        lines.push(Line::from(Span::styled(
            format!(
                "  m: عرض المزيد ({} من {})",
                app.gallery_shown,
                app.gallery_items.len()
            ),
            Style::default().fg(theme.accent),
        )));
    }

    let panel = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", app.view.name()))
            .title_bottom(Line::from(" ↑↓ تنقل │ Enter عرض ").right_aligned()),
    );

    f.render_widget(panel, area);
}
