// Customer reviews renderer
//
// One block per testimonial: star rating, the quote, and attribution.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Star glyphs for a 1-5 rating
fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = vec![Line::raw("")];

    for t in &app.testimonials {
        lines.push(Line::from(Span::styled(
            format!("  {}", stars(t.rating)),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(Span::styled(
            format!("  \u{201c}{}\u{201d}", t.text),
            Style::default().fg(theme.foreground),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  — {}", t.name),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("، {}", t.location), Style::default().fg(theme.muted)),
        ]));
        lines.push(Line::raw(""));
    }

    if app.testimonials.is_empty() {
        lines.push(Line::from(Span::styled(
            "  لا توجد آراء بعد",
            Style::default().fg(theme.muted),
        )));
    }

    let viewport_height = area.height.saturating_sub(2) as usize;
    let max_offset = lines.len().saturating_sub(viewport_height);
    app.reviews_scroll = app.reviews_scroll.min(max_offset);

    let panel = Paragraph::new(Text::from(lines))
        .scroll((app.reviews_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border))
                .title(format!(" {} ", app.view.name()))
                .title_bottom(Line::from(" ↑↓ تمرير ").right_aligned()),
        );

    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rendering() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        // Out-of-range ratings are clamped, not panicked on
        assert_eq!(stars(9), "★★★★★");
    }
}
