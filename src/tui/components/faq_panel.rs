// FAQ panel renderer
//
// Draws the category tab bar and the accordion list, keeps the selected
// header inside the viewport, and reports which disclosure widgets are
// on screen so the reveal tracker can play their entrance exactly once
// per render cycle. Entries render muted until their reveal fires, which
// happens one frame after they first scroll into view.

use crate::faq::CategoryTab;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_tabs(f, chunks[0], app);
    render_list(f, chunks[1], app);
}

/// Tab bar: one span per category, the active one emphasized
fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in CategoryTab::ORDER.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, tab.label());
        let style = if *tab == app.faq.tab() {
            Style::default()
                .fg(app.theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(app.theme.muted)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(f: &mut Frame, area: Rect, app: &mut App) {
    let viewport_height = area.height.saturating_sub(2) as usize;
    let wrap_width = area.width.saturating_sub(6) as usize;

    // Build all rows up front; headers[i] is the row of entry i's header
    let mut lines: Vec<Line> = Vec::new();
    let mut headers: Vec<usize> = Vec::new();

    for i in 0..app.faq.visible_len() {
        let Some(entry) = app.faq.visible_entry(i) else {
            break;
        };
        let is_open = app.faq.is_open(i);
        let is_selected = app.faq.selected() == i;
        let revealed = app.faq.reveal().is_revealed(i);

        headers.push(lines.len());
        lines.push(header_line(
            &entry.question,
            is_open,
            is_selected,
            revealed,
            &app.theme,
        ));

        if is_open {
            for part in wrap(&entry.answer, wrap_width) {
                lines.push(Line::from(Span::styled(
                    format!("    {part}"),
                    Style::default().fg(app.theme.foreground),
                )));
            }
            lines.push(Line::raw(""));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  لا توجد أسئلة في هذا التصنيف",
            Style::default().fg(app.theme.muted),
        )));
    }

    // Keep the selected header inside the viewport
    if viewport_height > 0 {
        if let Some(&row) = headers.get(app.faq.selected()) {
            if row < app.faq.scroll_offset {
                app.faq.scroll_offset = row;
            } else if row >= app.faq.scroll_offset + viewport_height {
                app.faq.scroll_offset = row + 1 - viewport_height;
            }
        }
        let max_offset = lines.len().saturating_sub(viewport_height);
        app.faq.scroll_offset = app.faq.scroll_offset.min(max_offset);
    }

    // Entries whose header row is inside the viewport have entered it
    let window = app.faq.scroll_offset..app.faq.scroll_offset + viewport_height;
    let first = headers.iter().position(|r| window.contains(r));
    let last = headers.iter().rposition(|r| window.contains(r));
    if let (Some(first), Some(last)) = (first, last) {
        app.faq.notify_in_view(first..last + 1);
    }

    let list = Paragraph::new(Text::from(lines))
        .scroll((app.faq.scroll_offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border))
                .title(format!(" {} ", app.view.name()))
                .title_bottom(Line::from(" Tab تصنيف │ Enter فتح/إغلاق ").right_aligned()),
        );

    f.render_widget(list, area);
}

fn header_line<'a>(
    question: &str,
    is_open: bool,
    is_selected: bool,
    revealed: bool,
    theme: &Theme,
) -> Line<'a> {
    let marker = if is_open { "▾" } else { "▸" };
    let mut style = if revealed {
        Style::default().fg(theme.foreground)
    } else {
        Style::default().fg(theme.muted)
    };
    if is_selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if is_open {
        style = style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(format!("  {marker} "), Style::default().fg(theme.reveal)),
        Span::styled(question.to_string(), style),
    ])
}

/// Greedy word wrap by display width (the content is Arabic, so byte
/// lengths are useless here)
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else if line.width() + 1 + word.width() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                out.push(std::mem::take(&mut line));
                line = word.to_string();
            }
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, ["one two", "three", "four"]);
    }

    #[test]
    fn wrap_keeps_explicit_newlines() {
        let lines = wrap("a\nb", 80);
        assert_eq!(lines, ["a", "b"]);
    }
}
