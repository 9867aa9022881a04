// Modal overlay rendering
//
// Modals are rendered centered on top of the main content:
// - Help: keyboard shortcuts
// - Lightbox: full view of one gallery item
// - Quote: the quote-request form

use crate::tui::app::App;
use crate::tui::components::form_lines;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Lightbox(index) => render_lightbox(f, app, *index),
        Modal::Quote(form) => {
            let lines = form_lines(form, &app.theme);
            render_quote(f, app, lines);
        }
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block<'a>(app: &App, title: &'a str, bottom: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .border_type(app.theme.border_type)
        .title(title)
        .title_bottom(Line::from(bottom).centered())
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  الأقسام", header_style)),
        kb("F1, f", "الأسئلة الشائعة"),
        kb("F2, p", "حاسبة التكلفة"),
        kb("F3, g", "أعمالنا"),
        kb("F4, r", "آراء العملاء"),
        kb("F5, c", "تواصل معنا"),
        Line::raw(""),
        Line::from(Span::styled("  التنقل", header_style)),
        kb("↑/↓, j/k", "تحريك المؤشر"),
        kb("Enter, Space", "فتح / تفعيل"),
        kb("Tab, 1-4", "تبديل التصنيف"),
        kb("Esc", "رجوع / إغلاق"),
        Line::raw(""),
        Line::from(Span::styled("  تواصل", header_style)),
        kb("o", "اتصال هاتفي"),
        kb("w", "واتساب"),
        kb("b", "طلب عرض سعر"),
        Line::raw(""),
        Line::from(Span::styled("  عام", header_style)),
        kb("t", "تغيير المظهر"),
        kb("?", "هذه الشاشة"),
        kb("q", "خروج"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  المظهر: ", desc_style),
            Span::styled(app.theme.name.clone(), key_style),
        ]),
    ]);

    let area = centered_rect(46, 28, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(modal_block(app, " مساعدة ", " ? أو Esc للإغلاق "));

    f.render_widget(paragraph, area);
}

/// Render the lightbox: the gallery item's caption as title, its
/// detail text as the body.
fn render_lightbox(f: &mut Frame, app: &App, index: usize) {
    // Item may be gone if content degraded; render nothing
    let Some(item) = app.gallery_items.get(index) else {
        return;
    };

    let area = centered_rect(
        f.area().width.saturating_sub(10).max(30),
        f.area().height.saturating_sub(6).max(8),
        f.area(),
    );
    f.render_widget(Clear, area);

    let title = format!(" 🖼 {} ", item.caption);
    let body = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", item.detail),
            Style::default().fg(app.theme.foreground),
        )),
    ]);

    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(app.theme.background))
        .block(modal_block(app, &title, " Esc للإغلاق "));

    f.render_widget(paragraph, area);
}

/// Render the quote-request form modal
fn render_quote(f: &mut Frame, app: &App, lines: Vec<Line<'static>>) {
    let height = (lines.len() as u16 + 2).min(f.area().height.saturating_sub(2));
    let area = centered_rect(54, height, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(app.theme.background))
        .block(modal_block(app, " طلب عرض سعر ", " Tab تنقل │ Esc إلغاء "));

    f.render_widget(paragraph, area);
}
