// Contact form renderer
//
// Fields with labels and live values, invalid fields flagged in the
// error color, and the submit control as the last focus stop.

use crate::forms::{ContactForm, FieldKind};
use crate::theme::Theme;
use crate::tui::app::{App, CONTACT_PHONE};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let lines = form_lines(&app.contact_form, &app.theme);

    let panel = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(format!(" {} ", app.view.name()))
            .title_bottom(Line::from(" Tab تنقل │ Enter إرسال ").right_aligned()),
    );

    f.render_widget(panel, area);
}

/// Shared between the contact view and the quote modal
pub fn form_lines<'a>(form: &ContactForm, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = vec![Line::raw("")];

    for (i, field) in form.fields.iter().enumerate() {
        let focused = form.focus() == i;

        let label_style = if field.invalid {
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };

        let mut label = format!("  {}", field.label);
        if field.required {
            label.push_str(" *");
        }
        lines.push(Line::from(Span::styled(label, label_style)));

        // Value rows; the focused field gets a block cursor
        let value_style = Style::default().fg(theme.foreground);
        let mut rows: Vec<String> = field.value.split('\n').map(String::from).collect();
        if let Some(last) = rows.last_mut() {
            if focused {
                last.push('▌');
            }
        }
        for row in rows {
            lines.push(Line::from(Span::styled(format!("    {row}"), value_style)));
        }
        if field.kind == FieldKind::Phone && field.invalid {
            lines.push(Line::from(Span::styled(
                "    رقم جوال سعودي: 05XXXXXXXX أو 9665XXXXXXXX+",
                Style::default().fg(theme.error),
            )));
        }
        lines.push(Line::raw(""));
    }

    let submit_style = if form.is_on_submit() {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" إرسال ", submit_style),
    ]));

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("  أو مباشرة: o اتصال │ w واتساب │ {CONTACT_PHONE}"),
        Style::default().fg(theme.muted),
    )));

    lines
}
