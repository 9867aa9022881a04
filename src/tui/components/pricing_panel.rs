// Pricing estimator renderer
//
// One row per input plus the order button, with the running total
// recomputed from the estimator state on every frame.

use crate::pricing::EstimatorRow;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let est = &app.estimator;
    let theme = &app.theme;

    let row_style = |row: usize| {
        if est.cursor() == row {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        }
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  عدد الغرف     ◂ {} ▸", est.rooms),
            row_style(0),
        )),
        Line::from(Span::styled(
            format!("  المسافة       ◂ {} كم ▸", est.distance_km),
            row_style(1),
        )),
        Line::raw(""),
    ];

    for (i, addon) in est.addons().iter().enumerate() {
        let checked = est.is_checked(i);
        let mark = if checked { "☑" } else { "☐" };
        let style = if est.cursor() == 2 + i {
            row_style(2 + i)
        } else if checked {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.foreground)
        };
        lines.push(Line::from(Span::styled(
            format!("  {mark} {} (+{} ريال)", addon.name, addon.cost),
            style,
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  التكلفة التقديرية: ", Style::default().fg(theme.muted)),
        Span::styled(
            format!("{} ريال", est.total()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::raw(""));

    let order_row = est.row_count() - 1;
    let order_style = if matches!(est.cursor_row(), EstimatorRow::Order) {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    debug_assert!(matches!(est.row_at(order_row), EstimatorRow::Order));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" اطلب الخدمة الآن ", order_style),
    ]));

    let panel = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", app.view.name()))
            .title_bottom(Line::from(" ↑↓ تنقل │ ←→ تعديل │ Enter تأكيد ").right_aligned()),
    );

    f.render_widget(panel, area);
}
