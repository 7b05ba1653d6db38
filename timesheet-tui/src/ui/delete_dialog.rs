use super::utils::centered_rect;
use super::*;
use timesheet_core::{format_date, format_time};

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App) {
    let Some(entry) = app.delete_target.as_ref().and_then(|id| app.sheet.get(id)) else {
        return;
    };
    let label = if entry.description.is_empty() {
        entry.category.to_string()
    } else {
        format!("{} · {}", entry.category, entry.description)
    };
    let detail = format!(
        "{}  ·  {}-{}",
        format_date(entry.date),
        format_time(entry.start),
        format_time(entry.end)
    );

    let area = centered_rect(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(label, Style::default().fg(Color::White))),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Delete Entry? ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
