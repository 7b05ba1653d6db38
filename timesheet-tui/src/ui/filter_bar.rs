use super::widgets::input_spans;
use super::*;
use timesheet_core::format_date;

pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled("Date: ", label)];
    if app.current_view == View::EditDateFilter {
        spans.extend(input_spans(
            &app.date_filter_input,
            Style::default().fg(Color::Yellow),
        ));
    } else {
        let date = app.filter.date.map_or_else(|| "any".to_string(), format_date);
        spans.push(Span::styled(date, value));
    }
    spans.push(Span::styled("   Category: ", label));
    spans.push(Span::styled(app.filter.category.to_string(), value));

    let shown = app.visible_entries().len();
    spans.push(Span::styled(
        format!("   {} of {} shown", shown, app.sheet.len()),
        label,
    ));
    let unsaved = app.sheet.dirty_count();
    if unsaved > 0 {
        spans.push(Span::styled(
            format!("   {} unsaved", unsaved),
            Style::default().fg(Color::Yellow),
        ));
    }

    let title = format!(" Timesheet · {} ", format_date(app.today));
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
