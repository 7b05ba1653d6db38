use super::*;

/// Spans for a text input with the cursor drawn as a reversed cell.
pub fn input_spans(input: &TextInput, style: Style) -> Vec<Span<'static>> {
    let (before, after) = input.split_at_cursor();
    let mut rest = after.chars();
    let cursor = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    vec![
        Span::styled(before.to_string(), style),
        Span::styled(cursor, style.add_modifier(Modifier::REVERSED)),
        Span::styled(rest.as_str().to_string(), style),
    ]
}

pub fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => Color::Green,
        StatusKind::Warning => Color::Yellow,
        StatusKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        format!(" {}", status.text),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.current_view {
        View::Table => &[
            ("a", "add"),
            ("enter", "edit"),
            ("d", "delete"),
            ("f", "date"),
            ("c", "category"),
            ("t", "today"),
            ("x", "clear filters"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        View::EditEntry => &[
            ("tab", "next field"),
            ("shift+tab", "previous"),
            ("enter", "save"),
            ("ctrl+x", "clear field"),
            ("esc", "cancel"),
        ],
        View::EditDateFilter => &[("enter", "apply, empty for any date"), ("esc", "cancel")],
        View::ConfirmDelete => &[("y", "delete"), ("n", "keep")],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
