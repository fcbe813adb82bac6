//! Screen layout for the interactive viewer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use super::app::InspectorApp;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut InspectorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_body(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &InspectorApp) {
    let fields = app.payload.as_ref().map_or(0, |p| p.len());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(app.source.clone(), Style::default().fg(Color::White)),
        Span::raw(format!("  {} fields", fields)),
        Span::styled(
            if app.loading { "  [loading]" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(Block::default()
        .title(" Payload ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(header, area);
}

/// The inspector trigger sits at the top of the body; the dialog overlays it.
fn draw_body(frame: &mut Frame, area: Rect, app: &mut InspectorApp) {
    let inner = Rect { x: area.x + 1, width: area.width.saturating_sub(2), ..area };
    if !app.render(inner, frame.buffer_mut()) {
        let empty = Paragraph::new("No debug payload.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &InspectorApp) {
    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}
