//! Rendering of payloads that carry their own content.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget, Wrap},
};
use serde_json::Value;

/// Displays a `(content, content_type)` pair.
///
/// The inspector passes both values through without examining them.
pub trait ContentRenderer {
    fn render(&self, content: &Value, content_type: Option<&Value>, area: Rect, buf: &mut Buffer);
}

/// Text for strings, pretty-printed JSON for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainContentRenderer;

impl PlainContentRenderer {
    /// Text shown for a content value.
    pub fn body(content: &Value, content_type: Option<&str>) -> String {
        match (content, content_type) {
            (Value::String(s), Some("application/json")) => match serde_json::from_str::<Value>(s) {
                Ok(parsed) => pretty(&parsed),
                Err(_) => s.clone(),
            },
            (Value::String(s), _) => s.clone(),
            (other, _) => pretty(other),
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl ContentRenderer for PlainContentRenderer {
    fn render(&self, content: &Value, content_type: Option<&Value>, area: Rect, buf: &mut Buffer) {
        let content_type = content_type.and_then(Value::as_str);
        let [caption, body] = Layout::vertical([
            Constraint::Length(u16::from(content_type.is_some())),
            Constraint::Min(0),
        ])
        .areas(area);

        if let Some(ct) = content_type {
            Line::styled(ct.to_string(), Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .render(caption, buf);
        }

        Paragraph::new(Text::from(Self::body(content, content_type)))
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }
}
