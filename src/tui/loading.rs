//! Loading indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Spinner with a "Loading…" caption, centered in its area.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingView {
    frame: usize,
}

impl LoadingView {
    /// `tick` advances the spinner by one frame per call site tick.
    pub fn new(tick: usize) -> Self {
        Self { frame: tick % FRAMES.len() }
    }
}

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(Line::from(format!("{} Loading…", FRAMES[self.frame])))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}
