//! Scrollable log panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Scroll state for the log panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// First visible line index.
    pub offset: usize,
    /// Whether new messages keep the view pinned to the bottom.
    pub auto_scroll: bool,
}

impl LogScrollState {
    /// Create a new scroll state pinned to the bottom.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Handle a new log message.
    pub fn on_new_message(&mut self, total_logs: usize) {
        if self.auto_scroll {
            self.offset = total_logs.saturating_sub(1);
        }
    }

    /// Scroll up one line, unpinning from the bottom.
    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down one line; reaching the bottom re-pins.
    pub fn scroll_down(&mut self, total_logs: usize) {
        self.offset = (self.offset + 1).min(total_logs.saturating_sub(1));
        if self.offset >= total_logs.saturating_sub(1) {
            self.auto_scroll = true;
        }
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the scrollable log panel.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Logs ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    #[test]
    fn initial_state_is_pinned() {
        let state = LogScrollState::new();
        assert_eq!(state.offset, 0);
        assert!(state.auto_scroll);
    }

    #[test]
    fn new_message_follows_bottom() {
        let mut state = LogScrollState::new();
        state.on_new_message(10);
        assert_eq!(state.offset, 9);
    }

    #[test]
    fn new_message_does_not_move_unpinned_view() {
        let mut state = LogScrollState::new();
        state.offset = 3;
        state.auto_scroll = false;
        state.on_new_message(10);
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn scroll_up_unpins() {
        let mut state = LogScrollState::new();
        state.offset = 5;
        state.scroll_up();
        assert_eq!(state.offset, 4);
        assert!(!state.auto_scroll);
    }

    #[test]
    fn scroll_up_at_top_stays() {
        let mut state = LogScrollState::new();
        state.scroll_up();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn scroll_down_to_bottom_repins() {
        let mut state = LogScrollState::new();
        state.auto_scroll = false;
        state.offset = 8;
        state.scroll_down(10);
        assert_eq!(state.offset, 9);
        assert!(state.auto_scroll);
    }

    #[test]
    fn render_logs_smoke() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let logs: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        terminal
            .draw(|frame| render_logs(frame, frame.area(), &logs, 5))
            .unwrap();
    }

    #[test]
    fn render_logs_empty() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_logs(frame, frame.area(), &[], 0))
            .unwrap();
    }

    #[test]
    fn render_logs_error_lines() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let logs = vec!["[ERROR] pool failed".to_string(), "normal".to_string()];
        terminal
            .draw(|frame| render_logs(frame, frame.area(), &logs, 0))
            .unwrap();
    }
}
