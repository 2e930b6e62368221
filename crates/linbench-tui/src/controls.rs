//! Numeric parameter controls for the run configuration.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use linbench_core::constants::{
    DEFAULT_DIMENSION, DEFAULT_REPETITIONS, MAX_DIMENSION, MAX_REPETITIONS, MIN_DIMENSION,
    MIN_REPETITIONS,
};
use linbench_core::RunConfig;

use crate::styles::ColorTheme;

/// Which control currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlField {
    /// Matrix dimension `n`.
    Dimension,
    /// Repetition count `k`.
    Repetitions,
}

impl ControlField {
    /// The other field (there are exactly two).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Dimension => Self::Repetitions,
            Self::Repetitions => Self::Dimension,
        }
    }
}

/// Editable control state, kept inside the valid ranges at all times.
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    /// Matrix dimension `n`.
    pub dimension: usize,
    /// Repetition count `k`.
    pub repetitions: usize,
    /// Focused field.
    pub selected: ControlField,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            repetitions: DEFAULT_REPETITIONS,
            selected: ControlField::Dimension,
        }
    }
}

impl Controls {
    /// Adjust the focused field by `delta`, clamping at the range bounds.
    pub fn adjust(&mut self, delta: i64) {
        match self.selected {
            ControlField::Dimension => {
                self.dimension = clamp_add(self.dimension, delta, MIN_DIMENSION, MAX_DIMENSION);
            }
            ControlField::Repetitions => {
                self.repetitions =
                    clamp_add(self.repetitions, delta, MIN_REPETITIONS, MAX_REPETITIONS);
            }
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.selected = self.selected.next();
    }

    /// Snapshot an immutable run configuration from the current state.
    #[must_use]
    pub fn to_config(&self) -> RunConfig {
        RunConfig::new(self.dimension, self.repetitions)
    }
}

fn clamp_add(value: usize, delta: i64, min: usize, max: usize) -> usize {
    let value = i64::try_from(value).unwrap_or(i64::MAX);
    let min_i = i64::try_from(min).unwrap_or(i64::MAX);
    let max_i = i64::try_from(max).unwrap_or(i64::MAX);
    let clamped = value.saturating_add(delta).clamp(min_i, max_i);
    usize::try_from(clamped).unwrap_or(min)
}

/// Render the two numeric controls plus the run hint.
pub fn render_controls(frame: &mut Frame, area: Rect, controls: &Controls, running: bool) {
    let theme = ColorTheme::default();
    let field_style = |field: ControlField| {
        if controls.selected == field {
            theme.selected_style()
        } else {
            ratatui::style::Style::default()
        }
    };

    let hint = if running {
        Span::styled("running…", theme.header_style())
    } else {
        Span::styled("Enter: run", theme.border_style())
    };

    let line = Line::from(vec![
        Span::styled(
            format!("n = [{:>4}]", controls.dimension),
            field_style(ControlField::Dimension),
        ),
        Span::raw("   "),
        Span::styled(
            format!("k = [{:>3}]", controls.repetitions),
            field_style(ControlField::Repetitions),
        ),
        Span::raw("   "),
        hint,
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Parameters ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(vec![line]).block(block), area);
}
