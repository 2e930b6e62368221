//! Preview panel for the generated system.

use nalgebra::{DMatrix, DVector};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use linbench_core::system::LinearSystem;

use crate::format::format_entry;
use crate::styles::ColorTheme;

/// Rows/columns shown before eliding. Large systems are summarized; the
/// full matrix would be unreadable in a terminal anyway.
const PREVIEW_LIMIT: usize = 6;

/// Format the leading rows and columns of `A` for display.
#[must_use]
pub fn format_matrix_preview(matrix: &DMatrix<f64>) -> Vec<String> {
    let rows = matrix.nrows().min(PREVIEW_LIMIT);
    let cols = matrix.ncols().min(PREVIEW_LIMIT);
    let mut lines = Vec::with_capacity(rows + 1);
    for r in 0..rows {
        let mut cells: Vec<String> = (0..cols).map(|c| format_entry(matrix[(r, c)])).collect();
        if matrix.ncols() > cols {
            cells.push("…".to_string());
        }
        lines.push(cells.join("  "));
    }
    if matrix.nrows() > rows {
        lines.push("…".to_string());
    }
    lines
}

/// Format the leading entries of `b` for display.
#[must_use]
pub fn format_vector_preview(vector: &DVector<f64>) -> String {
    let n = vector.len().min(PREVIEW_LIMIT);
    let mut cells: Vec<String> = (0..n).map(|i| format_entry(vector[i])).collect();
    if vector.len() > n {
        cells.push("…".to_string());
    }
    cells.join("  ")
}

/// Render the system preview panel.
pub fn render_system(frame: &mut Frame, area: Rect, system: Option<&LinearSystem>) {
    let theme = ColorTheme::default();
    let mut text: Vec<Line> = Vec::new();
    if let Some(system) = system {
        let n = system.dimension();
        text.push(Line::raw(format!("A ({n} x {n}):")));
        for row in format_matrix_preview(system.coefficients()) {
            text.push(Line::raw(row));
        }
        text.push(Line::raw(String::new()));
        text.push(Line::raw(format!(
            "b: {}",
            format_vector_preview(system.rhs())
        )));
    } else {
        text.push(Line::raw("No system generated yet."));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" System ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(text).block(block), area);
}
