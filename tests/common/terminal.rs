//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the app into an in-memory buffer and turns the output into
//! strings that assertions can search.

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use slotbook::App;

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of `app` at 80x24 and return the buffer
pub fn render_app(app: &App) -> Buffer {
    render_app_sized(app, 80, 24)
}

pub fn render_app_sized(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    terminal.backend().buffer().clone()
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    buffer_region_to_string(buffer, buffer.area)
}

/// Extract a specific region of the buffer as a string
pub fn buffer_region_to_string(buffer: &Buffer, area: Rect) -> String {
    let mut lines = Vec::new();

    for y in area.y..area.y.saturating_add(area.height) {
        let mut line = String::new();
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Check if the buffer contains a string anywhere on one row
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// Count occurrences of `text` across all rows
pub fn count_occurrences(buffer: &Buffer, text: &str) -> usize {
    buffer_to_string(buffer).matches(text).count()
}

/// The text of row `y`
pub fn row(buffer: &Buffer, y: u16) -> String {
    buffer_region_to_string(buffer, Rect::new(0, y, buffer.area.width, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_create_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_region_and_rows() {
        let mut terminal = create_test_terminal_sized(20, 5);
        terminal
            .draw(|f| {
                let para = Paragraph::new("Line 1\nLine 2\nLine 3");
                f.render_widget(para, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        let region = buffer_region_to_string(buffer, Rect::new(0, 0, 6, 2));
        assert_eq!(region, "Line 1\nLine 2");
        assert!(row(buffer, 2).starts_with("Line 3"));
        assert_eq!(count_occurrences(buffer, "Line"), 3);
        assert!(!buffer_contains(buffer, "missing"));
    }
}
