use crate::utils::format::format_percentage;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::iter::repeat;

/// Cells in a progress bar, excluding its borders.
pub const BAR_WIDTH: usize = 35;

const FILLED: char = '█';
const EMPTY: char = ' ';

pub fn text(out: &mut impl Write, y: u16, x: u16, content: &str) -> io::Result<()> {
    out.queue(MoveTo(x, y))?.queue(Print(content))?;
    Ok(())
}

pub fn draw_box(out: &mut impl Write, y: u16, x: u16, height: u16, width: u16) -> io::Result<()> {
    for (row, line) in box_lines(height, width).iter().enumerate() {
        text(out, y + row as u16, x, line)?;
    }
    Ok(())
}

/// Rows of a `height` x `width` box drawn with light box-drawing characters.
pub fn box_lines(height: u16, width: u16) -> Vec<String> {
    if height < 2 || width < 2 {
        return Vec::new();
    }
    let inner = (width - 2) as usize;
    let edge = "─".repeat(inner);
    let middle = format!("│{}│", " ".repeat(inner));

    let mut lines = Vec::with_capacity(height as usize);
    lines.push(format!("┌{edge}┐"));
    for _ in 1..height - 1 {
        lines.push(middle.clone());
    }
    lines.push(format!("└{edge}┘"));
    lines
}

/// `"<label> │█████     │  42.00%"`. Out-of-range values are clamped first.
pub fn progress_bar_line(label: &str, percentage: f64) -> String {
    let percentage = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = (percentage / 100.0 * BAR_WIDTH as f64) as usize;

    let bar = repeat(FILLED)
        .take(filled)
        .chain(repeat(EMPTY))
        .take(BAR_WIDTH)
        .collect::<String>();

    format!("{label} │{bar}│ {}", format_percentage(percentage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str) -> (usize, usize) {
        let bar = line.split('│').nth(1).unwrap();
        let filled = bar.chars().filter(|c| *c == FILLED).count();
        (filled, bar.chars().count())
    }

    #[test]
    fn test_progress_bar_empty() {
        let line = progress_bar_line("CPU  ", 0.0);
        assert_eq!(cells(&line), (0, BAR_WIDTH));
        assert!(line.starts_with("CPU   │"));
        assert!(line.ends_with("│   0.00%"));
    }

    #[test]
    fn test_progress_bar_full() {
        let line = progress_bar_line("RAM  ", 100.0);
        assert_eq!(cells(&line), (BAR_WIDTH, BAR_WIDTH));
        assert!(line.ends_with("│ 100.00%"));
    }

    #[test]
    fn test_progress_bar_rounds_down() {
        // 50% of 35 cells is 17.5.
        let line = progress_bar_line("Disk ", 50.0);
        assert_eq!(cells(&line), (17, BAR_WIDTH));
        assert!(line.ends_with("│  50.00%"));
    }

    #[test]
    fn test_progress_bar_clamps() {
        assert_eq!(progress_bar_line("CPU  ", 250.0), progress_bar_line("CPU  ", 100.0));
        assert_eq!(progress_bar_line("CPU  ", -3.0), progress_bar_line("CPU  ", 0.0));
        assert_eq!(progress_bar_line("CPU  ", f64::NAN), progress_bar_line("CPU  ", 0.0));
    }

    #[test]
    fn test_box_lines() {
        let lines = box_lines(3, 4);
        assert_eq!(lines, vec!["┌──┐", "│  │", "└──┘"]);
    }

    #[test]
    fn test_degenerate_box() {
        assert!(box_lines(1, 10).is_empty());
    }

    #[test]
    fn test_text_moves_cursor() {
        let mut out = Vec::new();
        text(&mut out, 4, 7, "Host: box").unwrap();
        let written = String::from_utf8(out).unwrap();
        // crossterm positions are 1-based on the wire.
        assert_eq!(written, "\x1b[5;8HHost: box");
    }
}
