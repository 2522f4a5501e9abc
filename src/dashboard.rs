use crate::models::DisplayFrame;
use crate::renderer::drawing;
use crate::utils::format::{format_bytes, format_temperature, format_uptime};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

pub const BOX_X: u16 = 2;
pub const BOX_Y: u16 = 1;
pub const BOX_WIDTH: u16 = 70;
pub const BOX_HEIGHT: u16 = 14;

pub const TITLE: &str = "Mini System Monitor";
const SEPARATOR_WIDTH: usize = 48;
const NOT_AVAILABLE: &str = "Not available";

/// Draws one frame: a box holding the text lines from [`lines`].
pub fn render(out: &mut impl Write, frame: &DisplayFrame) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;

    drawing::draw_box(out, BOX_Y, BOX_X, BOX_HEIGHT, BOX_WIDTH)?;

    let mut row = BOX_Y + 1;
    for line in lines(frame) {
        drawing::text(out, row, BOX_X + 2, &line)?;
        row += 1;
    }

    out.flush()
}

/// The contents of the box, top to bottom.
///
/// Metrics that could not be read are left out, except temperature which is
/// reported as unavailable.
pub fn lines(frame: &DisplayFrame) -> Vec<String> {
    let mut lines = vec![
        TITLE.to_string(),
        "─".repeat(SEPARATOR_WIDTH),
        format!("Host: {}", frame.identity.hostname),
        format!("User: {}", frame.identity.username),
    ];

    match frame.uptime_secs {
        Some(seconds) => lines.push(format!("Uptime: {}", format_uptime(seconds as u64))),
        None => lines.push(format!("Uptime: {NOT_AVAILABLE}")),
    }

    match frame.temperature {
        Some(reading) => lines.push(format!(
            "Temperature: {}",
            format_temperature(reading.celsius)
        )),
        None => lines.push(format!("Temperature: {NOT_AVAILABLE}")),
    }

    if let Some(rates) = frame.network {
        lines.push(format!(
            "Network: ↓ {}/s  ↑ {}/s",
            format_bytes(rates.received_per_sec),
            format_bytes(rates.transmitted_per_sec)
        ));
    }

    lines.push(String::new());

    let bars = [
        ("CPU  ", frame.cpu_percent),
        ("RAM  ", frame.memory_percent),
        ("Disk ", frame.disk_percent),
    ];
    for (label, percent) in bars {
        if let Some(percent) = percent {
            lines.push(drawing::progress_bar_line(label, percent));
        }
    }

    lines
}
