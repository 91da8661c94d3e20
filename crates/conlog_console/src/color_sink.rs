//! Translation of packed color attributes into terminal commands.

use std::io::{self, Write};

use conlog_category::ColorAttributes;
use crossterm::style::{Color, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

/// Maps a 4-bit attribute nibble (blue, green, red, intensity) to a terminal color.
pub fn console_color(nibble: u8) -> Color {
    match nibble & 0xF {
        0x0 => Color::Black,
        0x1 => Color::DarkBlue,
        0x2 => Color::DarkGreen,
        0x3 => Color::DarkCyan,
        0x4 => Color::DarkRed,
        0x5 => Color::DarkMagenta,
        0x6 => Color::DarkYellow,
        0x7 => Color::Grey,
        0x8 => Color::DarkGrey,
        0x9 => Color::Blue,
        0xA => Color::Green,
        0xB => Color::Cyan,
        0xC => Color::Red,
        0xD => Color::Magenta,
        0xE => Color::Yellow,
        _ => Color::White,
    }
}

/// Queues foreground and background commands for `attrs` on `out`.
pub fn apply_attributes<W: Write + ?Sized>(out: &mut W, attrs: ColorAttributes) -> io::Result<()> {
    out.queue(SetForegroundColor(console_color(attrs.foreground())))?
        .queue(SetBackgroundColor(console_color(attrs.background())))?;
    Ok(())
}
