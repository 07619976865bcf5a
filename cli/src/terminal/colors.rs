use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const VALUE: Color = Color::Yellow;
pub const SUPPORTED: Color = Color::Green;
pub const UNSUPPORTED: Color = Color::Red;
