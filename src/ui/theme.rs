use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xd9, 0x8a, 0x4a);
pub const BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const TEXT: Color = Color::Rgb(0xe0, 0xe0, 0xe0);
pub const TEXT_DIM: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const FAVORITE: Color = Color::Rgb(0xe8, 0xc2, 0x4a);
pub const ERROR: Color = Color::Rgb(0xe5, 0x48, 0x48);
pub const SELECTION_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2a);
