use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x19, 0x76, 0xd2);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const FOCUS_BORDER: Color = Color::Rgb(0x42, 0xa5, 0xf5);
pub const LOW_STOCK: Color = Color::Rgb(0xff, 0x98, 0x00);
pub const SAVINGS: Color = Color::Rgb(0xd3, 0x2f, 0x2f);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DISABLED: Color = Color::Rgb(0x61, 0x61, 0x61);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TOAST_BORDER: Color = Color::Rgb(0x22, 0xc5, 0x5e);
