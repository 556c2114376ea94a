// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use crate::guide::SectionId;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub border_type: BorderType,

    // Content colors
    pub code: Color,
    pub good: Color,
    pub bad: Color,
    pub tip: Color,
    pub copied: Color,

    // Section identity colors (tab underline, banner, card accents)
    pub section_foundation: Color,
    pub section_advanced: Color,
    pub section_workshop: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "light" => Self::light(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Names accepted by [`Theme::by_name`]
    pub fn names() -> &'static [&'static str] {
        &["auto", "dracula", "nord", "light"]
    }

    /// Accent color for a section
    pub fn section_color(&self, id: SectionId) -> Color {
        match id {
            SectionId::Foundation => self.section_foundation,
            SectionId::Advanced => self.section_advanced,
            SectionId::Workshop => self.section_workshop,
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            highlight: Color::Yellow,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            border_type: BorderType::Rounded,
            code: Color::LightYellow,
            good: Color::Green,
            bad: Color::Red,
            tip: Color::Yellow,
            copied: Color::Green,
            section_foundation: Color::Cyan,
            section_advanced: Color::Magenta,
            section_workshop: Color::LightRed,
        }
    }

    /// Dracula theme - dark purple
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),
            border: Color::Rgb(0x44, 0x47, 0x5a),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
            code: Color::Rgb(0xf1, 0xfa, 0x8c),
            good: Color::Rgb(0x50, 0xfa, 0x7b),
            bad: Color::Rgb(0xff, 0x55, 0x55),
            tip: Color::Rgb(0xff, 0xb8, 0x6c),
            copied: Color::Rgb(0x50, 0xfa, 0x7b),
            section_foundation: Color::Rgb(0x8b, 0xe9, 0xfd),
            section_advanced: Color::Rgb(0xbd, 0x93, 0xf9),
            section_workshop: Color::Rgb(0xff, 0xb8, 0x6c),
        }
    }

    /// Nord theme - arctic blue
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            border: Color::Rgb(0x43, 0x4c, 0x5e),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            selection: Color::Rgb(0x43, 0x4c, 0x5e),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            border_type: BorderType::Plain,
            code: Color::Rgb(0xeb, 0xcb, 0x8b),
            good: Color::Rgb(0xa3, 0xbe, 0x8c),
            bad: Color::Rgb(0xbf, 0x61, 0x6a),
            tip: Color::Rgb(0xd0, 0x87, 0x70),
            copied: Color::Rgb(0xa3, 0xbe, 0x8c),
            section_foundation: Color::Rgb(0x8f, 0xbc, 0xbb),
            section_advanced: Color::Rgb(0xb4, 0x8e, 0xad),
            section_workshop: Color::Rgb(0xd0, 0x87, 0x70),
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::Rgb(0xf9, 0xfa, 0xfb),
            foreground: Color::Rgb(0x1f, 0x29, 0x37),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            title: Color::Rgb(0x25, 0x63, 0xeb),
            border: Color::Rgb(0xd1, 0xd5, 0xdb),
            highlight: Color::Rgb(0x25, 0x63, 0xeb),
            selection: Color::Rgb(0xdb, 0xea, 0xfe),
            selection_fg: Color::Rgb(0x1f, 0x29, 0x37),
            border_type: BorderType::Rounded,
            code: Color::Rgb(0x92, 0x40, 0x0e),
            good: Color::Rgb(0x16, 0x65, 0x34),
            bad: Color::Rgb(0x99, 0x1b, 0x1b),
            tip: Color::Rgb(0xb4, 0x53, 0x09),
            copied: Color::Rgb(0x16, 0xa3, 0x4a),
            section_foundation: Color::Rgb(0x0d, 0x94, 0x88),
            section_advanced: Color::Rgb(0x7c, 0x3a, 0xed),
            section_workshop: Color::Rgb(0xea, 0x58, 0x0c),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
