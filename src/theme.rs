// Theme support for the TUI
//
// Provides color palettes selectable via config file and cyclable at
// runtime. "auto" uses the terminal's ANSI palette, named themes use
// true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme names in cycle order
pub const THEME_NAMES: [&str; 4] = ["auto", "dracula", "nord", "gruvbox"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    pub background: Color,
    pub foreground: Color,

    // Chrome
    pub title: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub status_bar: Color,
    pub highlight: Color,
    pub muted: Color,

    // Content accents
    /// Active category tab and selected rows
    pub tab_active: Color,
    /// Entrance-animation marker on revealed widgets
    pub reveal: Color,
    /// Star ratings and prices
    pub accent: Color,
    /// Validation failures
    pub error: Color,
    /// Toast borders and submit confirmations
    pub success: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Name of the next theme in the cycle
    pub fn next_name(current: &str) -> &'static str {
        let i = THEME_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(current))
            .unwrap_or(0);
        THEME_NAMES[(i + 1) % THEME_NAMES.len()]
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::White,
            title: Color::Cyan,
            border: Color::White,
            border_type: BorderType::Rounded,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            muted: Color::DarkGray,
            tab_active: Color::Cyan,
            reveal: Color::LightCyan,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            border_type: BorderType::Rounded,
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),  // yellow
            muted: Color::Rgb(0x62, 0x72, 0xa4),      // comment
            tab_active: Color::Rgb(0xbd, 0x93, 0xf9), // purple
            reveal: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            accent: Color::Rgb(0xf1, 0xfa, 0x8c),     // yellow
            error: Color::Rgb(0xff, 0x55, 0x55),      // red
            success: Color::Rgb(0x50, 0xfa, 0x7b),    // green
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            title: Color::Rgb(0x88, 0xc0, 0xd0),      // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night
            border_type: BorderType::Rounded,
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),  // aurora yellow
            muted: Color::Rgb(0x4c, 0x56, 0x6a),      // polar night
            tab_active: Color::Rgb(0xb4, 0x8e, 0xad), // aurora purple
            reveal: Color::Rgb(0x8f, 0xbc, 0xbb),     // frost teal
            accent: Color::Rgb(0xeb, 0xcb, 0x8b),     // yellow
            error: Color::Rgb(0xbf, 0x61, 0x6a),      // aurora red
            success: Color::Rgb(0xa3, 0xbe, 0x8c),    // green
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            title: Color::Rgb(0x83, 0xa5, 0x98),      // aqua
            border: Color::Rgb(0x92, 0x83, 0x74),     // gray
            border_type: BorderType::Rounded,
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),  // yellow
            muted: Color::Rgb(0x92, 0x83, 0x74),      // gray
            tab_active: Color::Rgb(0xd3, 0x86, 0x9b), // purple
            reveal: Color::Rgb(0x83, 0xa5, 0x98),     // aqua
            accent: Color::Rgb(0xfa, 0xbd, 0x2f),     // yellow
            error: Color::Rgb(0xfb, 0x49, 0x34),      // red
            success: Color::Rgb(0xb8, 0xbb, 0x26),    // green
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("no-such-theme").name, "auto");
    }

    #[test]
    fn cycle_visits_all_and_wraps() {
        let mut name = "auto";
        let mut seen = Vec::new();
        for _ in 0..THEME_NAMES.len() {
            name = Theme::next_name(name);
            seen.push(name);
        }
        assert_eq!(name, "auto");
        assert_eq!(seen.len(), THEME_NAMES.len());
    }
}
