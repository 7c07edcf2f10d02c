//! Color themes and glyphs for the Aura TUI.
//!
//! Dark uses the Kanagawa Wave palette, light uses Kanagawa Lotus. A
//! high-contrast override replaces either.

use ratatui::style::{Color, Modifier, Style};

use aura_types::ui::{Theme, UiOptions};

/// Kanagawa Wave (dark) palette constants.
mod wave {
    use super::Color;

    pub const BG: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const TEXT: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const VIOLET: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Kanagawa Lotus (light) palette constants.
mod lotus {
    use super::Color;

    pub const BG: Color = Color::Rgb(242, 236, 188); // lotusWhite3
    pub const BG_PANEL: Color = Color::Rgb(231, 219, 160); // lotusWhite4
    pub const BORDER: Color = Color::Rgb(201, 203, 209); // lotusGray2
    pub const TEXT: Color = Color::Rgb(84, 84, 100); // lotusInk1
    pub const TEXT_MUTED: Color = Color::Rgb(138, 137, 128); // lotusGray3
    pub const VIOLET: Color = Color::Rgb(98, 76, 131); // lotusViolet4
    pub const BLUE: Color = Color::Rgb(77, 105, 155); // lotusBlue4
    pub const GREEN: Color = Color::Rgb(111, 137, 78); // lotusGreen
    pub const YELLOW: Color = Color::Rgb(119, 113, 63); // lotusYellow
    pub const ORANGE: Color = Color::Rgb(204, 109, 0); // lotusOrange
    pub const RED: Color = Color::Rgb(200, 64, 83); // lotusRed
}

/// Resolved palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub violet: Color,
    pub blue: Color,
    pub orange: Color,
    pub info: Color,
    pub warn: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: wave::BG,
            bg_panel: wave::BG_PANEL,
            border: wave::BORDER,
            text: wave::TEXT,
            text_muted: wave::TEXT_MUTED,
            violet: wave::VIOLET,
            blue: wave::BLUE,
            orange: wave::ORANGE,
            info: wave::BLUE,
            warn: wave::YELLOW,
            error: wave::RED,
            success: wave::GREEN,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: lotus::BG,
            bg_panel: lotus::BG_PANEL,
            border: lotus::BORDER,
            text: lotus::TEXT,
            text_muted: lotus::TEXT_MUTED,
            violet: lotus::VIOLET,
            blue: lotus::BLUE,
            orange: lotus::ORANGE,
            info: lotus::BLUE,
            warn: lotus::YELLOW,
            error: lotus::RED,
            success: lotus::GREEN,
        }
    }

    #[must_use]
    pub fn high_contrast(theme: Theme) -> Self {
        let (bg, text) = match theme {
            Theme::Dark => (Color::Black, Color::White),
            Theme::Light => (Color::White, Color::Black),
        };
        Self {
            bg,
            bg_panel: bg,
            border: Color::Gray,
            text,
            text_muted: Color::DarkGray,
            violet: Color::Magenta,
            blue: Color::Blue,
            orange: Color::Yellow,
            info: Color::Blue,
            warn: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

#[must_use]
pub fn palette(theme: Theme, options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette::high_contrast(theme);
    }
    match theme {
        Theme::Dark => Palette::dark(),
        Theme::Light => Palette::light(),
    }
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub user: &'static str,
    pub assistant: &'static str,
    pub streaming: &'static str,
    pub paused: &'static str,
    pub theme: &'static str,
    pub ellipsis: &'static str,
    pub spinner_frames: &'static [&'static str],
    /// Banner shading from light to dense.
    pub shades: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];
const SHADES: &[&str] = &[" ", "░", "▒", "▓", "█"];
const SHADES_ASCII: &[&str] = &[" ", ".", ":", "=", "#"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            user: "U",
            assistant: "A",
            streaming: ">",
            paused: "||",
            theme: "*",
            ellipsis: "...",
            spinner_frames: SPINNER_FRAMES_ASCII,
            shades: SHADES_ASCII,
        }
    } else {
        Glyphs {
            user: "○",
            assistant: "◇",
            streaming: "●",
            paused: "⏸",
            theme: "◐",
            ellipsis: "…",
            spinner_frames: SPINNER_FRAMES,
            shades: SHADES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn user_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.blue)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn assistant_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.violet)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn timestamp(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.orange)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.violet)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        assert_ne!(spinner_frame(0, options), spinner_frame(1, options));
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert_eq!(spinner_frame(0, options), spinner_frame(7, options));
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let glyphs = glyphs(options);
        assert!(glyphs.shades.iter().all(|s| s.is_ascii()));
        assert!(glyphs.spinner_frames.iter().all(|s| s.is_ascii()));
        assert!(glyphs.ellipsis.is_ascii());
    }

    #[test]
    fn theme_selects_palette() {
        let options = UiOptions::default();
        assert_eq!(palette(Theme::Dark, options).bg, Palette::dark().bg);
        assert_eq!(palette(Theme::Light, options).bg, Palette::light().bg);

        let contrast = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        assert_eq!(palette(Theme::Light, contrast).bg, Color::White);
        assert_eq!(palette(Theme::Dark, contrast).bg, Color::Black);
    }
}
