//! Animated gradient banner shown under the header.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use aura_types::ui::UiOptions;

use crate::theme::{Glyphs, Palette};

/// Columns the wave travels per UI tick.
const DRIFT_PER_TICK: f32 = 0.35;
/// Columns per full wave period.
const WAVELENGTH: f32 = 18.0;

/// Build one banner row `width` cells wide. With `reduced_motion` the wave is frozen at tick 0.
#[must_use]
pub fn banner_line(
    width: u16,
    tick: usize,
    palette: &Palette,
    glyphs: &Glyphs,
    options: UiOptions,
) -> Line<'static> {
    let tick = if options.reduced_motion { 0 } else { tick };
    let phase = (tick % 10_000) as f32 * DRIFT_PER_TICK;
    let columns = usize::from(width);

    let spans = (0..columns)
        .map(|col| {
            let x = col as f32;
            let wave = 0.5 + 0.5 * ((x + phase) * std::f32::consts::TAU / WAVELENGTH).sin();
            let across = if columns > 1 {
                x / (columns - 1) as f32
            } else {
                0.0
            };
            let shade = shade_for(wave, glyphs.shades);
            let color = lerp_color(palette.violet, palette.blue, across);
            Span::styled(shade, Style::default().fg(color))
        })
        .collect::<Vec<_>>();

    Line::from(spans)
}

fn shade_for(intensity: f32, shades: &'static [&'static str]) -> &'static str {
    if shades.is_empty() {
        return " ";
    }
    let last = shades.len() - 1;
    let index = (intensity.clamp(0.0, 1.0) * last as f32).round() as usize;
    shades[index.min(last)]
}

/// Linear blend between two RGB colors. Named colors fall back to `from`.
fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Palette, glyphs};

    fn render(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn banner_fills_width() {
        let options = UiOptions::default();
        let line = banner_line(40, 3, &Palette::dark(), &glyphs(options), options);
        assert_eq!(line.spans.len(), 40);
    }

    #[test]
    fn banner_moves_with_tick() {
        let options = UiOptions::default();
        let glyphs = glyphs(options);
        let a = render(&banner_line(40, 0, &Palette::dark(), &glyphs, options));
        let b = render(&banner_line(40, 5, &Palette::dark(), &glyphs, options));
        assert_ne!(a, b);
    }

    #[test]
    fn reduced_motion_freezes_banner() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        let glyphs = glyphs(options);
        let a = render(&banner_line(40, 0, &Palette::light(), &glyphs, options));
        let b = render(&banner_line(40, 5, &Palette::light(), &glyphs, options));
        assert_eq!(a, b);
    }

    #[test]
    fn gradient_runs_between_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(lerp_color(from, to, 0.0), from);
        assert_eq!(lerp_color(from, to, 1.0), to);
        assert_eq!(lerp_color(from, to, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(lerp_color(Color::Red, to, 0.5), Color::Red);
    }
}
