//! Terminal cells cannot be layered, so a cross-fade is drawn by rendering one
//! screen and blending every cell's colours toward the background.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

type Rgb = (u8, u8, u8);

const BACKGROUND: Rgb = (0, 0, 0);
/// What most terminals use for `Color::Reset` foreground.
const DEFAULT_FG: Rgb = (204, 204, 204);

pub fn apply(buf: &mut Buffer, area: Rect, opacity: f32) {
    if opacity >= 1.0 {
        return;
    }
    let opacity = opacity.max(0.0);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = to_rgb(cell.bg);
                let fg = to_rgb(cell.fg).unwrap_or(DEFAULT_FG);
                let base = bg.unwrap_or(BACKGROUND);

                cell.fg = rgb(blend(fg, base, opacity));
                if let Some(bg) = bg {
                    cell.bg = rgb(blend(bg, BACKGROUND, opacity));
                }
            }
        }
    }
}

/// `opacity` of `color` over `base`.
pub fn blend(color: Rgb, base: Rgb, opacity: f32) -> Rgb {
    let mix = |c: u8, b: u8| -> u8 {
        (b as f32 + (c as f32 - b as f32) * opacity).round().clamp(0.0, 255.0) as u8
    };
    (
        mix(color.0, base.0),
        mix(color.1, base.1),
        mix(color.2, base.2),
    )
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Approximate xterm values for the named colours. `None` means the terminal
/// default.
fn to_rgb(color: Color) -> Option<Rgb> {
    let rgb = match color {
        Color::Reset => return None,
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(_) => (128, 128, 128),
    };
    Some(rgb)
}
