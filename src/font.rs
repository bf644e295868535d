use std::fs;

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// Fonts tried in order before falling back to the built-in bitmap face.
const FONT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
];

/// A glyph font at a fixed pixel size: either a TrueType face loaded from
/// the system, or the built-in bitmap face that is always available.
pub enum GlyphFont {
    Truetype { name: String, font: FontVec, px: u32 },
    Builtin { px: u32 },
}

/// Resolves the best available font at the given pixel size. Never fails:
/// when no candidate loads, the built-in face is returned instead.
pub fn resolve(px: u32) -> GlyphFont {
    for path in FONT_CANDIDATES {
        if let Some(font) = fs::read(path).ok().and_then(|data| FontVec::try_from_vec(data).ok()) {
            let name = std::path::Path::new(path)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string());
            return GlyphFont::Truetype { name, font, px };
        }
    }
    GlyphFont::Builtin { px }
}

impl GlyphFont {
    pub fn name(&self) -> &str {
        match self {
            GlyphFont::Truetype { name, .. } => name,
            GlyphFont::Builtin { .. } => "built-in",
        }
    }

    /// Rendered advance width of a single character.
    pub fn glyph_width(&self, ch: char) -> u32 {
        match self {
            GlyphFont::Truetype { font, px, .. } => {
                let (w, _) = text_size(PxScale::from(*px as f32), font, &ch.to_string());
                w
            }
            GlyphFont::Builtin { px } => BITMAP_WIDTH * cell(*px),
        }
    }

    pub fn draw(&self, img: &mut RgbaImage, ch: char, x: i32, y: i32, color: Rgba<u8>) {
        match self {
            GlyphFont::Truetype { font, px, .. } => {
                draw_text_mut(img, color, x, y, PxScale::from(*px as f32), font, &ch.to_string());
            }
            GlyphFont::Builtin { px } => draw_bitmap_glyph(img, ch, x, y, cell(*px), color),
        }
    }
}

const BITMAP_WIDTH: u32 = 5;
const BITMAP_HEIGHT: u32 = 7;

/// Side length of one bitmap cell when scaled up to the requested size.
fn cell(px: u32) -> u32 {
    (px / BITMAP_HEIGHT).max(1)
}

fn draw_bitmap_glyph(img: &mut RgbaImage, ch: char, x: i32, y: i32, cell: u32, color: Rgba<u8>) {
    let rows = bitmap_rows(ch);
    for (row, bits) in rows.into_iter().enumerate() {
        for col in 0..BITMAP_WIDTH {
            if bits & (1u8 << (BITMAP_WIDTH - 1 - col)) == 0 {
                continue;
            }
            let x0 = x + (col * cell) as i32;
            let y0 = y + (row as u32 * cell) as i32;
            for dy in 0..cell {
                for dx in 0..cell {
                    let (px, py) = (x0 + dx as i32, y0 + dy as i32);
                    if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height()
                    {
                        img.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}

/// 5x7 rows, top to bottom, bit 4 = leftmost column. Characters outside
/// A-Z render as a hollow box.
fn bitmap_rows(ch: char) -> [u8; 7] {
    match ch {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_always_yields_a_font() {
        let font = resolve(24);
        assert!(!font.name().is_empty());
        assert!(font.glyph_width('F') > 0);
    }

    #[test]
    fn test_builtin_width_scales_with_size() {
        let small = GlyphFont::Builtin { px: 14 };
        let large = GlyphFont::Builtin { px: 70 };
        assert_eq!(small.glyph_width('A'), 10);
        assert_eq!(large.glyph_width('A'), 50);
    }

    #[test]
    fn test_builtin_draws_opaque_pixels() {
        let mut img = RgbaImage::new(48, 48);
        let font = GlyphFont::Builtin { px: 24 };
        font.draw(&mut img, 'F', 12, 12, Rgba([255, 255, 255, 255]));
        assert!(img.pixels().any(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_builtin_clips_at_image_edges() {
        let mut img = RgbaImage::new(8, 8);
        let font = GlyphFont::Builtin { px: 70 };
        // Must not panic even when the glyph extends past the canvas.
        font.draw(&mut img, 'W', -10, -10, Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_non_letter_uses_box_glyph() {
        let rows = bitmap_rows('7');
        assert_eq!(rows[0], 0b11111);
        assert_eq!(rows[6], 0b11111);
    }
}
