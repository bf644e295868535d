use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::font;
use crate::types;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Renders one type icon: a filled disc in the type's color with the
/// uppercased first letter centered in white, saved as `<label>.png` in
/// `output_dir`. Returns the absolute path written.
pub fn render(label: &str, output_dir: &Path, size: u32) -> Result<PathBuf> {
    anyhow::ensure!(!label.is_empty(), "label must not be empty");
    anyhow::ensure!(size > 0, "icon size must be positive, got {}", size);

    let [r, g, b] = types::color_for(label);

    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    let center = (size / 2) as i32;
    draw_filled_circle_mut(&mut img, (center, center), center, Rgba([r, g, b, 255]));

    let letter = label
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .context("label has no usable first character")?;

    let font = font::resolve(size / 2);
    println!("{}", format!("Using {} font for {}", font.name(), label).blue());

    let text_width = font.glyph_width(letter);
    // Glyph height is approximated as half the icon size rather than the
    // true font metrics; the original icon set was drawn this way and the
    // offset is part of its look.
    let text_height = size / 2;
    let x = (size.saturating_sub(text_width) / 2) as i32;
    let y = ((size - text_height) / 2) as i32;
    font.draw(&mut img, letter, x, y, WHITE);

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    let output_dir = fs::canonicalize(output_dir)
        .with_context(|| format!("Failed to resolve output directory: {}", output_dir.display()))?;

    let output_path = output_dir.join(format!("{}.png", label));
    img.save(&output_path)
        .with_context(|| format!("Failed to save icon to {}", output_path.display()))?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open(path: &Path) -> RgbaImage {
        image::open(path).expect("saved icon should reopen").to_rgba8()
    }

    #[test]
    fn test_render_writes_named_png_with_requested_size() {
        let dir = tempdir().unwrap();
        let path = render("fire", dir.path(), 48).unwrap();
        assert_eq!(path.file_name().unwrap(), "fire.png");
        let img = open(&path);
        assert_eq!(img.dimensions(), (48, 48));
    }

    #[test]
    fn test_disc_uses_table_color() {
        let dir = tempdir().unwrap();
        let path = render("fire", dir.path(), 48).unwrap();
        let img = open(&path);
        // Sample inside the disc but above the glyph, which starts at y=12.
        assert_eq!(*img.get_pixel(24, 6), Rgba([240, 128, 48, 255]));
    }

    #[test]
    fn test_unknown_label_uses_fallback_gray() {
        let dir = tempdir().unwrap();
        let path = render("unknown_type", dir.path(), 48).unwrap();
        let img = open(&path);
        assert_eq!(*img.get_pixel(24, 6), Rgba([204, 204, 204, 255]));
    }

    #[test]
    fn test_corners_stay_transparent() {
        let dir = tempdir().unwrap();
        let path = render("water", dir.path(), 48).unwrap();
        let img = open(&path);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(47, 47)[3], 0);
    }

    #[test]
    fn test_glyph_is_drawn_in_white() {
        let dir = tempdir().unwrap();
        let path = render("fire", dir.path(), 48).unwrap();
        let img = open(&path);
        assert!(img.pixels().any(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_rerender_replaces_previous_file() {
        let dir = tempdir().unwrap();
        render("grass", dir.path(), 64).unwrap();
        let path = render("grass", dir.path(), 48).unwrap();
        assert_eq!(open(&path).dimensions(), (48, 48));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("assets").join("images");
        let path = render("ice", &nested, 48).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dir = tempdir().unwrap();
        assert!(render("fire", dir.path(), 0).is_err());
        assert!(render("", dir.path(), 48).is_err());
    }
}
