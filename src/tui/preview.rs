//! Text rendering of images for the content box.

use image::imageops::FilterType;
use image::DynamicImage;

/// Characters from darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Render `image` as lines of ASCII art fitting `width` x `height` cells.
///
/// Terminal cells are about twice as tall as wide, so each row covers two
/// pixel rows of the scaled image. Aspect ratio is preserved.
pub fn ascii_lines(image: &DynamicImage, width: u16, height: u16) -> Vec<String> {
    let (image_w, image_h) = (image.width(), image.height());
    if width == 0 || height == 0 || image_w == 0 || image_h == 0 {
        return Vec::new();
    }

    let scale = (f64::from(width) / f64::from(image_w))
        .min(f64::from(height) * 2.0 / f64::from(image_h));
    let cols = ((f64::from(image_w) * scale).round() as u32).clamp(1, u32::from(width));
    let rows = ((f64::from(image_h) * scale / 2.0).round() as u32).clamp(1, u32::from(height));

    let luma = image.resize_exact(cols, rows, FilterType::Triangle).to_luma8();

    luma.rows()
        .map(|row| {
            row.map(|pixel| {
                let index = usize::from(pixel.0[0]) * (RAMP.len() - 1) / 255;
                char::from(RAMP[index])
            })
            .collect()
        })
        .collect()
}

/// Last rendered preview, reused until the picture or the area changes.
#[derive(Debug, Default)]
pub struct PreviewCache {
    key: Option<(u64, u16, u16)>,
    lines: Vec<String>,
}

impl PreviewCache {
    /// `version` identifies the picture; see `ScreenController::content_version`.
    pub fn lines(&mut self, version: u64, image: &DynamicImage, width: u16, height: u16) -> &[String] {
        let key = (version, width, height);
        if self.key != Some(key) {
            self.lines = ascii_lines(image, width, height);
            self.key = Some(key);
        }
        &self.lines
    }
}
