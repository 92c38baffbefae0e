//! Luminance-ramp text art.

use super::{ImageRenderer, RenderPreset};
use crate::domain::entry::RenderMode;
use crate::domain::error::{PhogoError, Result};
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use std::fmt::Write as _;
use std::path::Path;

/// Characters from darkest to brightest.
pub const CHARACTER_RAMP: &[u8] = b" .:-=+*#%@";

const RESET: &str = "\x1b[0m";

/// Production [`ImageRenderer`] backed by the `image` crate.
///
/// The file format is sniffed from content, so a PNG saved as `.jpg` still
/// renders. Transparent pixels are composited over black.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl ImageRenderer for AsciiRenderer {
    fn render(&self, path: &Path, width: u16, height: u16, mode: RenderMode) -> Result<String> {
        let _span = tracing::debug_span!(
            "ascii_render",
            path = %path.display(),
            width,
            height,
            mode = %mode
        )
        .entered();

        if width == 0 || height == 0 {
            return Err(PhogoError::Render(format!(
                "target size {width}x{height} is empty"
            )));
        }

        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        tracing::debug!(
            source_width = decoded.width(),
            source_height = decoded.height(),
            "decoded image"
        );

        Ok(image_to_text(
            &decoded.to_rgba8(),
            u32::from(width),
            u32::from(height),
            RenderPreset::from(mode),
        ))
    }
}

/// Scales `img` to `width × height` cells and maps each cell to a character.
///
/// Lines are separated by `\n` with no trailing newline. In colored mode
/// every line ends with an SGR reset so colors never leak into the UI.
#[must_use]
pub fn image_to_text(img: &RgbaImage, width: u32, height: u32, preset: RenderPreset) -> String {
    let scaled = imageops::resize(img, width, height, FilterType::Triangle);
    let mut out = String::with_capacity((width as usize + 1) * height as usize);

    for y in 0..height {
        if y > 0 {
            out.push('\n');
        }
        let mut last_color = None;

        for x in 0..width {
            let [r, g, b] = over_black(scaled.get_pixel(x, y).0);
            let ch = ramp_char(luminance(r, g, b), preset.reversed);

            if preset.colored && last_color != Some((r, g, b)) {
                let _ = write!(out, "\x1b[38;2;{r};{g};{b}m");
                last_color = Some((r, g, b));
            }
            out.push(ch);
        }

        if preset.colored {
            out.push_str(RESET);
        }
    }

    out
}

fn over_black([r, g, b, a]: [u8; 4]) -> [u8; 3] {
    let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
    [scale(r), scale(g), scale(b)]
}

/// Relative luminance in `0.0..=1.0` (Rec. 709 weights).
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b)) / 255.0
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn ramp_char(lum: f32, reversed: bool) -> char {
    let lum = if reversed { 1.0 - lum } else { lum };
    let last = CHARACTER_RAMP.len() - 1;
    let index = (lum.clamp(0.0, 1.0) * last as f32).round() as usize;
    char::from(CHARACTER_RAMP[index.min(last)])
}
