use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, RgbaImage};
use crate::{
    algorithms::ThresholdPreprocessor,
    error::{PinError, Result},
    traits::MaskPreprocessor,
    types::{NEUTRAL_GRAY, hex_color},
};

/// Luma level above which a pixel of an alpha-less source counts as opaque
const GRAYSCALE_OPACITY_THRESHOLD: u8 = 1;

/// A decoded source image together with its opacity mask
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Base name of the file the image was read from
    pub name: String,
    pub pixels: RgbaImage,
    /// 255 where the source is opaque, 0 elsewhere
    pub opacity: GrayImage,
    /// Whether the source carried color channels (not just luma)
    pub has_color: bool,
}

impl SourceImage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| PinError::InvalidPath(path.display().to_string()))?;

        let image = image::open(path).map_err(|source| PinError::Decode {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_dynamic(name, image)
    }

    pub fn from_dynamic(name: impl Into<String>, image: DynamicImage) -> Result<Self> {
        let color = image.color();
        let pixels = image.to_rgba8();

        let opacity = if color.has_alpha() {
            ImageBuffer::from_fn(pixels.width(), pixels.height(), |x, y| {
                Luma([if pixels.get_pixel(x, y)[3] > 0 { 255 } else { 0 }])
            })
        } else {
            tracing::warn!("Image doesn't have alpha channel, using grayscale as opacity");
            ThresholdPreprocessor { threshold: GRAYSCALE_OPACITY_THRESHOLD }
                .preprocess(&image.to_luma8())?
        };

        Ok(Self {
            name: name.into(),
            pixels,
            opacity,
            has_color: color.has_color(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// `#rrggbb` of the pixel at (x, y), or neutral gray for luma-only sources.
    ///
    /// The pipeline samples the true center of a region's unpadded bounding box.
    pub fn color_at(&self, x: u32, y: u32) -> String {
        if !self.has_color {
            return NEUTRAL_GRAY.to_string();
        }
        match self.pixels.get_pixel_checked(x, y) {
            Some(pixel) => hex_color(pixel),
            None => NEUTRAL_GRAY.to_string(),
        }
    }
}
