use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use image::{
    ExtendedColorType, ImageEncoder, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};
use crate::{algorithms::trim_transparent, error::Result};

/// Write an RGBA image as PNG using the slowest, smallest encoding.
pub fn save_compressed_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

/// `pin_*.png` files directly inside `dir`, sorted by file name.
pub fn pin_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pin = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("pin_") && n.ends_with(".png"));
        if is_pin && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Trim transparent borders off every pin image in `dir`, rewriting in place.
///
/// Fully transparent images are left untouched. Returns the rewritten files.
pub fn optimize_pins<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut optimized = Vec::new();

    for path in pin_files(dir)? {
        let image = image::open(&path)?.to_rgba8();
        let Some(trimmed) = trim_transparent(&image) else {
            tracing::debug!("Skipping fully transparent {}", path.display());
            continue;
        };

        save_compressed_png(&trimmed, &path)?;
        tracing::info!("Optimized {}", path.display());
        optimized.push(path);
    }

    Ok(optimized)
}
