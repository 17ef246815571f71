use image::GrayImage;
use imageproc::distance_transform::Norm;
use crate::{error::Result, traits::MaskPreprocessor};

/// Simple thresholding preprocessor
#[derive(Debug, Clone)]
pub struct ThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for ThresholdPreprocessor {
    fn default() -> Self {
        Self { threshold: 1 }
    }
}

impl MaskPreprocessor for ThresholdPreprocessor {
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::contrast::threshold(mask, self.threshold))
    }
}

/// Morphological closing: merges opaque pixels separated by small gaps.
///
/// A radius of 1 under the chessboard norm is a 3x3 square structuring element.
#[derive(Debug, Clone)]
pub struct MorphologicalClose {
    pub radius: u8,
}

impl Default for MorphologicalClose {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

impl MaskPreprocessor for MorphologicalClose {
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::morphology::close(mask, Norm::LInf, self.radius))
    }
}

/// Morphological opening: removes isolated speckles
#[derive(Debug, Clone)]
pub struct MorphologicalOpen {
    pub radius: u8,
}

impl Default for MorphologicalOpen {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

impl MaskPreprocessor for MorphologicalOpen {
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::morphology::open(mask, Norm::LInf, self.radius))
    }
}
