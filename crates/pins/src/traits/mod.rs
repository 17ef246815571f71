use image::GrayImage;
use crate::{error::Result, types::Region};

/// Trait for opacity mask preprocessing algorithms
pub trait MaskPreprocessor: Send + Sync {
    /// Transform the binary opacity mask (e.g., threshold, denoise)
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage>;
}

/// Trait for region detection on a binary mask
pub trait ContourExtractor: Send + Sync {
    /// Extract one region per top-level opaque component
    fn extract_regions(&self, mask: &GrayImage) -> Result<Vec<Region>>;
}
