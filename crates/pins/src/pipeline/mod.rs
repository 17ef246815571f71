pub mod builder;

use std::path::Path;

use image::GrayImage;
use crate::{
    algorithms::{discard_small_regions, isolate_region, order_left_to_right},
    error::Result,
    io::{SourceImage, save_compressed_png},
    traits::{ContourExtractor, MaskPreprocessor},
    types::{ExtractedPin, PinRecord, Position, Region},
};

/// Margin added around each region before masking, in pixels
pub const DEFAULT_PADDING: u32 = 10;
/// Regions enclosing this area or less are treated as noise
pub const DEFAULT_MIN_AREA: f64 = 100.0;

/// Detects pins in a source image and isolates each one
pub struct Pipeline {
    preprocessors: Vec<Box<dyn MaskPreprocessor>>,
    contour_extractor: Box<dyn ContourExtractor>,
    padding: u32,
    min_area: f64,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(
        preprocessors: Vec<Box<dyn MaskPreprocessor>>,
        contour_extractor: Box<dyn ContourExtractor>,
        padding: u32,
        min_area: f64,
    ) -> Self {
        Self {
            preprocessors,
            contour_extractor,
            padding,
            min_area,
        }
    }

    /// Clean the opacity mask and return qualifying regions in reading order
    pub fn detect(&self, opacity: &GrayImage) -> Result<Vec<Region>> {
        let mut mask = opacity.clone();
        for preprocessor in &self.preprocessors {
            mask = preprocessor.preprocess(&mask)?;
        }

        let regions = self.contour_extractor.extract_regions(&mask)?;
        let mut regions = discard_small_regions(regions, self.min_area);
        order_left_to_right(&mut regions);
        Ok(regions)
    }

    /// Detect and isolate every pin, entirely in memory
    pub fn process(&self, source: &SourceImage) -> Result<Vec<ExtractedPin>> {
        let regions = self.detect(&source.opacity)?;

        let pins = regions
            .iter()
            .enumerate()
            .map(|(index, region)| {
                let image = isolate_region(&source.pixels, region, self.padding);
                let (cx, cy) = region.bounds.center();
                let record = PinRecord {
                    file: PinRecord::file_name(index),
                    dimensions: region.bounds.dimensions_label(),
                    color: source.color_at(cx, cy),
                    position: Position {
                        x: region.bounds.x,
                        y: region.bounds.y,
                    },
                };
                ExtractedPin { record, image }
            })
            .collect();

        Ok(pins)
    }

    /// Process `source` and write each pin into `output_dir`.
    pub fn extract_to_dir<P: AsRef<Path>>(
        &self,
        source: &SourceImage,
        output_dir: P,
    ) -> Result<Vec<PinRecord>> {
        let output_dir = output_dir.as_ref();
        let pins = self.process(source)?;

        let mut records = Vec::with_capacity(pins.len());
        for pin in pins {
            save_compressed_png(&pin.image, output_dir.join(&pin.record.file))?;
            tracing::info!(
                "Extracted {} ({}, color: {})",
                pin.record.file,
                pin.record.dimensions,
                pin.record.color
            );
            records.push(pin.record);
        }

        Ok(records)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: {} preprocessors, padding {}px, min area {}",
            self.preprocessors.len(),
            self.padding,
            self.min_area
        )
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        builder::PipelineBuilder::new().build()
    }
}
