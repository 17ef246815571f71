use image::GrayImage;
use imageproc::contours::BorderType;
use crate::{error::Result, traits::ContourExtractor, types::Region};

/// Imageproc-based extractor keeping only outermost borders.
///
/// Holes inside a pin and components nested inside those holes are part of
/// the enclosing region, not regions of their own.
#[derive(Debug, Clone, Default)]
pub struct ExternalContourExtractor;

impl ContourExtractor for ExternalContourExtractor {
    fn extract_regions(&self, mask: &GrayImage) -> Result<Vec<Region>> {
        let contours = imageproc::contours::find_contours::<i32>(mask);

        let regions = contours
            .into_iter()
            .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
            .filter_map(|contour| Region::from_contour(contour.points))
            .collect();

        Ok(regions)
    }
}

/// Drop regions whose enclosed area does not exceed `min_area`.
pub fn discard_small_regions(regions: Vec<Region>, min_area: f64) -> Vec<Region> {
    regions
        .into_iter()
        .filter(|region| {
            let keep = region.area > min_area;
            if !keep {
                tracing::debug!(
                    "Discarding region at ({}, {}) with area {:.1}",
                    region.bounds.x,
                    region.bounds.y,
                    region.area
                );
            }
            keep
        })
        .collect()
}

/// Reading order: left edge, then top edge, then detection order.
pub fn order_left_to_right(regions: &mut [Region]) {
    regions.sort_by_key(|region| (region.bounds.x, region.bounds.y));
}
