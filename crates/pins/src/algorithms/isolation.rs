use image::{GrayImage, ImageBuffer, Luma, Rgba, RgbaImage, imageops};
use imageproc::point::Point;
use crate::types::{BoundingBox, Region};

/// Rasterize a region's contour into a filled mask covering `frame`.
///
/// Contour points are shifted into `frame`-local coordinates; everything the
/// outer border encloses (holes included) is set to 255.
pub fn region_mask(region: &Region, frame: &BoundingBox) -> GrayImage {
    let mut mask = GrayImage::new(frame.width, frame.height);

    let mut polygon: Vec<Point<i32>> = region
        .contour
        .iter()
        .map(|p| Point::new(p.x - frame.x as i32, p.y - frame.y as i32))
        .collect();
    polygon.dedup();
    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }

    match polygon.len() {
        0 => {}
        1 => {
            let p = polygon[0];
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < frame.width && (p.y as u32) < frame.height {
                mask.put_pixel(p.x as u32, p.y as u32, Luma([255u8]));
            }
        }
        _ => imageproc::drawing::draw_polygon_mut(&mut mask, &polygon, Luma([255u8])),
    }

    mask
}

/// New image whose alpha is the source alpha ANDed with `mask`.
///
/// The mask must have the same dimensions as `image`.
pub fn apply_mask(image: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let m = mask.get_pixel(x, y)[0];
        Rgba([r, g, b, a & m])
    })
}

/// Bounding box of every pixel with non-zero alpha, `None` if fully transparent.
pub fn opaque_bounds(image: &RgbaImage) -> Option<BoundingBox> {
    let mut extent: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        extent = Some(match extent {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    extent.map(|(min_x, min_y, max_x, max_y)| BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop away fully transparent border rows and columns.
pub fn trim_transparent(image: &RgbaImage) -> Option<RgbaImage> {
    let bounds = opaque_bounds(image)?;
    Some(imageops::crop_imm(image, bounds.x, bounds.y, bounds.width, bounds.height).to_image())
}

/// Crop the padded frame around `region`, mask out everything outside its
/// contour and trim the result.
pub fn isolate_region(source: &RgbaImage, region: &Region, padding: u32) -> RgbaImage {
    let frame = region.bounds.padded(padding, source.width(), source.height());
    let crop = imageops::crop_imm(source, frame.x, frame.y, frame.width, frame.height).to_image();
    let mask = region_mask(region, &frame);
    let masked = apply_mask(&crop, &mask);

    // An empty result keeps the padded crop rather than producing a 0x0 image.
    trim_transparent(&masked).unwrap_or(masked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::ExternalContourExtractor;
    use crate::traits::ContourExtractor;

    const RED: Rgba<u8> = Rgba([220, 30, 30, 255]);
    const BLUE: Rgba<u8> = Rgba([30, 30, 220, 255]);

    fn paint(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, color);
            }
        }
    }

    fn alpha_mask(img: &RgbaImage) -> GrayImage {
        ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
            Luma([if img.get_pixel(x, y)[3] > 0 { 255 } else { 0 }])
        })
    }

    #[test]
    fn test_region_mask_fills_interior() {
        let mut img = RgbaImage::new(50, 50);
        paint(&mut img, 10, 10, 20, 15, RED);
        let regions = ExternalContourExtractor.extract_regions(&alpha_mask(&img)).expect("extract");
        let region = &regions[0];

        let frame = region.bounds.padded(5, 50, 50);
        let mask = region_mask(region, &frame);

        assert_eq!((mask.width(), mask.height()), (30, 25));
        let filled = mask.pixels().filter(|p| p[0] == 255).count();
        assert_eq!(filled, 20 * 15);
        assert_eq!(mask.get_pixel(5, 5)[0], 255);
        assert_eq!(mask.get_pixel(4, 5)[0], 0);
    }

    #[test]
    fn test_apply_mask_keeps_color_channels() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 200]));
        img.put_pixel(1, 0, Rgba([4, 5, 6, 255]));
        let mut mask = GrayImage::new(2, 1);
        mask.put_pixel(0, 0, Luma([255u8]));

        let out = apply_mask(&img, &mask);
        assert_eq!(*out.get_pixel(0, 0), Rgba([1, 2, 3, 200]));
        assert_eq!(*out.get_pixel(1, 0), Rgba([4, 5, 6, 0]));
        assert_eq!(img.get_pixel(1, 0)[3], 255, "source must be untouched");
    }

    #[test]
    fn test_trim_transparent() {
        let mut img = RgbaImage::new(30, 20);
        paint(&mut img, 4, 6, 10, 3, RED);

        let trimmed = trim_transparent(&img).expect("has content");
        assert_eq!(trimmed.dimensions(), (10, 3));
        assert_eq!(opaque_bounds(&trimmed), Some(BoundingBox { x: 0, y: 0, width: 10, height: 3 }));

        assert!(trim_transparent(&RgbaImage::new(8, 8)).is_none());
    }

    #[test]
    fn test_isolation_hides_neighbor() {
        let mut img = RgbaImage::new(80, 40);
        paint(&mut img, 10, 10, 20, 20, RED);
        paint(&mut img, 35, 10, 20, 20, BLUE);

        let mut regions = ExternalContourExtractor
            .extract_regions(&alpha_mask(&img))
            .expect("extract");
        regions.sort_by_key(|r| r.bounds.x);
        assert_eq!(regions.len(), 2);

        let pin = isolate_region(&img, &regions[0], 10);
        assert_eq!(pin.dimensions(), (20, 20));
        assert!(pin.pixels().all(|p| *p == RED));
    }
}
