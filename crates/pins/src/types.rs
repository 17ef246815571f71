use image::{Rgba, RgbaImage};
use imageproc::point::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel extent, inclusive of its edge pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Smallest box containing every point. `None` for an empty slice.
    pub fn from_points(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }

    /// Grow the box by `padding` on every side, clamped to `image_width` x `image_height`.
    pub fn padded(&self, padding: u32, image_width: u32, image_height: u32) -> Self {
        let x = self.x.saturating_sub(padding);
        let y = self.y.saturating_sub(padding);
        let right = (self.x + self.width + padding).min(image_width);
        let bottom = (self.y + self.height + padding).min(image_height);

        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    /// Center pixel, rounding toward the top-left like integer halving.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn dimensions_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// A connected opaque area found in the opacity mask
#[derive(Debug, Clone)]
pub struct Region {
    /// Outer border pixels, in source image coordinates
    pub contour: Vec<Point<i32>>,
    pub bounds: BoundingBox,
    /// Area enclosed by the contour polygon
    pub area: f64,
}

impl Region {
    pub fn from_contour(contour: Vec<Point<i32>>) -> Option<Self> {
        let bounds = BoundingBox::from_points(&contour)?;
        let area = polygon_area(&contour);
        Some(Self {
            contour,
            bounds,
            area,
        })
    }
}

/// Shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let twice_area: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
        .sum();

    twice_area.abs() as f64 / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// One entry of the extraction manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRecord {
    pub file: String,
    pub dimensions: String,
    pub color: String,
    pub position: Position,
}

impl PinRecord {
    pub fn file_name(index: usize) -> String {
        format!("pin_{index:02}.png")
    }
}

/// A pin held in memory, ready to be encoded
#[derive(Debug, Clone)]
pub struct ExtractedPin {
    pub record: PinRecord,
    pub image: RgbaImage,
}

/// Fallback color for sources without color channels
pub const NEUTRAL_GRAY: &str = "#808080";

pub fn hex_color(pixel: &Rgba<u8>) -> String {
    let [r, g, b, _] = pixel.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: i32, y: i32, side: i32) -> Vec<Point<i32>> {
        let mut pts = Vec::new();
        for i in 0..side {
            pts.push(Point::new(x + i, y));
        }
        for i in 1..side {
            pts.push(Point::new(x + side - 1, y + i));
        }
        for i in (0..side - 1).rev() {
            pts.push(Point::new(x + i, y + side - 1));
        }
        for i in (1..side - 1).rev() {
            pts.push(Point::new(x, y + i));
        }
        pts
    }

    #[test]
    fn test_bounding_box_from_points() {
        let bounds = BoundingBox::from_points(&square(5, 7, 4)).expect("non-empty");
        assert_eq!(bounds, BoundingBox { x: 5, y: 7, width: 4, height: 4 });
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_padding_is_clamped() {
        let bounds = BoundingBox { x: 3, y: 50, width: 20, height: 10 };
        let padded = bounds.padded(10, 40, 65);
        assert_eq!(padded, BoundingBox { x: 0, y: 40, width: 33, height: 25 });
    }

    #[test]
    fn test_polygon_area_of_pixel_square() {
        // Border pixel centers of an 11x11 block enclose 10x10.
        assert_eq!(polygon_area(&square(0, 0, 11)), 100.0);
        assert_eq!(polygon_area(&[Point::new(0, 0), Point::new(4, 0)]), 0.0);
    }

    #[test]
    fn test_hex_color_and_file_name() {
        assert_eq!(hex_color(&Rgba([200, 40, 10, 255])), "#c8280a");
        assert_eq!(PinRecord::file_name(3), "pin_03.png");
        assert_eq!(PinRecord::file_name(42), "pin_42.png");
    }
}
