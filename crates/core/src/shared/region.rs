/// Axis-aligned rectangle in image coordinates.
///
/// Coordinates are signed so that geometry derived from one detection
/// pass can be repositioned inside another image before being clamped
/// to its bounds. A region with non-positive width or height is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The same rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// The lower half of this rectangle. Integer division puts the
    /// split row in the lower band, so an odd height rounds its way.
    pub fn lower_half(&self) -> Self {
        let top = self.height / 2;
        Self::new(self.x, self.y + top, self.width, self.height - top)
    }

    /// Intersection with an `image_width` x `image_height` image.
    ///
    /// The result is empty when the rectangle lies entirely outside
    /// the image bounds.
    pub fn clamped_to(&self, image_width: u32, image_height: u32) -> Self {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = (self.x + self.width).min(image_width as i32);
        let y2 = (self.y + self.height).min(image_height as i32);
        Self::new(x1, y1, (x2 - x1).max(0), (y2 - y1).max(0))
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_translated_shifts_origin_only() {
        let region = Region::new(10, 20, 30, 40);
        assert_eq!(region.translated(5, -7), Region::new(15, 13, 30, 40));
    }

    #[rstest]
    #[case::even_height(Region::new(0, 0, 100, 100), Region::new(0, 50, 100, 50))]
    #[case::odd_height(Region::new(4, 10, 20, 31), Region::new(4, 25, 20, 16))]
    #[case::unit_height(Region::new(0, 0, 5, 1), Region::new(0, 0, 5, 1))]
    fn test_lower_half(#[case] region: Region, #[case] expected: Region) {
        assert_eq!(region.lower_half(), expected);
    }

    #[rstest]
    #[case::fully_inside(Region::new(10, 10, 20, 20), Region::new(10, 10, 20, 20))]
    #[case::overhangs_bottom_right(Region::new(90, 90, 20, 20), Region::new(90, 90, 10, 10))]
    #[case::negative_origin(Region::new(-5, -5, 20, 20), Region::new(0, 0, 15, 15))]
    #[case::right_of_image(Region::new(200, 10, 20, 20), Region::new(200, 10, 0, 20))]
    #[case::above_image(Region::new(10, -50, 20, 20), Region::new(10, 0, 20, 0))]
    fn test_clamped_to_100x100(#[case] region: Region, #[case] expected: Region) {
        assert_eq!(region.clamped_to(100, 100), expected);
    }

    #[rstest]
    #[case::positive_dims(Region::new(0, 0, 1, 1), false)]
    #[case::zero_width(Region::new(0, 0, 0, 10), true)]
    #[case::zero_height(Region::new(0, 0, 10, 0), true)]
    #[case::negative_width(Region::new(0, 0, -3, 10), true)]
    fn test_is_empty(#[case] region: Region, #[case] expected: bool) {
        assert_eq!(region.is_empty(), expected);
    }

    #[test]
    fn test_lower_half_below_image_clamps_to_empty() {
        // A face whose lower half starts past the bottom edge.
        let face = Region::new(40, 400, 300, 200);
        let band = face.lower_half().clamped_to(640, 480);
        assert!(band.is_empty());
    }
}
