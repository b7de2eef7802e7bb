use crate::shared::grayscale::Grayscale;
use crate::shared::region::Region;
use super::detect_params::DetectParams;

/// Finds rectangular matches in a grayscale image.
///
/// Returned boxes are in the input image's own coordinates; callers
/// that detect inside a crop translate them back themselves. Takes
/// `&mut self` because backends may reuse internal scratch buffers
/// between calls.
pub trait RegionDetector {
    fn detect(
        &mut self,
        image: &Grayscale,
        params: &DetectParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
