use opencv::core::{Mat, Rect, Scalar, Size, Vector, CV_8UC1};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::detect_params::DetectParams;
use crate::detection::domain::region_detector::RegionDetector;
use crate::shared::grayscale::Grayscale;
use crate::shared::region::Region;

/// Haar cascade detector backed by OpenCV's `CascadeClassifier`.
///
/// One instance wraps one cascade; the face and mouth passes each get
/// their own detector built from their own file.
pub struct HaarCascadeDetector {
    classifier: CascadeClassifier,
}

impl HaarCascadeDetector {
    pub fn new(classifier: CascadeClassifier) -> Self {
        Self { classifier }
    }
}

impl RegionDetector for HaarCascadeDetector {
    fn detect(
        &mut self,
        image: &Grayscale,
        params: &DetectParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        if image.width() == 0 || image.height() == 0 {
            return Ok(Vec::new());
        }
        let mat = to_mat(image)?;
        let mut objects = Vector::<Rect>::new();
        let min = params.min_size as i32;
        self.classifier.detect_multi_scale(
            &mat,
            &mut objects,
            params.scale_factor,
            params.min_neighbors,
            0,
            Size::new(min, min),
            Size::default(),
        )?;
        Ok(objects
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect())
    }
}

/// Copy a grayscale image into a continuous single-channel `Mat`.
fn to_mat(image: &Grayscale) -> Result<Mat, opencv::Error> {
    let mut mat = Mat::new_rows_cols_with_default(
        image.height() as i32,
        image.width() as i32,
        CV_8UC1,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(image.data());
    Ok(mat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::infrastructure::cascade_loader;
    use crate::shared::constants::FACE_CASCADE_FILE;

    #[test]
    fn test_to_mat_copies_pixels() {
        let data: Vec<u8> = (0..16).collect();
        let gray = Grayscale::new(data.clone(), 4, 4);
        let mat = to_mat(&gray).unwrap();
        assert_eq!(mat.rows(), 4);
        assert_eq!(mat.cols(), 4);
        assert_eq!(mat.data_bytes().unwrap(), &data[..]);
    }

    #[test]
    fn test_flat_image_yields_no_detections() {
        // Skip on machines without the OpenCV data package installed.
        let Ok(path) = cascade_loader::resolve(FACE_CASCADE_FILE, None) else {
            return;
        };
        let classifier = cascade_loader::load(&path).unwrap();
        let mut detector = HaarCascadeDetector::new(classifier);

        let gray = Grayscale::new(vec![128; 64 * 64], 64, 64);
        let regions = detector.detect(&gray, &DetectParams::FACE).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_empty_image_short_circuits() {
        let Ok(path) = cascade_loader::resolve(FACE_CASCADE_FILE, None) else {
            return;
        };
        let classifier = cascade_loader::load(&path).unwrap();
        let mut detector = HaarCascadeDetector::new(classifier);

        let gray = Grayscale::new(Vec::new(), 0, 0);
        let regions = detector.detect(&gray, &DetectParams::MOUTH).unwrap();
        assert!(regions.is_empty());
    }
}
