use log::debug;

use crate::detection::domain::detect_params::DetectParams;
use crate::detection::domain::region_detector::RegionDetector;
use crate::overlay::{draw, font};
use crate::pipeline::feedback::Feedback;
use crate::pipeline::mean_color;
use crate::shared::constants::{LABEL_COLOR, LABEL_ORIGIN, MOUTH_BOX_COLOR, MOUTH_BOX_THICKNESS};
use crate::shared::frame::Frame;
use crate::shared::grayscale::Grayscale;

/// Runs the two-stage detection over one frame and draws the overlay.
///
/// Faces are found on the full grayscale image; mouths on a crop of
/// each face's lower half, then mapped back to frame coordinates. The
/// mouth mean is sampled after its rectangle is drawn, so the stroke
/// is part of the recorded color.
pub struct FrameAnalyzer {
    face_detector: Box<dyn RegionDetector>,
    mouth_detector: Box<dyn RegionDetector>,
}

impl FrameAnalyzer {
    pub fn new(
        face_detector: Box<dyn RegionDetector>,
        mouth_detector: Box<dyn RegionDetector>,
    ) -> Self {
        Self {
            face_detector,
            mouth_detector,
        }
    }

    pub fn analyze(
        &mut self,
        frame: &mut Frame,
        feedback: &mut Feedback,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let gray = Grayscale::from_frame(frame);
        let faces = self.face_detector.detect(&gray, &DetectParams::FACE)?;

        let mut mouth_boxes = 0usize;
        for face in &faces {
            let band = face.lower_half();
            let Some(crop) = gray.crop(&band) else {
                continue;
            };
            let mouths = self.mouth_detector.detect(&crop, &DetectParams::MOUTH)?;
            for mouth in &mouths {
                // Crop coordinates use the unclamped band origin, the
                // same origin the crop itself was taken from.
                let placed = mouth.translated(band.x, band.y);
                draw::stroke_rect(frame, &placed, MOUTH_BOX_COLOR, MOUTH_BOX_THICKNESS);

                let clamped = placed.clamped_to(frame.width(), frame.height());
                if clamped.is_empty() {
                    continue;
                }
                feedback.record(mean_color::region_mean(frame, &clamped));
                mouth_boxes += 1;

                if let Some(label) = feedback.label() {
                    let (lx, ly) = LABEL_ORIGIN;
                    font::draw_text(frame, lx, ly, &label, LABEL_COLOR, font::LABEL_SCALE);
                }
            }
        }
        debug!(
            "frame {}: {} face(s), {} mouth box(es)",
            frame.index(),
            faces.len(),
            mouth_boxes
        );
        Ok(())
    }
}
