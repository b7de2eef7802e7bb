use crate::shared::constants::NO_DETECTION_MESSAGE;

/// Latest mouth mean color, kept across frames.
///
/// Each detection overwrites the previous value; frames without a
/// detection leave it alone, so the feedback always reflects the most
/// recent mouth seen since startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feedback {
    mean_bgr: Option<[f64; 3]>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mean_bgr: [f64; 3]) {
        self.mean_bgr = Some(mean_bgr);
    }

    pub fn is_set(&self) -> bool {
        self.mean_bgr.is_some()
    }

    pub fn mean_bgr(&self) -> Option<[f64; 3]> {
        self.mean_bgr
    }

    /// On-frame label, RGB order with the fraction truncated.
    pub fn label(&self) -> Option<String> {
        self.mean_bgr.map(|[b, g, r]| {
            format!("R: {} G: {} B: {}", r as i64, g as i64, b as i64)
        })
    }

    /// Console line for a feedback request; a fixed notice when nothing
    /// has been detected yet.
    pub fn console_line(&self) -> String {
        match self.mean_bgr {
            Some([b, g, r]) => format!(
                "Cor média da boca detectada - R: {}, G: {}, B: {}",
                r as i64, g as i64, b as i64
            ),
            None => NO_DETECTION_MESSAGE.to_string(),
        }
    }
}
