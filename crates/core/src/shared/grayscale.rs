use super::frame::Frame;
use super::region::Region;

// BT.601 luma weights, matching what OpenCV uses for BGR input.
const LUMA_B: f32 = 0.114;
const LUMA_G: f32 = 0.587;
const LUMA_R: f32 = 0.299;

/// Single-channel 8-bit image derived from a BGR frame.
///
/// Detection runs on grayscale; the color frame stays untouched so the
/// overlay and mean-color sampling still see the original pixels.
#[derive(Clone, Debug)]
pub struct Grayscale {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Grayscale {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "data length must equal width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// BT.601 weighted conversion with rounding, one byte per pixel.
    pub fn from_frame(frame: &Frame) -> Self {
        let mut data = Vec::with_capacity((frame.width() as usize) * (frame.height() as usize));
        for pixel in frame.data().chunks_exact(Frame::CHANNELS) {
            let luma = LUMA_B * pixel[0] as f32 + LUMA_G * pixel[1] as f32 + LUMA_R * pixel[2] as f32;
            data.push(luma.round() as u8);
        }
        Self::new(data, frame.width(), frame.height())
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copy of the part of `region` that falls inside this image, or
    /// `None` when nothing does.
    pub fn crop(&self, region: &Region) -> Option<Grayscale> {
        let clamped = region.clamped_to(self.width, self.height);
        if clamped.is_empty() {
            return None;
        }
        let (rx, ry) = (clamped.x as usize, clamped.y as usize);
        let (rw, rh) = (clamped.width as usize, clamped.height as usize);
        let stride = self.width as usize;

        let mut data = Vec::with_capacity(rw * rh);
        for row in 0..rh {
            let start = (ry + row) * stride + rx;
            data.extend_from_slice(&self.data[start..start + rw]);
        }
        Some(Grayscale::new(data, rw as u32, rh as u32))
    }
}
