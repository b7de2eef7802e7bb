use log::{info, warn};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType, Resolution};
use nokhwa::Camera;
use thiserror::Error;

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum CameraOpenError {
    #[error("failed to open camera {index}: {source}")]
    Open {
        index: u32,
        #[source]
        source: nokhwa::NokhwaError,
    },
    #[error("failed to start stream on camera {index}: {source}")]
    Stream {
        index: u32,
        #[source]
        source: nokhwa::NokhwaError,
    },
}

/// Webcam frame source backed by nokhwa.
///
/// Frames are decoded to RGB by the backend and repacked as BGR here,
/// so everything downstream sees one channel order. The stream stops
/// on drop.
pub struct NokhwaCamera {
    camera: Camera,
    device_index: u32,
    resolution: Resolution,
    frame_index: usize,
}

impl NokhwaCamera {
    pub fn open(
        device_index: u32,
        width: u32,
        height: u32,
        fps: u32,
    ) -> Result<Self, CameraOpenError> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
        let mut camera = Camera::new(CameraIndex::Index(device_index), requested).map_err(|e| {
            CameraOpenError::Open {
                index: device_index,
                source: e,
            }
        })?;
        camera.open_stream().map_err(|e| CameraOpenError::Stream {
            index: device_index,
            source: e,
        })?;

        // Resolution and rate are requests, not guarantees; a driver
        // that refuses them keeps whatever it negotiated.
        if let Err(e) = camera.set_resolution(Resolution::new(width, height)) {
            warn!("Camera {device_index} refused {width}x{height}: {e}");
        }
        if let Err(e) = camera.set_frame_rate(fps) {
            warn!("Camera {device_index} refused {fps} fps: {e}");
        }

        let resolution = camera.resolution();
        info!(
            "Camera {} streaming at {}x{} @ {} fps",
            device_index,
            resolution.width(),
            resolution.height(),
            camera.frame_rate()
        );

        Ok(Self {
            camera,
            device_index,
            resolution,
            frame_index: 0,
        })
    }
}

impl FrameSource for NokhwaCamera {
    fn next_frame(&mut self) -> Option<Frame> {
        let buffer = match self.camera.frame() {
            Ok(buffer) => buffer,
            Err(e) => {
                warn!("Camera {} stopped delivering frames: {e}", self.device_index);
                return None;
            }
        };
        let decoded = match buffer.decode_image::<RgbFormat>() {
            Ok(image) => image,
            Err(e) => {
                warn!(
                    "Camera {} produced an undecodable frame: {e}",
                    self.device_index
                );
                return None;
            }
        };
        // Use the decoded dimensions, not the negotiated ones; some
        // drivers deliver a different size than they advertise.
        let (width, height) = decoded.dimensions();
        let frame = Frame::new(rgb_to_bgr(&decoded), width, height, self.frame_index);
        self.frame_index += 1;
        Some(frame)
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.resolution.width(), self.resolution.height())
    }
}

impl Drop for NokhwaCamera {
    fn drop(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            warn!("Failed to stop camera {} stream: {e}", self.device_index);
        }
    }
}

/// All cameras the backend can see, as `(index, human name)` pairs.
pub fn list_devices() -> Result<Vec<(u32, String)>, nokhwa::NokhwaError> {
    Ok(nokhwa::query(ApiBackend::Auto)?
        .iter()
        .enumerate()
        .map(|(idx, info)| (idx as u32, info.human_name().to_string()))
        .collect())
}

fn rgb_to_bgr(rgb: &[u8]) -> Vec<u8> {
    let mut bgr = Vec::with_capacity(rgb.len());
    for pixel in rgb.chunks_exact(3) {
        bgr.push(pixel[2]);
        bgr.push(pixel[1]);
        bgr.push(pixel[0]);
    }
    bgr
}
