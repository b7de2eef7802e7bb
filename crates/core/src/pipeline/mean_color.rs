use ndarray::s;

use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Per-channel mean of a frame region, BGR order.
///
/// The caller hands in a region already clamped to the frame; the mean
/// is taken over the pixels as they are at call time, overlay included.
pub fn region_mean(frame: &Frame, region: &Region) -> [f64; 3] {
    debug_assert!(!region.is_empty(), "mean of an empty region");
    let (rx, ry) = (region.x as usize, region.y as usize);
    let (rw, rh) = (region.width as usize, region.height as usize);

    let src = frame.as_ndarray();
    let roi = src.slice(s![ry..ry + rh, rx..rx + rw, ..]);

    let mut sums = [0.0f64; 3];
    for row in 0..rh {
        for col in 0..rw {
            for (c, sum) in sums.iter_mut().enumerate() {
                *sum += roi[[row, col, c]] as f64;
            }
        }
    }
    let count = (rw * rh) as f64;
    [sums[0] / count, sums[1] / count, sums[2] / count]
}
