use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Fill the part of `region` that lies inside the frame with a solid
/// BGR color.
pub fn fill_rect(frame: &mut Frame, region: &Region, color: [u8; 3]) {
    let clamped = region.clamped_to(frame.width(), frame.height());
    if clamped.is_empty() {
        return;
    }
    let (rx, ry) = (clamped.x as usize, clamped.y as usize);
    let (rw, rh) = (clamped.width as usize, clamped.height as usize);
    let fw = frame.width() as usize;
    let data = frame.data_mut();

    for row in 0..rh {
        for col in 0..rw {
            let idx = ((ry + row) * fw + rx + col) * Frame::CHANNELS;
            data[idx..idx + 3].copy_from_slice(&color);
        }
    }
}

/// Stroke `region`'s border with bands `thickness` pixels deep, drawn
/// inward from each edge. On a box smaller than twice the thickness
/// the bands overlap and the box comes out solid.
pub fn stroke_rect(frame: &mut Frame, region: &Region, color: [u8; 3], thickness: usize) {
    if region.is_empty() {
        return;
    }
    let t = thickness as i32;
    let top = Region::new(region.x, region.y, region.width, t);
    let bottom = Region::new(region.x, region.y + region.height - t, region.width, t);
    let left = Region::new(region.x, region.y, t, region.height);
    let right = Region::new(region.x + region.width - t, region.y, t, region.height);
    fill_rect(frame, &top, color);
    fill_rect(frame, &bottom, color);
    fill_rect(frame, &left, color);
    fill_rect(frame, &right, color);
}
