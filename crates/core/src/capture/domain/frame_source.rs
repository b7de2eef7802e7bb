use crate::shared::frame::Frame;

/// Ordered source of BGR frames.
///
/// `None` means the stream ended; that is the normal way a source
/// winds down, not an error. A source that hits a transient decode
/// problem may log it and return `None` to stop the run cleanly.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Frame>;

    /// Dimensions frames will arrive in, `(width, height)`.
    fn dimensions(&self) -> (u32, u32);
}
