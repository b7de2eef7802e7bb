/// Tuning knobs for a multi-scale cascade sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectParams {
    /// Pyramid step between scales; 1.1 shrinks the image 10% per level.
    pub scale_factor: f64,
    /// Overlapping candidate count a hit must collect to survive.
    pub min_neighbors: i32,
    /// Smallest accepted box edge, in pixels.
    pub min_size: u32,
}

impl DetectParams {
    /// Full-frame face sweep.
    pub const FACE: DetectParams = DetectParams {
        scale_factor: 1.1,
        min_neighbors: 5,
        min_size: 30,
    };

    /// Mouth sweep inside a face band. The smile cascade fires easily,
    /// so it needs a much stricter neighbor count than the face pass.
    pub const MOUTH: DetectParams = DetectParams {
        scale_factor: 1.1,
        min_neighbors: 10,
        min_size: 30,
    };
}
