pub mod cascade_loader;
pub mod haar_cascade_detector;
