pub mod detect_params;
pub mod region_detector;
