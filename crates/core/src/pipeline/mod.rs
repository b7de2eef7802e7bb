pub mod feedback;
pub mod frame_analyzer;
pub mod live_feedback_use_case;
pub mod mean_color;
