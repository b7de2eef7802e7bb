pub mod capture;
pub mod detection;
pub mod display;
pub mod overlay;
pub mod pipeline;
pub mod shared;
