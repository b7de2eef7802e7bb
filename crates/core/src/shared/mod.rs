pub mod constants;
pub mod frame;
pub mod grayscale;
pub mod region;
