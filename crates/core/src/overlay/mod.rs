pub mod draw;
pub mod font;
