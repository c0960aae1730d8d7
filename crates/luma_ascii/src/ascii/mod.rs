pub mod builder;
pub mod grid;
pub mod luminosity;
pub mod mapping;
pub mod palette;
pub mod render;
