pub mod buffer;
pub mod registry;
pub mod render;
