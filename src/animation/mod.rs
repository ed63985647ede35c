pub mod ease;
pub mod engine;
pub mod timeline;
