pub mod lock;
pub mod pipeline;
pub mod reveal;
