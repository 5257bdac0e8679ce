// Module exports for models

pub mod color;
pub mod event;
