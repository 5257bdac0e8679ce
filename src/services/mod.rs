// Service module exports

pub mod classification;
pub mod config;
pub mod logo;
pub mod overrides;
pub mod palette;
pub mod pipeline;
pub mod source;
