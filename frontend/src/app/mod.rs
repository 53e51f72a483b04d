pub mod pipeline;
pub mod viewer;
