pub mod error;
pub mod fiber;
pub mod math;
pub mod topology;
pub mod weave;

pub use error::{Result, WaterlineError};
