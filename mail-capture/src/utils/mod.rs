pub mod constants;
pub mod telemetry;

pub use constants::*;
pub use telemetry::*;
