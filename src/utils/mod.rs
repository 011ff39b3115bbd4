//! Console output helpers

pub mod display;
pub mod logger;

pub use display::{Color, ColorOutput, GridFormatter};
pub use logger::ConsoleLogger;
