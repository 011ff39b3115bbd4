//! Configuration management for the bounded Game of Life

pub mod settings;

pub use settings::{
    CliOverrides, DisplayStyle, GridConfig, OutputConfig, OutputFormat, PlaybackConfig, Settings,
};
