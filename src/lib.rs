//! `radarplot` draws radar (spider) charts: one polygon per series over a
//! polar grid of spokes and rings, written to SVG or PNG.

/// The radarplot Command Line Interface.
pub mod cli;

/// YAML plot configuration.
pub mod config;

/// Error types.
pub mod error;

/// Generate a plot.
pub mod plot;

/// Command dispatch.
pub mod run;

/// Utility functions.
pub mod utils;
