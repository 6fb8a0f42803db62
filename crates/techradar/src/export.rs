//! Export of laid-out radars.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a [`Radar`] and its [`RadarLayout`] into an output format. It is
//! the final stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! radar.config.json (+ narrative markdown)
//!     ↓ validate
//! Radar
//!     ↓ layout
//! RadarLayout
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — SVG output via [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`RadarError::Export`] at the crate
//! boundary.
//!
//! [`RadarError::Export`]: crate::RadarError::Export

/// SVG export backend.
pub mod svg;

use techradar_core::semantic::Radar;

use crate::layout::RadarLayout;

/// Abstraction for radar export backends.
pub trait Exporter {
    /// Exports a placed radar to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the radar cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&mut self, radar: &Radar, layout: &RadarLayout<'_>) -> Result<(), Error>;
}

/// Errors that can occur during radar export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
