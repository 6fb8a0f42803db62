//! Configuration types for radar layout and rendering.
//!
//! This module provides configuration structures that control how radars
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Sizing constants consumed by the placement engine.
//! - [`StyleConfig`] - Colors and opacity used by the SVG renderer.
//!
//! Every field is optional; missing fields take the default radar geometry.
//!
//! # Example
//!
//! ```
//! # use techradar::config::AppConfig;
//! let config: AppConfig = toml::from_str("[layout]\ndot_radius = 10.0").unwrap_or_default();
//! assert!(config.style().core_color().is_ok());
//! ```

use serde::Deserialize;

use techradar_core::color::{Color, ColorError};

/// Palette used for quadrants whose document does not specify a color.
pub const FALLBACK_QUADRANT_COLORS: [&str; 4] = ["#3b82f6", "#14b8a6", "#a855f7", "#f97316"];

/// Color of the core area when neither the core ring nor the config specify one.
pub const FALLBACK_CORE_COLOR: &str = "#0f766e";

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Sizing constants for the radar geometry.
///
/// Distances are in diagram units (SVG user units), angles in radians.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Edge length of the square diagram; the center sits at half of it.
    diagram_size: f32,
    /// Radius of the outermost ring boundary.
    outer_radius: f32,
    /// Rendered radius of one item dot.
    dot_radius: f32,
    /// Minimum visual gap between two neighbouring dots.
    dot_gap: f32,
    /// Angular margin kept clear on both sides of every axis line.
    axis_padding: f32,
    /// Angular margin kept clear on both sides of the top axis for ring labels.
    top_label_gap: f32,
    /// Radial margin between a ring boundary and the nearest dot row.
    ring_inset: f32,
    /// Extra radial margin added to every ring inset.
    ring_edge_padding: f32,
    /// Innermost radius a core dot may use, keeping the core label readable.
    core_label_safe_radius: f32,
    /// Core buckets with more items than this are split into at least two rows.
    core_multi_row_threshold: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            diagram_size: 980.0,
            outer_radius: 485.0,
            dot_radius: 12.5,
            dot_gap: 8.0,
            axis_padding: 0.29,
            top_label_gap: 0.44,
            ring_inset: 22.0,
            ring_edge_padding: 6.0,
            core_label_safe_radius: 46.0,
            core_multi_row_threshold: 8,
        }
    }
}

impl LayoutConfig {
    pub fn diagram_size(&self) -> f32 {
        self.diagram_size
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    pub fn dot_gap(&self) -> f32 {
        self.dot_gap
    }

    pub fn axis_padding(&self) -> f32 {
        self.axis_padding
    }

    pub fn top_label_gap(&self) -> f32 {
        self.top_label_gap
    }

    pub fn ring_inset(&self) -> f32 {
        self.ring_inset
    }

    pub fn ring_edge_padding(&self) -> f32 {
        self.ring_edge_padding
    }

    pub fn core_label_safe_radius(&self) -> f32 {
        self.core_label_safe_radius
    }

    pub fn core_multi_row_threshold(&self) -> usize {
        self.core_multi_row_threshold
    }

    /// Minimum center-to-center distance between two dots on the same row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use techradar::config::LayoutConfig;
    /// assert_eq!(LayoutConfig::default().min_spacing(), 33.0);
    /// ```
    pub fn min_spacing(&self) -> f32 {
        self.dot_radius * 2.0 + self.dot_gap
    }

    /// Returns a copy with a different dot radius.
    pub fn with_dot_radius(mut self, dot_radius: f32) -> Self {
        self.dot_radius = dot_radius;
        self
    }

    /// Returns a copy with a different outer radius.
    pub fn with_outer_radius(mut self, outer_radius: f32) -> Self {
        self.outer_radius = outer_radius;
        self
    }
}

/// Visual styling configuration for rendered radars.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color for the diagram, as a color string.
    background_color: Option<String>,
    /// Fill opacity of dots in the outermost ring.
    min_ring_opacity: f32,
    /// Core area color used when the core ring has none.
    core_color: String,
    /// Quadrant colors used when a quadrant document has none.
    quadrant_colors: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            min_ring_opacity: 0.2,
            core_color: FALLBACK_CORE_COLOR.to_string(),
            quadrant_colors: FALLBACK_QUADRANT_COLORS.map(String::from).to_vec(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, ColorError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
    }

    pub fn min_ring_opacity(&self) -> f32 {
        self.min_ring_opacity
    }

    /// Returns the fallback core color.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn core_color(&self) -> Result<Color, ColorError> {
        Color::new(&self.core_color)
    }

    /// Returns the fallback color for the quadrant at `index`, cycling through the palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected color string cannot be parsed.
    pub fn quadrant_color(&self, index: usize) -> Result<Color, ColorError> {
        match self.quadrant_colors.len() {
            0 => Color::new(FALLBACK_QUADRANT_COLORS[index % FALLBACK_QUADRANT_COLORS.len()]),
            len => Color::new(&self.quadrant_colors[index % len]),
        }
    }
}
