//! Techradar - deterministic placement and rendering of technology radars.
//!
//! Loading, validation, layout, and SVG rendering for radar documents. A
//! radar is a circle split into concentric rings and four quadrants, plus a
//! full-circle core ring; every item becomes a dot placed so that dots in the
//! same bucket never overlap.

pub mod config;
pub mod document;
pub mod export;
pub mod layout;
pub mod overrides;
pub mod session;
pub mod validate;

mod error;

pub use techradar_core::{color, geometry, semantic};

pub use error::RadarError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use config::AppConfig;
use document::RadarDocument;
use export::Exporter;
use layout::{EngineBuilder, RadarGeometry, RadarLayout};
use semantic::Radar;

/// Builder for loading, laying out and rendering radars.
///
/// # Examples
///
/// ```rust,no_run
/// use techradar::{RadarBuilder, config::AppConfig};
///
/// let builder = RadarBuilder::new(AppConfig::default());
///
/// // Load and validate a document together with its narrative file
/// let radar = builder.load("data/earth/radar.config.json")
///     .expect("Failed to load");
///
/// // Render to SVG
/// let svg = builder.render_svg(&radar)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = RadarBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct RadarBuilder {
    config: AppConfig,
}

impl RadarBuilder {
    /// Create a new radar builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a radar document from `path`.
    ///
    /// If the document names a `textFile`, it is read relative to the
    /// document's directory and used as the narrative and override source.
    ///
    /// # Errors
    ///
    /// Returns `RadarError` if a file cannot be read, the document is not
    /// valid JSON, or validation rejects it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Radar, RadarError> {
        let path = path.as_ref();
        info!(path:? = path; "Loading radar document");

        let json =
            fs::read_to_string(path).map_err(|err| RadarError::new_read_error(err, path))?;
        let document = RadarDocument::from_json(&json)
            .map_err(|err| RadarError::new_json_error(err, json.as_str()))?;

        let story = match document.text_file.as_deref() {
            Some(text_file) => {
                let text_path = path
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(text_file);
                debug!(text_path:? = text_path; "Loading narrative text");
                fs::read_to_string(&text_path)
                    .map_err(|err| RadarError::new_read_error(err, text_path))?
            }
            None => String::new(),
        };

        self.build(&document, &story)
    }

    /// Parse and validate a radar document given as JSON text.
    ///
    /// `story_markdown` stands in for the narrative file; pass `""` when
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns `RadarError` for malformed JSON or validation failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use techradar::RadarBuilder;
    ///
    /// let json = r#"{ "rings": [{ "name": "Core" }, { "name": "Adopt" }] }"#;
    /// let radar = RadarBuilder::default().parse(json, "").unwrap();
    /// assert_eq!(radar.rings().len(), 2);
    /// assert!(radar.items().is_empty());
    /// ```
    pub fn parse(&self, json: &str, story_markdown: &str) -> Result<Radar, RadarError> {
        let document =
            RadarDocument::from_json(json).map_err(|err| RadarError::new_json_error(err, json))?;
        self.build(&document, story_markdown)
    }

    fn build(&self, document: &RadarDocument, story: &str) -> Result<Radar, RadarError> {
        let radar = validate::build_radar(document, story, self.config.style())?;
        info!(items_count = radar.items().len(); "Radar document loaded");
        trace!(radar:?; "Validated radar");
        Ok(radar)
    }

    /// Compute dot positions for every item of `radar`.
    ///
    /// The result borrows the radar's items; it never fails.
    pub fn layout<'a>(&self, radar: &'a Radar) -> RadarLayout<'a> {
        let layout_config = self.config.layout();
        let geometry = RadarGeometry::for_rings(layout_config, radar.rings().len());
        let engine = EngineBuilder::from_config(layout_config).build();
        engine.calculate(radar.items(), geometry)
    }

    /// Render a radar to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `RadarError` if a configured style color cannot be parsed.
    pub fn render_svg(&self, radar: &Radar) -> Result<String, RadarError> {
        let layout = self.layout(radar);
        info!(placed_count = layout.len(); "Layout calculated");

        let exporter = self.svg_exporter("");
        let doc = exporter.render_radar(radar, &layout)?;

        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Render a radar and write the SVG to `output`.
    ///
    /// # Errors
    ///
    /// Returns `RadarError` if rendering fails or the file cannot be written.
    pub fn export_svg(&self, radar: &Radar, output: &str) -> Result<(), RadarError> {
        let layout = self.layout(radar);
        let mut exporter = self.svg_exporter(output);
        exporter.export_layout(radar, &layout)?;
        Ok(())
    }

    fn svg_exporter(&self, file_name: &str) -> export::svg::Svg {
        export::svg::Svg::new(
            file_name,
            self.config.layout().clone(),
            self.config.style().clone(),
        )
    }
}
