//! SVG export backend built on the `svg` crate.

mod radar;

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::Document;

pub use radar::ring_opacity;

use crate::{
    config::{LayoutConfig, StyleConfig},
    export,
    layout::RadarLayout,
};
use techradar_core::semantic::Radar;

/// SVG exporter writing one radar per file.
#[derive(Debug, Clone)]
pub struct Svg {
    file_name: String,
    layout: LayoutConfig,
    style: StyleConfig,
}

impl Svg {
    pub fn new(file_name: &str, layout: LayoutConfig, style: StyleConfig) -> Self {
        Self {
            file_name: file_name.to_string(),
            layout,
            style,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Writes an SVG document to the configured file
    fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_layout(
        &mut self,
        radar: &Radar,
        layout: &RadarLayout<'_>,
    ) -> Result<(), export::Error> {
        let doc = self.render_radar(radar, layout)?;
        debug!("SVG document rendered");

        self.write_document(&doc)
    }
}
