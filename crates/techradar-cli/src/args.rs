//! Command-line argument definitions for the techradar CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control which radar document is read, where
//! the SVG is written, configuration file selection, and logging verbosity.

use std::path::PathBuf;

use clap::Parser;

use techradar::session::Mode;

/// Command-line arguments for the techradar tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the radar document; defaults to the selected mode's document
    #[arg(help = "Path to the radar document (radar.config.json)")]
    pub input: Option<String>,

    /// Data set to render when no input path is given (earth, space)
    #[arg(short, long, default_value = "earth")]
    pub mode: Mode,

    /// Directory holding one sub-directory per mode
    #[arg(long, default_value = "data")]
    pub data_root: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "radar.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The radar document to read: the explicit input, or the document of
    /// `mode` under the data root.
    pub fn document_path(&self, mode: Mode) -> PathBuf {
        match &self.input {
            Some(input) => PathBuf::from(input),
            None => mode.document_path(self.data_root.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["techradar"]);
        assert_eq!(args.mode, Mode::Earth);
        assert_eq!(args.output, "radar.svg");
        assert_eq!(
            args.document_path(args.mode),
            Path::new("data/earth/radar.config.json")
        );
    }

    #[test]
    fn test_mode_and_data_root() {
        let args = Args::parse_from(["techradar", "--mode", "space", "--data-root", "public"]);
        assert_eq!(
            args.document_path(args.mode),
            Path::new("public/space/radar.config.json")
        );
    }

    #[test]
    fn test_explicit_input_wins() {
        let args = Args::parse_from(["techradar", "radar.json", "--mode", "space"]);
        assert_eq!(args.document_path(args.mode), Path::new("radar.json"));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["techradar", "--mode", "mars"]).is_err());
    }
}
