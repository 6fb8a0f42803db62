//! CLI logic for the techradar tool.
//!
//! This module contains the core CLI logic: locate the radar document,
//! load it, lay it out and write the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::{info, warn};

use techradar::{
    RadarBuilder, RadarError,
    semantic::Radar,
    session::{Mode, Session},
};

/// Run the techradar CLI application
///
/// This function loads the radar document selected by `args` and writes the
/// rendered SVG to the output file.
///
/// # Errors
///
/// Returns `RadarError` for:
/// - Configuration loading errors
/// - File I/O errors
/// - Malformed or invalid radar documents
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), RadarError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = RadarBuilder::new(app_config);

    let mut session = Session::default();
    let Some(radar) = load_mode(&builder, &mut session, args, args.mode)? else {
        return Ok(());
    };

    builder.export_svg(&radar, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Switch `session` to `requested` and load that mode's radar.
///
/// A failed load restores the mode the session had before the switch.
/// Returns `Ok(None)` when the load was superseded by a newer one.
fn load_mode(
    builder: &RadarBuilder,
    session: &mut Session,
    args: &Args,
    requested: Mode,
) -> Result<Option<Radar>, RadarError> {
    let previous = session.mode();
    if requested != previous {
        session.toggle_mode();
    }

    let input_path = args.document_path(session.mode());
    info!(
        mode = session.mode().word(),
        input_path:? = input_path,
        output_path = args.output;
        "Processing radar"
    );

    let ticket = session.begin_load();
    let radar = match builder.load(&input_path) {
        Ok(radar) => radar,
        Err(err) => {
            session.fail_load(ticket, previous);
            return Err(err);
        }
    };
    if !session.finish_load(ticket) {
        warn!("Radar load was superseded, skipping export");
        return Ok(None);
    }

    Ok(Some(radar))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    const EMPTY_RADAR: &str = r#"{ "rings": [{ "name": "Core" }, { "name": "Adopt" }] }"#;

    fn args_for(data_root: &std::path::Path) -> Args {
        let data_root = data_root.to_string_lossy().to_string();
        Args::parse_from(["techradar", "--data-root", data_root.as_str()])
    }

    #[test]
    fn test_switching_mode_loads_its_document() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("space")).unwrap();
        fs::write(dir.path().join("space/radar.config.json"), EMPTY_RADAR).unwrap();

        let mut session = Session::default();
        let args = args_for(dir.path());
        let radar = load_mode(&RadarBuilder::default(), &mut session, &args, Mode::Space)
            .unwrap()
            .expect("load is current");

        assert_eq!(radar.rings().len(), 2);
        assert_eq!(session.mode(), Mode::Space);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_failed_switch_restores_previous_mode() {
        let dir = tempdir().unwrap();

        let mut session = Session::default();
        let args = args_for(dir.path());
        let result = load_mode(&RadarBuilder::default(), &mut session, &args, Mode::Space);

        assert!(matches!(result, Err(RadarError::Read { .. })));
        assert_eq!(session.mode(), Mode::Earth);
        assert!(!session.is_loading());
    }
}
