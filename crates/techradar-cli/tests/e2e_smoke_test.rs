use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use techradar::session::Mode;
use techradar_cli::Args;

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: Option<String>, mode: Mode, output: &Path) -> Args {
    Args {
        input,
        mode,
        data_root: demos_dir().to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_modes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for mode in [Mode::Earth, Mode::Space] {
        let output_path = temp_dir.path().join(format!("{mode}.svg"));

        if let Err(e) = techradar_cli::run(&args(None, mode, &output_path)) {
            panic!("Mode {mode} failed: {e}");
        }

        let svg = fs::read_to_string(&output_path).expect("Output should exist");
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("class=\"blip\""), "Output should contain dots");
        assert!(svg.contains("CORE"), "Output should label the core ring");
    }
}

#[test]
fn e2e_smoke_test_explicit_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("explicit.svg");
    let input = demos_dir().join("earth").join("radar.config.json");

    let cfg = args(
        Some(input.to_string_lossy().to_string()),
        Mode::Space,
        &output_path,
    );
    techradar_cli::run(&cfg).expect("Explicit input should render");

    // The explicit document wins over the mode.
    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("GDAL"));
}

#[test]
fn e2e_smoke_test_missing_document() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("missing.svg");

    let mut cfg = args(None, Mode::Earth, &output_path);
    cfg.data_root = temp_dir.path().to_string_lossy().to_string();

    assert!(techradar_cli::run(&cfg).is_err());
    assert!(!output_path.exists());
}

#[test]
fn e2e_smoke_test_error_examples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_examples = collect_json_files(demos_dir().join("errors"));

    assert!(
        !error_examples.is_empty(),
        "No error examples found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for example_path in &error_examples {
        let output_filename = format!(
            "error_{}.svg",
            example_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let cfg = args(
            Some(example_path.to_string_lossy().to_string()),
            Mode::Earth,
            &output_path,
        );

        if techradar_cli::run(&cfg).is_ok() {
            unexpectedly_succeeded.push(example_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError examples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error example(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "All {} error examples failed as expected",
        error_examples.len()
    );
}
