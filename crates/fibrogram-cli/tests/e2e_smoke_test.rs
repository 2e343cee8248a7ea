use std::fs;

use tempfile::tempdir;

use fibrogram::figures::Figure;
use fibrogram_cli::{Args, run};

#[test]
fn e2e_smoke_test_all_figures() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed_figures = Vec::new();

    for figure in Figure::all() {
        let output_path = temp_dir.path().join(format!("{figure}.svg"));

        let args = Args {
            figure: figure.name().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if let Err(e) = run(&args) {
            failed_figures.push((figure, e));
            continue;
        }

        let svg = fs::read_to_string(&output_path).expect("output file should exist");
        assert!(svg.contains("<svg"), "{figure} output is not SVG");
        assert!(svg.contains("class=\"node\""), "{figure} has no markers");
    }

    if !failed_figures.is_empty() {
        eprintln!("\nFigures that failed:");
        for (figure, err) in &failed_figures {
            eprintln!("  - {figure}: {err}");
        }
        panic!("{} figure(s) failed unexpectedly", failed_figures.len());
    }
}

#[test]
fn e2e_smoke_test_unknown_figure_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("unknown.svg");

    let args = Args {
        figure: "figure9".to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    let err = run(&args).expect_err("unknown figure should not render");
    assert!(err.to_string().contains("unknown figure `figure9`"));
    assert!(!output_path.exists(), "no output should be written on failure");
}

#[test]
fn e2e_smoke_test_config_overrides_apply() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nbackground_color = \"white\"\n").unwrap();

    let output_path = temp_dir.path().join("cascade.svg");
    let args = Args {
        figure: "cascade".to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    run(&args).expect("cascade with config should render");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("fill=\"white\""));
}
