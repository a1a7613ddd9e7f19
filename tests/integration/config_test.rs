use frametrail::config::{load_config_from, ConfigBuilder, ConfigSource, FileConfig};
use frametrail::output::{create_formatter, write_report, FileWriter};
use frametrail::{context_error, RenderSettings, TrailError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_settings_file_drives_reports() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("frametrail.toml");
    fs::write(&config_path, "indent = 1\nmax_child_frames = 1\n").unwrap();

    let settings = load_config_from(&config_path).unwrap();
    assert_eq!(settings.indent, 1);

    let mut err = context_error!("outer");
    err.merge(context_error!("middle"));
    err.merge(context_error!("inner"));

    let report = create_formatter(&settings).format(&err);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with(" config_test.rs:"));
    assert_eq!(lines[2], " ... 1 more frame");

    let log_path = temp_dir.path().join("errors.log");
    write_report(&err, &settings, &FileWriter::new(&log_path)).unwrap();
    assert_eq!(fs::read_to_string(&log_path).unwrap(), format!("{}\n", report));
}

#[test]
fn test_invalid_settings_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("frametrail.toml");
    fs::write(&config_path, "indent = 99\n").unwrap();

    let result = load_config_from(&config_path);
    assert!(matches!(result, Err(TrailError::Config { .. })));
}

#[test]
fn test_default_file_created_and_loaded() {
    let temp_dir = tempdir().unwrap();
    let source = FileConfig::with_path(temp_dir.path().join("frametrail.toml"));
    assert!(!source.is_available());

    source.create_default().unwrap();
    let settings = ConfigBuilder::new().load_from(&source).unwrap().build().unwrap();
    assert_eq!(settings, RenderSettings::default());
}
