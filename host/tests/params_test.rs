// Tests for resolving, reporting and verifying parameter sets
// Override fixtures live in tests/data
use bounce_core::{constants, Preset, SimParams};
use host::{
    build_report, default_report_filename, load_override, load_report, resolve_params,
    save_report, verify_report, MAX_CONFIG_SIZE,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bounce-host-{}-{}", std::process::id(), name))
}

#[test]
fn test_resolve_preset_without_config() {
    let params = resolve_params(Preset::Classic, None).expect("classic preset should resolve");
    assert_eq!(params, SimParams::default());
    assert_eq!(params.max_x(), constants::MAX_X);
    assert_eq!(params.max_y(), constants::MAX_Y);
}

#[test]
fn test_resolve_with_override_file() {
    let params = resolve_params(Preset::Wide, Some(fixture("wide-heavy.json").as_path()))
        .expect("override should resolve");

    assert_eq!(params.gravity, 0.2);
    assert_eq!(params.friction, 0.99);
    assert_eq!(params.target_ball_c, 5000);

    // Untouched fields keep the preset's values
    assert_eq!(params.width, constants::legacy::WIDTH);
    assert_eq!(params.ball_diam, constants::legacy::BALL_DIAM);
    assert_eq!(params.wall_force, constants::WALL_FORCE);
}

#[test]
fn test_invalid_override_is_rejected() {
    let err = resolve_params(Preset::Classic, Some(fixture("invalid-friction.json").as_path()))
        .expect_err("friction above 1 should be rejected");
    let msg = err.to_string();
    assert!(msg.contains("coll_friction"), "unexpected error: {}", msg);
}

#[test]
fn test_unknown_fields_are_rejected() {
    let err = load_override(&fixture("unknown-field.json"))
        .expect_err("misspelled field should be rejected");
    assert!(err.to_string().contains("ballDiam"), "unexpected error: {}", err);
}

#[test]
fn test_missing_config_is_reported() {
    let err = resolve_params(Preset::Classic, Some(fixture("does-not-exist.json").as_path()))
        .expect_err("missing file should fail");
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn test_oversized_config_is_rejected() {
    let path = scratch_file("oversized.json");
    let padding = " ".repeat(MAX_CONFIG_SIZE as usize + 1);
    std::fs::write(&path, format!("{{{}}}", padding)).unwrap();

    let err = load_override(&path).expect_err("oversized config should be rejected");
    assert!(err.to_string().contains("too large"), "unexpected error: {}", err);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_report_contents() {
    let params = SimParams::preset(Preset::Wide);
    let report = build_report(Preset::Wide, &params);

    assert_eq!(report.preset, Preset::Wide);
    assert_eq!(report.derived.max_x, 1364.0);
    assert_eq!(report.derived.max_y, 766.0);
    assert_eq!(report.derived.ball_rad, 1.0);
    assert_eq!(report.derived.tile_height, 48.0);
    assert_eq!(report.fingerprint.len(), 64);
    assert!(report.generated_at.contains('T'));
    assert!(verify_report(&report).is_ok());
}

#[test]
fn test_saved_report_verifies() {
    let path = scratch_file("report.json");
    let params = resolve_params(Preset::Classic, Some(fixture("wide-heavy.json").as_path())).unwrap();
    let report = build_report(Preset::Classic, &params);

    save_report(&report, &path).expect("save should succeed");
    let loaded = load_report(&path).expect("load should succeed");

    assert_eq!(loaded.params, report.params);
    assert_eq!(loaded.fingerprint, report.fingerprint);
    assert!(verify_report(&loaded).is_ok());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_tampered_report_fails_verification() {
    let mut report = build_report(Preset::Classic, &SimParams::default());
    report.params.gravity = 0.5;

    let err = verify_report(&report).expect_err("edited params should not verify");
    assert!(err.to_string().contains("Fingerprint mismatch"));
}

#[test]
fn test_tampered_derived_values_fail_verification() {
    let mut report = build_report(Preset::Classic, &SimParams::default());
    report.derived.max_x = 800.0;

    assert!(verify_report(&report).is_err());
}

#[test]
fn test_default_report_filename() {
    assert_eq!(
        default_report_filename(Preset::Wide, 1_700_000_000),
        "bounce-params_wide_1700000000.json"
    );
}

#[test]
fn test_extent_beyond_fixed_range_is_rejected() {
    let err = resolve_params(Preset::Classic, Some(fixture("too-wide.json").as_path()))
        .expect_err("1e15 width should be rejected");
    let msg = err.to_string();
    assert!(msg.contains("width"), "unexpected error: {}", msg);

    // A report built around the check still fails verification
    let params = SimParams {
        width: 1.0e15,
        height: 1.0e15,
        ..SimParams::default()
    };
    let report = build_report(Preset::Classic, &params);
    assert!(verify_report(&report).is_err());
}
