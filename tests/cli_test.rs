//! End-to-end tests running the atlas-recolor binary.

mod common;

use std::error::Error as _;

use atlas_mask::{Rgba, RgbaImage};
use atlas_recolor::rendering::png_io;
use common::{fixtures, TestWorkspace};
use pretty_assertions::assert_eq;

#[test]
fn test_generate_prints_summary() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());

    let out = ws.run_cli(&["atlas.png", "Textures/Masks/purple_mask.png", "-t", "0.12"]);

    assert!(out.success, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Mask saved to"), "{}", out.stdout);
    assert!(out.stdout.contains("8 of 16 (50.00%)"), "{}", out.stdout);
    assert_eq!(
        common::selected_positions(&ws.read_image("Textures/Masks/purple_mask.png")).len(),
        8
    );
}

#[test]
fn test_generate_json_report() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());

    let out = ws.run_cli(&[
        "atlas.png",
        "mask.png",
        "--paint",
        "#FF0000",
        "--overlay-output",
        "preview.png",
        "--json",
    ]);

    assert!(out.success, "stderr: {}", out.stderr);
    let json = out.json();
    assert_eq!(json["mode"], "generate");
    assert_eq!(json["key_color"], "#A349A4");
    assert_eq!(json["tolerance"], 0.12);
    assert_eq!(json["scan"]["matched"], 8);
    assert_eq!(json["scan"]["total"], 16);
    assert_eq!(json["scan"]["min_distance"], 0.0);
    assert_eq!(json["overlay"]["paint"], "#FF0000");
    assert!(json.get("warning").is_none());
    assert!(ws.exists("preview.png"));
}

#[test]
fn test_no_matches_is_success_with_warning() {
    let ws = TestWorkspace::new();
    ws.write_image(
        "atlas.png",
        &fixtures::solid(2, 2, fixtures::PURPLE_COMPLEMENT, 255),
    );

    let out = ws.run_cli(&["atlas.png", "mask.png", "--json"]);

    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(out.json()["warning"], "no_matches");
    assert!(out.stderr.contains("No matching pixels"), "{}", out.stderr);
    assert!(ws.exists("mask.png"));
}

#[test]
fn test_apply_mask_mode() {
    let ws = TestWorkspace::new();
    let atlas = fixtures::half_purple_atlas();
    ws.write_image("atlas.png", &atlas);

    let generated = ws.run_cli(&["atlas.png", "mask.png"]);
    assert!(generated.success, "stderr: {}", generated.stderr);

    let out = ws.run_cli(&[
        "atlas.png",
        "output.png",
        "--apply-mask",
        "mask.png",
        "--paint",
        "00ff00",
        "--json",
    ]);

    assert!(out.success, "stderr: {}", out.stderr);
    let json = out.json();
    assert_eq!(json["mode"], "apply");
    assert_eq!(json["painted"], 8);
    assert_eq!(json["paint"], "#00FF00");

    let selected = common::selected_positions(&ws.read_image("mask.png"));
    common::assert_repainted(&atlas, &ws.read_image("output.png"), &selected, fixtures::GREEN);
}

#[test]
fn test_apply_mask_without_paint_fails() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());
    ws.write_image("mask.png", &RgbaImage::new(4, 4, Rgba::OPAQUE_WHITE));

    let out = ws.run_cli(&["atlas.png", "output.png", "--apply-mask", "mask.png"]);

    assert!(!out.success);
    assert!(out.stderr.contains("--paint"), "{}", out.stderr);
    assert!(!ws.exists("output.png"));
}

#[test]
fn test_dimension_mismatch_fails() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::solid(4, 4, fixtures::PURPLE, 255));
    ws.write_image("mask.png", &RgbaImage::new(2, 2, Rgba::OPAQUE_WHITE));

    let out = ws.run_cli(&[
        "atlas.png",
        "output.png",
        "--apply-mask",
        "mask.png",
        "--paint",
        "#FF0000",
    ]);

    assert!(!out.success);
    assert!(out.stderr.contains("4x4"), "{}", out.stderr);
    assert!(out.stderr.contains("2x2"), "{}", out.stderr);
    assert!(!ws.exists("output.png"));
}

#[test]
fn test_invalid_paint_fails_before_writing() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());

    let out = ws.run_cli(&[
        "atlas.png",
        "mask.png",
        "--paint",
        "ZZZZZZ",
        "--overlay-output",
        "preview.png",
    ]);

    assert!(!out.success);
    assert!(out.stderr.contains("ZZZZZZ"), "{}", out.stderr);
    assert!(!ws.exists("mask.png"));
    assert!(!ws.exists("preview.png"));
}

#[test]
fn test_short_key_color_fails() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());

    let out = ws.run_cli(&["atlas.png", "mask.png", "--key-color", "ABC"]);

    assert!(!out.success);
    assert!(out.stderr.contains("ABC"), "{}", out.stderr);
    assert!(!ws.exists("mask.png"));
}

#[test]
fn test_missing_input_fails() {
    let ws = TestWorkspace::new();

    let out = ws.run_cli(&["missing.png", "mask.png"]);

    assert!(!out.success);
    assert!(out.stderr.contains("missing.png"), "{}", out.stderr);
}

#[test]
fn test_config_presets_and_defaults() {
    let ws = TestWorkspace::new();
    let atlas = fixtures::half_purple_atlas();
    ws.write_image("atlas.png", &atlas);
    ws.write_file(
        "recolor.yaml",
        r##"
tolerance: 0.0
paints:
  team_red: "#FF0000"
"##,
    );

    let out = ws.run_cli(&[
        "atlas.png",
        "mask.png",
        "--config",
        "recolor.yaml",
        "--paint",
        "team_red",
        "--overlay-output",
        "preview.png",
        "--json",
    ]);

    assert!(out.success, "stderr: {}", out.stderr);
    let json = out.json();
    // Tolerance 0 drops the near-purple pixel
    assert_eq!(json["scan"]["matched"], 7);
    assert_eq!(json["overlay"]["paint"], "#FF0000");

    let selected = common::selected_positions(&ws.read_image("mask.png"));
    common::assert_repainted(&atlas, &ws.read_image("preview.png"), &selected, fixtures::RED);
}

#[test]
fn test_cli_tolerance_overrides_config() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());
    ws.write_file("recolor.yaml", "tolerance: 0.0\n");

    let out = ws.run_cli(&[
        "atlas.png", "mask.png", "-c", "recolor.yaml", "-t", "0.12", "--json",
    ]);

    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(out.json()["scan"]["matched"], 8);
}

#[test]
fn test_bad_config_fails() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());
    ws.write_file("recolor.yaml", "tolerence: 0.1\n");

    let out = ws.run_cli(&["atlas.png", "mask.png", "-c", "recolor.yaml"]);

    assert!(!out.success);
    assert!(out.stderr.contains("recolor.yaml"), "{}", out.stderr);
    assert!(!ws.exists("mask.png"));
}

/// The single `Error: ...` line the binary prints on failure
fn error_line(stderr: &str) -> &str {
    let lines: Vec<&str> = stderr.lines().filter(|l| l.starts_with("Error:")).collect();
    assert_eq!(lines.len(), 1, "stderr: {stderr}");
    lines[0]
}

#[test]
fn test_invalid_key_color_error_line() {
    let ws = TestWorkspace::new();
    ws.write_image("atlas.png", &fixtures::half_purple_atlas());

    let out = ws.run_cli(&["atlas.png", "mask.png", "-k", "ZZZZZZ"]);

    assert!(!out.success);
    assert_eq!(
        error_line(&out.stderr),
        "Error: Invalid color \"ZZZZZZ\": invalid hex digit 'Z'"
    );
}

#[test]
fn test_missing_input_error_line() {
    let ws = TestWorkspace::new();
    let os_error = std::fs::File::open(ws.path("missing.png")).unwrap_err();

    let out = ws.run_cli(&["missing.png", "mask.png"]);

    assert!(!out.success);
    assert_eq!(
        error_line(&out.stderr),
        format!("Error: IO error on missing.png: {os_error}")
    );
}

#[test]
fn test_garbage_png_error_line() {
    let ws = TestWorkspace::new();
    ws.write_file("atlas.png", "not a png");

    let out = ws.run_cli(&["atlas.png", "mask.png"]);

    let decode_err = png_io::read_png(&ws.path("atlas.png")).unwrap_err();
    let cause = decode_err.source().expect("decode error has a cause");

    assert!(!out.success);
    assert_eq!(
        error_line(&out.stderr),
        format!("Error: Failed to decode PNG atlas.png: {cause}")
    );
}

#[test]
fn test_apply_mode_ignores_key_color_and_tolerance() {
    let ws = TestWorkspace::new();
    let atlas = fixtures::half_purple_atlas();
    ws.write_image("atlas.png", &atlas);
    ws.write_image("mask.png", &RgbaImage::new(4, 4, Rgba::OPAQUE_WHITE));

    let out = ws.run_cli(&[
        "atlas.png",
        "output.png",
        "--apply-mask",
        "mask.png",
        "--paint",
        "#FF0000",
        "-k",
        "bad",
        "-t",
        "5",
    ]);

    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(
        ws.read_image("output.png").get(3, 3),
        Some(atlas.get(3, 3).unwrap().with_rgb(fixtures::RED))
    );
}
