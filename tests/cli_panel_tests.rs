//! End-to-end tests for `skillradar roles`, `chips` and `radar`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Roles
// ============================================================================

#[test]
fn test_roles_builtin_catalog() {
    let env = TestEnv::new();
    let output = env.run(&["roles"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Roles (4):"));
    assert!(out.contains("Full-Stack Developer"));
    assert!(out.contains("(default)"));
}

#[test]
fn test_roles_json_order_and_counts() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let result = json(&env.run_with_catalog(&catalog, &["roles", "--json"]));

    assert_eq!(result["default_role"], "Builder");
    assert_eq!(result["legacy"], false);
    let roles = result["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0]["role"], "Builder");
    assert_eq!(roles[0]["skills"], 6);
    assert_eq!(roles[0]["color"], "#6366F1");
    assert_eq!(roles[1]["role"], "Designer");
    assert_eq!(roles[1]["skills"], 0);
}

#[test]
fn test_roles_localized_labels() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let result = json(&env.run_with_catalog(&catalog, &["roles", "--json", "--locale", "zh"]));

    assert_eq!(result["roles"][0]["role"], "Builder");
    assert_eq!(result["roles"][0]["label"], "构建者");
    // No zh entry: the name is used as is
    assert_eq!(result["roles"][1]["label"], "Designer");
}

#[test]
fn test_roles_legacy_catalog() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("legacy.toml", LEGACY_CATALOG);
    let result = json(&env.run_with_catalog(&catalog, &["roles", "--json"]));

    assert_eq!(result["legacy"], true);
    assert_eq!(result["roles"][0]["role"], "Generalist");
    assert_eq!(result["roles"][0]["skills"], 3);
}

#[test]
fn test_missing_catalog_is_not_found() {
    let env = TestEnv::new();
    let output = env.run(&["--catalog", "does-not-exist.toml", "roles"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Catalog file not found"));
}

#[test]
fn test_invalid_catalog_is_validation_error() {
    let env = TestEnv::new();
    let catalog = env.write_catalog(
        "bad.toml",
        "default_role = \"A\"\n[[roles]]\nname = \"A\"\nhue = \"plaid\"\n",
    );
    let output = env.run_with_catalog(&catalog, &["roles"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown hue"));
}

// ============================================================================
// Chips
// ============================================================================

#[test]
fn test_chips_wide_shows_everything() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let result = json(&env.run_with_catalog(&catalog, &["chips", "--json", "--width", "1200"]));

    assert_eq!(result["selected_role"], "Builder");
    assert_eq!(result["mode"], "chips");
    assert_eq!(result["toggle_label"], "Radar");
    assert_eq!(result["body"]["mode"], "chips");
    assert_eq!(result["body"]["total"], 6);
    assert!(result["body"]["more_toggle"].is_null());

    let chips = result["body"]["chips"].as_array().unwrap();
    let names: Vec<&str> = chips.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Rust", "TypeScript", "Go", "Docker", "Redis", "Kafka"]);
    assert_eq!(chips[0]["percent"], 80);
    assert_eq!(chips[2]["percent"], 100, "over-range values clamp to 100");
    assert_eq!(chips[3]["percent"], 1, "unconfigured skills use the placeholder");
}

#[test]
fn test_chips_narrow_collapses_to_four() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let result = json(&env.run_with_catalog(&catalog, &["chips", "--json", "--width", "400"]));

    assert_eq!(result["body"]["chips"].as_array().unwrap().len(), 4);
    assert_eq!(result["body"]["total"], 6);
    assert_eq!(result["body"]["more_toggle"]["expanded"], false);
    assert_eq!(result["body"]["more_toggle"]["hidden"], 2);
    assert_eq!(result["body"]["more_toggle"]["label"], "View more");
}

#[test]
fn test_chips_narrow_expanded() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let result = json(&env.run_with_catalog(
        &catalog,
        &["chips", "--json", "--width", "400", "--expanded"],
    ));

    assert_eq!(result["body"]["chips"].as_array().unwrap().len(), 6);
    assert_eq!(result["body"]["more_toggle"]["expanded"], true);
    assert_eq!(result["body"]["more_toggle"]["label"], "View less");
}

#[test]
fn test_chips_empty_role_message() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let output = env.run_with_catalog(&catalog, &["chips", "--role", "designer"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Designer (0 skills)"));
    assert!(out.contains("No skills found for this role."));
}

#[test]
fn test_chips_text_output() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let output = env.run_with_catalog(&catalog, &["chips", "--width", "400"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Builder (6 skills)"));
    assert!(out.contains("TypeScript"));
    assert!(out.contains(" 80%"));
    assert!(out.contains("[View more] +2"));
    assert!(!out.contains("Kafka"));
}

#[test]
fn test_chips_unknown_role() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let output = env.run_with_catalog(&catalog, &["chips", "--role", "Astronaut"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Available roles: Builder, Designer"));
}

#[test]
fn test_chips_rejects_bad_width() {
    let env = TestEnv::new();
    let output = env.run(&["chips", "--width", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--width"));
}

// ============================================================================
// Radar
// ============================================================================

#[test]
fn test_radar_json_geometry() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let result = json(&env.run_with_catalog(&catalog, &["radar", "--json", "--size", "300"]));

    assert_eq!(result["title"], "Skills Map");
    let chart = &result["chart"];
    assert_eq!(chart["degenerate"], false);
    assert_eq!(chart["frame"]["center"]["x"], 150.0);
    assert_eq!(chart["frame"]["radius"], 118.0);
    assert_eq!(chart["rings"].as_array().unwrap().len(), 5);
    assert_eq!(chart["axis_lines"].as_array().unwrap().len(), 3);

    let polygon = &chart["polygons"][0];
    assert_eq!(polygon["closed"], true);
    assert_eq!(polygon["stroke"], "#6366F1");
    // First axis points straight up from the center
    let first = &polygon["points"][0];
    assert!((first["x"].as_f64().unwrap() - 150.0).abs() < 1e-9);
    assert!((first["y"].as_f64().unwrap() - (150.0 - 118.0 * 0.9)).abs() < 1e-9);

    assert_eq!(chart["labels"][0]["anchor"], "middle");
}

#[test]
fn test_radar_fits_container_width() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);

    let result = json(&env.run_with_catalog(&catalog, &["radar", "--json", "--width", "300"]));
    assert_eq!(result["chart"]["size"], 292.0);

    let result = json(&env.run_with_catalog(&catalog, &["radar", "--json", "--width", "100"]));
    assert_eq!(result["chart"]["size"], 180.0);
}

#[test]
fn test_radar_localized_labels() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("catalog.toml", SMALL_CATALOG);
    let result = json(&env.run_with_catalog(
        &catalog,
        &["radar", "--json", "--locale", "zh"],
    ));

    assert_eq!(result["title"], "技能图谱");
    assert_eq!(result["chart"]["labels"][0]["axis"], "Speed");
    assert_eq!(result["chart"]["labels"][0]["text"], "速度");
    assert_eq!(result["chart"]["labels"][1]["text"], "Safety");
}

#[test]
fn test_radar_two_axes_is_degenerate() {
    let env = TestEnv::new();
    let catalog = env.write_catalog("two.toml", TWO_AXIS_CATALOG);

    let result = json(&env.run_with_catalog(&catalog, &["radar", "--json"]));
    assert_eq!(result["chart"]["degenerate"], true);
    assert_eq!(result["chart"]["polygons"][0]["closed"], false);

    let output = env.run_with_catalog(&catalog, &["radar"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("fewer than 3 axes"));
}
