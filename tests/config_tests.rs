mod common;
use common::temp_path;
use std::fs;
use std::path::Path;
use tablebuilder::config::Config;
use tablebuilder::{AppError, Table, TableStyle, WidthHint};

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_path("config_missing", "yaml");
    let cfg = Config::load(Some(Path::new(&path))).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.padding, 1);
    assert_eq!(cfg.borders.vertical_char, "|");
}

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_path("config_round_trip", "yaml");
    let mut cfg = Config::default();
    cfg.padding = 2;
    cfg.padding_char = '.';
    cfg.terminal_width = Some(100);
    cfg.column_widths = vec![WidthHint::Auto, WidthHint::Percent(40.0), WidthHint::Flexible];
    cfg.style.preset = TableStyle::Compact;
    cfg.save(Path::new(&path)).unwrap();

    let loaded = Config::load(Some(Path::new(&path))).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let path = temp_path("config_partial", "yaml");
    fs::write(
        &path,
        "padding: 0\nborders:\n  vertical_char: ''\ncolumn_widths: [0, 35, '*', '25%']\n",
    )
    .unwrap();

    let cfg = Config::load(Some(Path::new(&path))).unwrap();
    assert_eq!(cfg.padding, 0);
    assert_eq!(cfg.padding_char, ' ');
    assert_eq!(cfg.borders.vertical_char, "");
    assert_eq!(cfg.borders.horizontal_char, "=");
    assert_eq!(
        cfg.column_widths,
        vec![
            WidthHint::Auto,
            WidthHint::Fixed(35),
            WidthHint::Flexible,
            WidthHint::Percent(25.0)
        ]
    );
    assert_eq!(cfg.separator_marker, "---");
}

#[test]
fn test_invalid_width_hint_in_file() {
    let path = temp_path("config_bad_hint", "yaml");
    fs::write(&path, "column_widths: [wide]\n").unwrap();
    assert!(matches!(
        Config::load(Some(Path::new(&path))),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_invalid_colour_in_file() {
    let path = temp_path("config_bad_colour", "yaml");
    fs::write(&path, "style:\n  fg: chartreuse\n").unwrap();
    assert!(matches!(
        Config::load(Some(Path::new(&path))),
        Err(AppError::InvalidStyle(_))
    ));
}

#[test]
fn test_apply_to_table() {
    let mut cfg = Config::default();
    cfg.padding = 2;
    cfg.terminal_width = Some(60);
    cfg.borders.crossing_char = "*".to_string();

    let mut table = Table::new().with_terminal_width(80);
    cfg.apply_to(&mut table);
    assert_eq!(table.padding, 2);
    assert_eq!(table.terminal_width, Some(60));
    assert_eq!(table.borders.crossing_char, "*");
    assert!(table.column_widths.is_empty());
}
