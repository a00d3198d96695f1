use tablebuilder::input::{InputFormat, load, load_csv, load_json};
use tablebuilder::{AppError, Row};

#[test]
fn test_csv_with_header_and_separator() {
    let src = "ISBN,Title\n1,Dune\n---\n2,\n3\n";
    let data = load_csv(src.as_bytes(), true, "---").unwrap();

    assert_eq!(
        data.headers,
        vec![Some("ISBN".to_string()), Some("Title".to_string())]
    );
    assert_eq!(
        data.rows,
        vec![
            Row::from(vec!["1", "Dune"]),
            Row::Separator,
            Row::from(vec![Some("2"), None]),
            Row::from(vec!["3"]),
        ]
    );
}

#[test]
fn test_csv_without_header() {
    let data = load("a,b\nc,d\n".as_bytes(), InputFormat::Csv, false, "---").unwrap();
    assert!(data.headers.is_empty());
    assert_eq!(data.rows.len(), 2);
}

#[test]
fn test_json_array_of_rows() {
    let src = r#"[["id", "name"], [1, "alpha"], null, [2, null], [true]]"#;
    let data = load_json(src.as_bytes(), true, "---").unwrap();

    assert_eq!(
        data.headers,
        vec![Some("id".to_string()), Some("name".to_string())]
    );
    assert_eq!(
        data.rows,
        vec![
            Row::from(vec!["1", "alpha"]),
            Row::Separator,
            Row::from(vec![Some("2"), None]),
            Row::from(vec!["true"]),
        ]
    );
}

#[test]
fn test_json_object_form() {
    let src = r#"{"headers": ["a", null], "rows": [["x", "y"], "---", ["z"]]}"#;
    let data = load(src.as_bytes(), InputFormat::Json, true, "---").unwrap();

    assert_eq!(data.headers, vec![Some("a".to_string()), None]);
    assert_eq!(
        data.rows,
        vec![Row::from(vec!["x", "y"]), Row::Separator, Row::from(vec!["z"])]
    );
}

#[test]
fn test_json_rejects_nested_cells() {
    let src = r#"[["ok", {"nested": 1}]]"#;
    assert!(matches!(
        load_json(src.as_bytes(), false, "---"),
        Err(AppError::Input(_))
    ));
}

#[test]
fn test_json_rejects_scalar_document() {
    assert!(matches!(
        load_json("42".as_bytes(), false, "---"),
        Err(AppError::Input(_))
    ));
    assert!(matches!(
        load_json("not json".as_bytes(), false, "---"),
        Err(AppError::Json(_))
    ));
}
