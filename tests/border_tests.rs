use tablebuilder::core::borders::generate_border_columns;

#[test]
fn test_default() {
    let border_columns = generate_border_columns(4, 1, ' ', "|");
    assert_eq!(border_columns, ["| ", " | ", " | ", " | ", " |"]);
}

#[test]
fn test_too_wide_border_char() {
    let border_columns = generate_border_columns(2, 1, ' ', ")(");
    assert_eq!(border_columns, [") ", " ) ", " )"]);
}

#[test]
fn test_no_border() {
    let border_columns = generate_border_columns(1, 1, ' ', "");
    assert_eq!(border_columns, [" ", " "]);

    let border_columns = generate_border_columns(2, 1, ' ', "");
    assert_eq!(border_columns, [" ", " ", " "]);
}

#[test]
fn test_no_padding() {
    let border_columns = generate_border_columns(3, 0, ' ', "|");
    assert_eq!(border_columns, ["|", "|", "|", "|"]);
}

#[test]
fn test_custom_padding_char() {
    let border_columns = generate_border_columns(2, 2, '.', "|");
    assert_eq!(border_columns, ["|..", "..|..", "..|"]);
}

#[test]
fn test_zero_columns() {
    let border_columns = generate_border_columns(0, 1, ' ', "|");
    assert_eq!(border_columns, ["|"]);
}
