use tablebuilder::core::wrap::{display_width, wrap_line};

#[test]
fn test_simple_string() {
    let (base, overflow) = wrap_line("This is a simple string", 16);
    assert_eq!(base, "This is a simple");
    assert_eq!(overflow.as_deref(), Some("string"));
}

#[test]
fn test_short_string() {
    let (base, overflow) = wrap_line("This is a short line", 20);
    assert_eq!(base, "This is a short line");
    assert_eq!(overflow, None);
}

#[test]
fn test_short_width() {
    let (base, overflow) = wrap_line("Sometimes you have to truncate words", 6);
    assert_eq!(base, "Someti");
    assert_eq!(overflow.as_deref(), Some("mes you have to truncate words"));
}

#[test]
fn test_short_first_word() {
    let (base, overflow) = wrap_line("In Liberty we assert", 9);
    assert_eq!(base, "In");
    assert_eq!(overflow.as_deref(), Some("Liberty we assert"));
}

#[test]
fn test_joined_width_equal_to_limit_fits() {
    let (base, overflow) = wrap_line("ab cd ef", 5);
    assert_eq!(base, "ab cd");
    assert_eq!(overflow.as_deref(), Some("ef"));
}

#[test]
fn test_word_break_reconstructs_input() {
    let inputs = [
        ("And Then There Were None Is A Really Long Title", 45),
        ("And Then There Were None Is A Really Long Title", 35),
        ("J. R. R. Tolkien", 14),
        ("Dante Alighieri", 14),
    ];
    for (text, width) in inputs {
        let (head, tail) = wrap_line(text, width);
        let tail = tail.expect("text is wider than the column");
        assert!(display_width(&head) <= width, "{head:?} wider than {width}");
        assert_eq!(format!("{head} {tail}"), text);
    }
}

#[test]
fn test_hard_break_reconstructs_input() {
    let (head, tail) = wrap_line("99921-58-10-7", 11);
    assert_eq!(head, "99921-58-10");
    assert_eq!(tail.as_deref(), Some("-7"));
    assert_eq!(format!("{}{}", head, tail.unwrap()), "99921-58-10-7");
}

#[test]
fn test_zero_width_still_makes_progress() {
    let (head, tail) = wrap_line("abc", 0);
    assert_eq!(head, "a");
    assert_eq!(tail.as_deref(), Some("bc"));
}

#[test]
fn test_empty_remainder_is_none() {
    let (head, tail) = wrap_line(" ", 0);
    assert_eq!(head, "");
    assert_eq!(tail, None);

    let (head, tail) = wrap_line("", 0);
    assert_eq!(head, "");
    assert_eq!(tail, None);
}

#[test]
fn test_wide_characters_use_display_width() {
    let (head, tail) = wrap_line("日本語", 4);
    assert_eq!(head, "日本");
    assert_eq!(tail.as_deref(), Some("語"));
}
