//! Border and padding segments placed around and between columns.

/// Build the `num_data_cols + 1` segments that surround the data columns.
///
/// With a border character each segment is `padding + border + padding`,
/// minus the outer padding on the first and last segment. Only the first
/// character of `border_char` is used. An empty `border_char` produces plain
/// padding spacers with no vertical rule.
pub fn generate_border_columns(
    num_data_cols: usize,
    padding_width: usize,
    padding_char: char,
    border_char: &str,
) -> Vec<String> {
    let pad: String = std::iter::repeat_n(padding_char, padding_width).collect();

    (0..=num_data_cols)
        .map(|i| match border_char.chars().next() {
            Some(border) => {
                let mut segment = String::new();
                if i != 0 {
                    segment.push_str(&pad);
                }
                segment.push(border);
                if i != num_data_cols {
                    segment.push_str(&pad);
                }
                segment
            }
            None => pad.clone(),
        })
        .collect()
}
