const CURSOR: char = '_';

pub(super) fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len || max_len <= 3 {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

/// Single-line rendering of a text value, with a cursor when focused.
///
/// Long values keep their tail visible so the cursor stays on screen.
pub(super) fn field_text(value: &str, focused: bool, max_len: usize) -> String {
    let flat = value.replace('\n', " ");
    if !focused {
        return truncate_text(&flat, max_len);
    }
    let mut shown = flat;
    shown.push(CURSOR);
    let len = shown.chars().count();
    if max_len == 0 || len <= max_len {
        return shown;
    }
    shown.chars().skip(len - max_len).collect()
}

/// Multi-line rendering for the description box.
pub(super) fn multiline_text(value: &str, focused: bool) -> String {
    let mut shown = value.to_string();
    if focused {
        shown.push(CURSOR);
    }
    shown
}
