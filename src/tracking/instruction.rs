/// Strip `<...>`-bracketed markup from a provider instruction.
///
/// Purely textual and locale-independent: every bracketed span is removed,
/// an unterminated trailing tag is dropped, and runs of whitespace left
/// behind by removed tags collapse to single spaces.
pub fn strip_markup(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut in_tag = false;

    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
