/// Canonicalize an event title for comparison
///
/// Lowercases, drops everything that is neither a word character
/// (alphanumeric or `_`) nor whitespace, collapses whitespace runs to a
/// single space and trims. Total over all inputs; the result may be empty.
pub fn normalize(title: &str) -> String {
    let mut stripped = String::with_capacity(title.len());

    for ch in title.chars().flat_map(char::to_lowercase) {
        if is_word_char(ch) || ch.is_whitespace() {
            stripped.push(ch);
        }
    }

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
