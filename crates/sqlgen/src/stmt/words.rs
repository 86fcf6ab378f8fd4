//! Word-sequence join helpers shared by the statement builders.

/// Join words with the default separator: `", "` (comma plus space).
///
/// # Example
/// ```
/// use sqlgen::join_words;
///
/// assert_eq!(join_words(&["id", "name", "price"]), "id, name, price");
/// ```
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    join_words_with(words, true, ",")
}

/// Join words with a configurable separator.
///
/// An empty `separator` falls back to `","`. When `space_after_separator`
/// is set, a single space follows each separator. Empty input yields an
/// empty string; no trailing separator is emitted.
pub fn join_words_with<S: AsRef<str>>(
    words: &[S],
    space_after_separator: bool,
    separator: &str,
) -> String {
    let base = if separator.is_empty() { "," } else { separator };
    let sep = if space_after_separator {
        format!("{base} ")
    } else {
        base.to_string()
    };
    let parts: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    parts.join(&sep)
}

/// Map each column to a `col = ?` placeholder pair, comma-joined in input
/// order. Used for parameterized UPDATE SET clauses.
///
/// # Example
/// ```
/// use sqlgen::to_set_clause;
///
/// assert_eq!(to_set_clause(&["id", "name"]), "id = ?, name = ?");
/// ```
pub fn to_set_clause<S: AsRef<str>>(columns: &[S]) -> String {
    let parts: Vec<String> = columns
        .iter()
        .map(|c| format!("{} = ?", c.as_ref()))
        .collect();
    parts.join(", ")
}
