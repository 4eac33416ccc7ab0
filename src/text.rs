use unicode_normalization::UnicodeNormalization;

/// Canonicalizes text to Unicode compatibility decomposition (NFKD) so that
/// visually identical but differently encoded characters compare equal
/// downstream.
pub fn normalize_text(text: &str) -> String {
    text.nfkd().collect()
}

/// Splits one tree-text line into its name and optional trailing comment.
///
/// The split happens at the first `#`; both sides are trimmed and the comment
/// is normalized. Without a marker the whole trimmed line is the name.
///
/// Known limitation: a literal `#` inside file content cannot be expressed in
/// the tree-text format, since everything after the first marker is read as a
/// comment.
pub fn split_name_and_comment(line: &str) -> (String, String) {
    match line.split_once('#') {
        Some((name, comment)) => (name.trim().to_owned(), normalize_text(comment.trim())),
        None => (line.trim().to_owned(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_decomposed_form() {
        // U+00E9 decomposes to `e` followed by a combining acute accent.
        assert_eq!(normalize_text("caf\u{e9}"), "cafe\u{301}");
    }

    #[test]
    fn splits_at_the_first_marker_only() {
        let (name, comment) = split_name_and_comment("notes.txt # see #42");

        assert_eq!(name, "notes.txt");
        assert_eq!(comment, "see #42");
    }

    #[test]
    fn line_without_marker_has_empty_comment() {
        let (name, comment) = split_name_and_comment("  src  ");

        assert_eq!(name, "src");
        assert_eq!(comment, "");
    }
}
