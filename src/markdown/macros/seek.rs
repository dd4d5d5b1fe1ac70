//! Backward cursor motions over text.
//!
//! Positions are byte offsets that must lie on character boundaries. Both
//! functions only ever return offsets on character boundaries too.

/// Position after moving to the beginning of the previous word, like `b` in
/// vim's normal mode. Returns 0 when the start of the text is reached.
pub fn seek_word_backwards(text: &str, pos: usize) -> usize {
    let head = &text[..pos];
    let trimmed = head.trim_end_matches(char::is_whitespace);

    trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Position just past the last non-whitespace character before `pos`, or 0
/// if there is none.
pub fn seek_non_space_backwards(text: &str, pos: usize) -> usize {
    text[..pos].trim_end_matches(char::is_whitespace).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "This is an example.";

    #[test]
    fn test_word_backwards_from_word_start() {
        assert_eq!(seek_word_backwards(TEXT, 8), 5);
        assert_eq!(seek_word_backwards(TEXT, 5), 0);
    }

    #[test]
    fn test_word_backwards_from_inside_word() {
        assert_eq!(seek_word_backwards(TEXT, 2), 0);
        assert_eq!(seek_word_backwards(TEXT, 6), 5);
        assert_eq!(seek_word_backwards(TEXT, TEXT.len()), 11);
    }

    #[test]
    fn test_word_backwards_at_origin() {
        assert_eq!(seek_word_backwards(TEXT, 0), 0);
        assert_eq!(seek_word_backwards("", 0), 0);
    }

    #[test]
    fn test_word_backwards_whitespace_prefix() {
        assert_eq!(seek_word_backwards("   word", 3), 0);
        assert_eq!(seek_word_backwards("   word", 7), 3);
        assert_eq!(seek_word_backwards(" \t\n", 3), 0);
    }

    #[test]
    fn test_word_backwards_without_whitespace() {
        assert_eq!(seek_word_backwards("single", 6), 0);
        assert_eq!(seek_word_backwards("single", 3), 0);
    }

    #[test]
    fn test_word_backwards_multibyte() {
        let text = "naïve café .i";
        let token = text.find(".i").unwrap();
        assert_eq!(&text[seek_word_backwards(text, token)..token], "café ");
        assert_eq!(seek_word_backwards("a\u{a0}b", 4), 3);
    }

    #[test]
    fn test_non_space_backwards() {
        assert_eq!(seek_non_space_backwards(TEXT, 8), 7);
        assert_eq!(seek_non_space_backwards(TEXT, 7), 7);
        assert_eq!(seek_non_space_backwards("word   .i", 7), 4);
    }

    #[test]
    fn test_non_space_backwards_edges() {
        assert_eq!(seek_non_space_backwards(TEXT, 0), 0);
        assert_eq!(seek_non_space_backwards("    .i", 4), 0);
        assert_eq!(seek_non_space_backwards("nospace", 7), 7);
        assert_eq!(seek_non_space_backwards("é\n", 3), 2);
    }
}
