use log::warn;

use crate::markdown::macros::MacroToken;
use crate::markdown::types::MacroStyle;

/// Find every `.name[degree]` sequence whose name is a known style, in order
/// of appearance. Scanning resumes after each token, so tokens never overlap.
pub fn find_macro_tokens(text: &str, style: &MacroStyle) -> Vec<MacroToken> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find('.') {
        let start = cursor + found;
        let name_start = start + 1;
        let name_end = name_start + prefix_len(&text[name_start..], char::is_alphabetic);

        let name = &text[name_start..name_end];
        if name.is_empty() || !style.contains(name) {
            cursor = name_start;
            continue;
        }

        let degree_end = name_end + prefix_len(&text[name_end..], |c| c.is_ascii_digit());
        let digits = &text[name_end..degree_end];

        let degree = if digits.is_empty() {
            1
        } else {
            match digits.parse::<usize>() {
                Ok(degree) => degree,
                Err(e) => {
                    warn!("Known macro '{}' has invalid degree {:?} ({}), skipping", name, digits, e);
                    cursor = name_start;
                    continue;
                }
            }
        };

        tokens.push(MacroToken::new(name, degree, start, degree_end));
        cursor = degree_end;
    }

    tokens
}

/// Byte length of the longest prefix made of characters matching `pred`.
fn prefix_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.find(|c: char| !pred(c)).unwrap_or(text.len())
}
