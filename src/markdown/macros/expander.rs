use log::trace;

use crate::markdown::macros::seek::{seek_non_space_backwards, seek_word_backwards};
use crate::markdown::macros::{find_macro_tokens, InsertionEvent, MacroToken};
use crate::markdown::types::MacroStyle;

/// Expands inline macros into markdown delimiters
#[derive(Debug, Clone, Default)]
pub struct MacroExpander {
    style: MacroStyle,
}

impl MacroExpander {
    pub fn new(style: MacroStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &MacroStyle {
        &self.style
    }

    /// Replace every known macro with the delimiters of its style wrapped
    /// around the words it refers to.
    ///
    /// Stacking styles on the same words is not supported, i.e.
    /// `bold italic .b2 .i2` does not produce bold italic text.
    pub fn expand(&self, text: &str) -> String {
        expand(text, &self.style)
    }
}

/// Expand `text` with the given style. Never fails: unknown names are left
/// alone and every recognized token is removed from the output.
pub fn expand(text: &str, style: &MacroStyle) -> String {
    let tokens = find_macro_tokens(text, style);
    if tokens.is_empty() {
        return text.to_string();
    }

    let events = insertion_events(text, &tokens, style);
    trace!("Expanding {} macro(s) into {} insertion(s)", tokens.len(), events.len());

    replay(text, &tokens, &events)
}

/// Generate an open/close pair for every token that spans at least one
/// character, sorted into emission order.
fn insertion_events<'s>(
    text: &str,
    tokens: &[MacroToken],
    style: &'s MacroStyle,
) -> Vec<InsertionEvent<'s>> {
    let mut events = Vec::with_capacity(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        let Some(delimiter) = style.get(&token.name) else {
            continue;
        };

        let span_start = (0..token.degree).fold(token.start, |pos, _| seek_word_backwards(text, pos));
        let span_end = seek_non_space_backwards(text, token.start);

        if span_start >= span_end {
            continue;
        }

        events.push(InsertionEvent::open(span_start, index, delimiter));
        events.push(InsertionEvent::close(span_end, index, delimiter));
    }

    events.sort_by_key(|event| (event.position, event.tie_break));
    events
}

/// Copy `text` while inserting events at their positions and eliding the
/// literal token text together with the whitespace leading up to it.
fn replay(text: &str, tokens: &[MacroToken], events: &[InsertionEvent<'_>]) -> String {
    let extra: usize = events.iter().map(|event| event.text.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);

    let mut pending = events.iter().peekable();
    let mut next_token = tokens.iter().peekable();
    let mut cursor = 0;

    loop {
        while let Some(event) = pending.next_if(|event| event.position <= cursor) {
            out.push_str(event.text);
        }

        if let Some(token) = next_token.peek() {
            let skip_from = seek_non_space_backwards(text, token.start);
            if skip_from <= cursor && cursor < token.end {
                cursor = token.end;
                next_token.next();
                continue;
            }
        }

        let Some(c) = text[cursor..].chars().next() else {
            break;
        };
        out.push(c);
        cursor += c.len_utf8();
    }

    for event in pending {
        out.push_str(event.text);
    }

    out
}
