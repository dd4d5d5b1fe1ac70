//! Inline macro markup.
//!
//! A macro is a `.name[degree]` annotation written right after the words it
//! styles, e.g. `some words .i2`. Expansion removes the annotation and wraps
//! the preceding `degree` words in the delimiter configured for `name`.

mod expander;
mod scanner;
pub mod seek;

pub use expander::{expand, MacroExpander};
pub use scanner::find_macro_tokens;

/// A recognized `.name[degree]` occurrence in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroToken {
    /// Style name, always a key of the active style.
    pub name: String,
    /// Number of words the macro reaches backwards.
    pub degree: usize,
    /// Byte offset of the leading `.`.
    pub start: usize,
    /// Byte offset just past the last name letter or degree digit.
    pub end: usize,
}

impl MacroToken {
    pub fn new(name: impl Into<String>, degree: usize, start: usize, end: usize) -> Self {
        Self {
            name: name.into(),
            degree,
            start,
            end,
        }
    }
}

/// A delimiter insertion at a byte offset of the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionEvent<'s> {
    pub position: usize,
    /// Orders events sharing a position: opens are negative, closes positive.
    pub tie_break: isize,
    pub text: &'s str,
}

impl<'s> InsertionEvent<'s> {
    /// Open event for the token discovered at `index`.
    pub fn open(position: usize, index: usize, text: &'s str) -> Self {
        Self {
            position,
            tie_break: -(index as isize) - 1,
            text,
        }
    }

    /// Close event for the token discovered at `index`.
    pub fn close(position: usize, index: usize, text: &'s str) -> Self {
        Self {
            position,
            tie_break: index as isize + 1,
            text,
        }
    }
}
