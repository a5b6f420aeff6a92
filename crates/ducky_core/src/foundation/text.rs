//! String search helpers used when patching shader sources
//!
//! Unlike the `str` methods these reject empty inputs and out-of-range
//! offsets with classified errors, so callers can hand failures straight to
//! the error channel.

use crate::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors raised by the text helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// An input that must not be empty was empty
    #[error("{0} is empty.")]
    Empty(&'static str),

    /// Search offset past the end of the text
    #[error("offset {offset} is out of bounds for text of length {len}")]
    OffsetOutOfBounds {
        /// Requested offset
        offset: usize,
        /// Text length in bytes
        len: usize,
    },

    /// Search offset splits a UTF-8 character
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

impl Classify for TextError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty(_) => ErrorKind::EmptyReference,
            Self::OffsetOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Self::NotCharBoundary(_) => ErrorKind::Failure,
        }
    }
}

/// Byte position of the first `needle` at or after `offset`
///
/// Returns `Ok(None)` when there is no match.
pub fn find(text: &str, needle: &str, offset: usize) -> Result<Option<usize>, TextError> {
    if text.is_empty() {
        return Err(TextError::Empty("text"));
    }
    if needle.is_empty() {
        return Err(TextError::Empty("needle"));
    }
    if offset >= text.len() {
        return Err(TextError::OffsetOutOfBounds {
            offset,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(offset) {
        return Err(TextError::NotCharBoundary(offset));
    }

    Ok(text[offset..].find(needle).map(|position| position + offset))
}

/// Copy of `text` with the first `target` replaced
///
/// Returns `Ok(None)` when `target` does not occur.
pub fn replace_first(
    text: &str,
    target: &str,
    replacement: &str,
) -> Result<Option<String>, TextError> {
    let Some(start) = find(text, target, 0)? else {
        return Ok(None);
    };

    let mut replaced = String::with_capacity(text.len() - target.len() + replacement.len());
    replaced.push_str(&text[..start]);
    replaced.push_str(replacement);
    replaced.push_str(&text[start + target.len()..]);
    Ok(Some(replaced))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHADER: &str = "#version 330 core\n#define MAX_POINT_LIGHTS 8\nvoid main() {}\n";

    #[test]
    fn test_find_define_and_line_end() {
        let start = find(SHADER, "#define MAX_POINT_LIGHTS 8", 0).unwrap().unwrap();
        assert_eq!(start, 18);
        let end = find(SHADER, "\n", start).unwrap().unwrap();
        assert_eq!(&SHADER[start..end], "#define MAX_POINT_LIGHTS 8");
    }

    #[test]
    fn test_find_missing_is_none() {
        assert_eq!(find(SHADER, "uniform", 0), Ok(None));
        assert_eq!(find("abc", "abcd", 0), Ok(None));
    }

    #[test]
    fn test_find_rejects_bad_input() {
        assert_eq!(find("", "a", 0), Err(TextError::Empty("text")));
        assert_eq!(find("a", "", 0).unwrap_err().kind(), ErrorKind::EmptyReference);
        assert_eq!(
            find("abc", "c", 3).unwrap_err(),
            TextError::OffsetOutOfBounds { offset: 3, len: 3 }
        );
        assert_eq!(find("héllo", "l", 2), Err(TextError::NotCharBoundary(2)));
    }

    #[test]
    fn test_replace_first_only() {
        let patched = replace_first(SHADER, "8", "16").unwrap().unwrap();
        assert!(patched.contains("#define MAX_POINT_LIGHTS 16\n"));
        assert_eq!(replace_first("a-a", "a", "b").unwrap().as_deref(), Some("b-a"));
        assert_eq!(replace_first("abc", "z", "y"), Ok(None));
    }
}
