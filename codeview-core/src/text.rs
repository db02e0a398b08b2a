//! Append-only text buffer.

use std::fmt;

/// An owned, append-only text accumulator.
///
/// Views build their output into a `Text` and release it with
/// [`Text::into_string`] once the fragment is complete. Parts are kept in
/// insertion order; nothing already written can be changed.
///
/// # Example
///
/// ```
/// use codeview_core::Text;
///
/// let mut text = Text::from_parts(["package ", "com"]);
/// text.push(".example").push(";");
///
/// assert_eq!(text.into_string(), "package com.example;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text {
    buffer: String,
}

impl Text {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Create a buffer from any number of parts, appended in order.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = Self::new();
        text.push_all(parts);
        text
    }

    /// Append one part.
    pub fn push(&mut self, part: impl AsRef<str>) -> &mut Self {
        self.buffer.push_str(part.as_ref());
        self
    }

    /// Append every part in order.
    pub fn push_all<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for part in parts {
            self.buffer.push_str(part.as_ref());
        }
        self
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The character at the given char index.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.buffer.chars().nth(index)
    }

    /// The byte range `start..end`, if both ends fall on char boundaries.
    pub fn slice(&self, start: usize, end: usize) -> Option<&str> {
        self.buffer.get(start..end)
    }

    /// View the accumulated text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Release the buffer as an immutable value.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl fmt::Write for Text {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.buffer
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.buffer
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self {
            buffer: s.to_string(),
        }
    }
}

impl From<String> for Text {
    fn from(buffer: String) -> Self {
        Self { buffer }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Text {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_parts(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for Text {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}
