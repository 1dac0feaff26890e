use std::{fmt::Formatter, str::Chars};

/// A cheap, cloneable position inside an expression string.
///
/// Cloning a cursor and advancing the clone is how callers look ahead an
/// arbitrary number of characters without committing to consuming them.
#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Printing the whole source is usually too verbose, so by default
        // we only print the offset
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("offset", &self.offset())
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor").field("offset", &self.offset()).finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars() }
    }

    /// Byte offset of the cursor into the source.
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.chars.next()
    }
}

impl<'a> Cursor<'a> {
    pub fn slice_until<'c>(&self, end: &'c Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[(self.source.len() - self.chars.as_str().len())
            ..(self.source.len() - end.chars.as_str().len())]
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }
}
