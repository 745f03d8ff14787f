//! Splitting schematic lines into tokens.

#[cfg(test)]
mod tests;

use core::fmt;

/// The kind of a [Token].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A run of decimal digits.
    Number,
    /// A single `.`, which is empty space.
    Period,
    /// Any other single non-whitespace character.
    Symbol,
}

/// A classified run of characters in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    value: &'a str,
    kind: Kind,
}

impl<'a> Token<'a> {
    #[inline]
    pub(crate) fn new(value: &'a str, kind: Kind) -> Self {
        Self { value, kind }
    }

    /// The text making up the token.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// The kind of the token.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The number of bytes the token covers in its line.
    #[inline]
    pub fn span(&self) -> usize {
        self.value.len()
    }
}

impl fmt::Display for Token<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Read the token starting at byte `offset` in `line`.
///
/// Numbers take priority over periods, which take priority over symbols.
/// Returns `None` at the end of the line, at whitespace, or if `offset` is
/// not a valid position in the line.
///
/// # Examples
///
/// ```
/// use gears::token::{read_token, Kind};
///
/// let token = read_token("467..114..", 0).unwrap();
/// assert_eq!(token.value(), "467");
/// assert_eq!(token.kind(), Kind::Number);
///
/// let token = read_token("467..114..", 3).unwrap();
/// assert_eq!(token.kind(), Kind::Period);
///
/// assert!(read_token("467..114..", 10).is_none());
/// assert!(read_token("467..114..", 42).is_none());
/// ```
pub fn read_token(line: &str, offset: usize) -> Option<Token<'_>> {
    let rest = line.get(offset..)?;

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();

    if digits > 0 {
        let (value, _) = rest.split_at(digits);
        return Some(Token::new(value, Kind::Number));
    }

    let c = rest.chars().next()?;

    let kind = match c {
        '.' => Kind::Period,
        c if c.is_ascii_whitespace() => return None,
        _ => Kind::Symbol,
    };

    let (value, _) = rest.split_at(c.len_utf8());
    Some(Token::new(value, kind))
}

/// Iterator over the tokens of a line along with the offset they start at.
///
/// Ends where [read_token] stops producing tokens, see [Tokens::offset] for
/// how far into the line it got.
///
/// # Examples
///
/// ```
/// use gears::token::Tokens;
///
/// let tokens = Tokens::new("617*...")
///     .map(|(offset, token)| (offset, token.value()))
///     .collect::<Vec<_>>();
///
/// assert_eq!(tokens, [(0, "617"), (3, "*"), (4, "."), (5, "."), (6, ".")]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    offset: usize,
}

impl<'a> Tokens<'a> {
    /// Construct a new token iterator over `line`.
    #[inline]
    pub fn new(line: &'a str) -> Self {
        Self { line, offset: 0 }
    }

    /// The offset of the next token to read.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Test if every byte of the line has been tokenized.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.line.len()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, Token<'a>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        let token = read_token(self.line, offset)?;
        self.offset += token.span();
        Some((offset, token))
    }
}
