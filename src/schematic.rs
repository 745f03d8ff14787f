//! The grid of tokens making up an engine schematic.

use lib::input::{FromInput, IStr, IStrError};

use crate::error::Error;
use crate::rect::Rect;
use crate::token::{Kind, Token, Tokens};

/// A token along with its bounding box in the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub token: Token<'a>,
    pub rect: Rect,
}

impl<'a> Cell<'a> {
    /// Test if the cell holds a number.
    #[inline]
    pub fn is_number(&self) -> bool {
        self.token.kind() == Kind::Number
    }

    /// Test if the cell holds a symbol.
    #[inline]
    pub fn is_symbol(&self) -> bool {
        self.token.kind() == Kind::Symbol
    }

    /// Parse the value of the cell as a number.
    pub fn number(&self) -> Result<u64, Error> {
        match self.token.value().parse() {
            Ok(n) => Ok(n),
            Err(error) => Err(Error::Number {
                value: self.token.value().to_owned(),
                rect: self.rect,
                error,
            }),
        }
    }
}

/// An engine schematic.
///
/// Every row holds the number and symbol cells of its line ordered by
/// column. Periods are empty space and are not stored.
#[derive(Debug, Default)]
pub struct Schematic<'a> {
    rows: Vec<Vec<Cell<'a>>>,
}

impl<'a> Schematic<'a> {
    /// Construct a new empty schematic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schematic out of a collection of lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use gears::{Rect, Schematic};
    ///
    /// let schematic = Schematic::from_lines(["467..114..", "...*......"]);
    ///
    /// let cells = schematic
    ///     .cells()
    ///     .map(|cell| (cell.token.value(), cell.rect))
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(
    ///     cells,
    ///     [
    ///         ("467", Rect::new(0, 0, 3, 1)),
    ///         ("114", Rect::new(5, 0, 3, 1)),
    ///         ("*", Rect::new(3, 1, 1, 1)),
    ///     ]
    /// );
    /// ```
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut schematic = Self::new();

        for line in lines {
            schematic.push_line(line);
        }

        schematic
    }

    /// Tokenize `line` and add it as the next row of the schematic.
    pub fn push_line(&mut self, line: &'a str) {
        let y = self.rows.len();
        let mut tokens = Tokens::new(line);
        let mut row = Vec::new();

        for (x, token) in tokens.by_ref() {
            if token.kind() == Kind::Period {
                continue;
            }

            let rect = Rect::new(x, y, token.span(), 1);
            log::debug!("{rect}: {token}");
            row.push(Cell { token, rect });
        }

        if !tokens.is_exhausted() {
            log::warn!(
                "row {y}: ignoring input after column {x}: {rest:?}",
                x = tokens.offset(),
                rest = line.get(tokens.offset()..).unwrap_or_default()
            );
        }

        self.rows.push(row);
    }

    /// The rows of the schematic.
    #[inline]
    pub fn rows(&self) -> &[Vec<Cell<'a>>] {
        &self.rows
    }

    /// Iterate over all cells in the schematic, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<'a>> + '_ {
        self.rows.iter().flatten()
    }

    /// Iterate over the cells which intersect `rect`.
    ///
    /// All cells are one row tall, so only the rows directly above and below
    /// `rect` need to be visited.
    pub fn neighbours(&self, rect: Rect) -> impl Iterator<Item = &Cell<'a>> + '_ {
        let start = rect.y.saturating_sub(1);
        let end = rect.y.saturating_add(rect.height).saturating_add(1);

        self.rows
            .get(start..end.min(self.rows.len()))
            .unwrap_or_default()
            .iter()
            .flatten()
            .filter(move |cell| cell.rect.intersects(&rect))
    }

    /// Iterate over part numbers, which are numbers adjacent to at least one
    /// symbol.
    pub fn part_numbers(&self) -> impl Iterator<Item = &Cell<'a>> + '_ {
        self.cells()
            .filter(|cell| cell.is_number())
            .filter(move |cell| self.neighbours(cell.rect).any(Cell::is_symbol))
    }
}

impl FromInput for Schematic<'static> {
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>, IStrError> {
        let mut schematic = Schematic::new();

        while let Some(line) = p.try_line::<&'static str>()? {
            schematic.push_line(line);
        }

        Ok(Some(schematic))
    }
}
