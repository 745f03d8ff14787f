//! Gear ratios and part numbers of an engine schematic.
//!
//! A schematic is a grid of numbers, symbols and periods. Numbers adjacent to
//! any symbol, including diagonally, are part numbers. A `*` adjacent to
//! exactly two numbers is a gear, and its ratio is the product of those
//! numbers.

mod error;
pub mod gear;
mod rect;
pub mod schematic;
pub mod token;

#[cfg(test)]
mod tests;

use lib::prelude::*;

pub use self::error::Error;
pub use self::rect::Rect;
pub use self::schematic::{Cell, Schematic};

/// Sum all part numbers in the schematic.
///
/// # Examples
///
/// ```
/// use gears::Schematic;
///
/// let schematic = Schematic::from_lines(["467..114..", "...*......", "..35..633."]);
/// assert_eq!(gears::part_number_sum(&schematic)?, 467 + 35);
/// # Ok::<_, gears::Error>(())
/// ```
pub fn part_number_sum(schematic: &Schematic<'_>) -> Result<u64, Error> {
    schematic.part_numbers().try_fold(0u64, |sum, cell| {
        sum.checked_add(cell.number()?)
            .ok_or(Error::Overflow { rect: cell.rect })
    })
}

/// Solve both parts for the given input, returning the sum of part numbers
/// and the sum of gear ratios.
pub fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let schematic = input.next::<Schematic>()?;
    let o1 = part_number_sum(&schematic)?;
    let o2 = gear::ratio_sum(&schematic)?;
    Ok((o1, o2))
}
