//! Finding gears and their ratios.

use core::fmt;

use lib::prelude::ArrayVec;

use crate::error::Error;
use crate::schematic::{Cell, Schematic};

/// The symbol which marks a potential gear.
const GEAR: &str = "*";

/// A `*` symbol adjacent to exactly two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gear<'s, 'a> {
    /// The cell of the gear symbol.
    pub cell: &'s Cell<'a>,
    /// The numbers adjacent to the gear, in schematic order.
    pub parts: [u64; 2],
}

impl Gear<'_, '_> {
    /// The product of the two adjacent numbers.
    pub fn ratio(&self) -> Result<u64, Error> {
        let [a, b] = self.parts;

        a.checked_mul(b).ok_or(Error::Overflow {
            rect: self.cell.rect,
        })
    }
}

impl fmt::Display for Gear<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.parts;
        write!(f, "gear at {}: {a} * {b}", self.cell.rect)
    }
}

/// Iterate over all gears in the schematic.
///
/// # Examples
///
/// ```
/// use gears::gear::gears;
/// use gears::Schematic;
///
/// let schematic = Schematic::from_lines(["467..114..", "...*......", "..35..633."]);
/// let found = gears(&schematic).collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].parts, [467, 35]);
/// assert_eq!(found[0].ratio()?, 16345);
/// # Ok::<_, gears::Error>(())
/// ```
pub fn gears<'s, 'a>(
    schematic: &'s Schematic<'a>,
) -> impl Iterator<Item = Result<Gear<'s, 'a>, Error>> + 's {
    schematic
        .cells()
        .filter(|cell| cell.is_symbol() && cell.token.value() == GEAR)
        .filter_map(move |cell| gear(schematic, cell).transpose())
}

/// Test if the given candidate is a gear.
fn gear<'s, 'a>(
    schematic: &'s Schematic<'a>,
    cell: &'s Cell<'a>,
) -> Result<Option<Gear<'s, 'a>>, Error> {
    let mut parts = ArrayVec::<u64, 2>::new();

    for number in schematic.neighbours(cell.rect).filter(|c| c.is_number()) {
        if parts.try_push(number.number()?).is_err() {
            log::debug!("{rect}: more than two adjacent numbers", rect = cell.rect);
            return Ok(None);
        }
    }

    let Ok(parts) = parts.into_inner() else {
        return Ok(None);
    };

    Ok(Some(Gear { cell, parts }))
}

/// Sum the ratios of all gears in the schematic.
pub fn ratio_sum(schematic: &Schematic<'_>) -> Result<u64, Error> {
    gears(schematic).try_fold(0u64, |sum, gear| {
        let gear = gear?;
        let ratio = gear.ratio()?;
        log::info!("{gear} = {ratio}");

        sum.checked_add(ratio).ok_or(Error::Overflow {
            rect: gear.cell.rect,
        })
    })
}
