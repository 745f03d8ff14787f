use std::num::ParseIntError;

use thiserror::Error;

use crate::rect::Rect;

/// Errors raised while evaluating a schematic.
#[derive(Debug, Error)]
pub enum Error {
    #[error("number `{value}` at {rect} is not a valid integer")]
    Number {
        value: String,
        rect: Rect,
        #[source]
        error: ParseIntError,
    },
    #[error("arithmetic overflow at {rect}")]
    Overflow { rect: Rect },
}
