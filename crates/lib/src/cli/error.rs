use core::fmt;
use std::path::{Path, PathBuf};

use crate::input::{IStr, IStrError};

/// Associate an error raised while processing `data` with the path it was
/// read from.
///
/// Input errors carry a span which is translated into a line and column.
pub fn error_context(path: &Path, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let pos = find_error(&error).map(|e| crate::env::pos_from(data.as_data(), e.span.clone()));

    let context = ErrorContext {
        path: path.to_owned(),
        pos,
    };

    error.context(context)
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;

        if self.end > self.start {
            write!(f, "{line}:{}-{}", self.start, self.end)
        } else {
            write!(f, "{line}:{}", self.start)
        }
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_error(error: &anyhow::Error) -> Option<&IStrError> {
    error.chain().find_map(|e| e.downcast_ref::<IStrError>())
}

#[derive(Debug)]
struct ErrorContext {
    path: PathBuf,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();

        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}"),
            None => write!(f, "{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::env::Size;
    use crate::input::IStr;

    use super::error_context;

    #[test]
    fn test_input_error_position() {
        let mut input = IStr::new(b"..1\n\xff.2\n", Size::ZERO);
        let original = input;

        input.line::<&str>().unwrap();
        let error = input.line::<&str>().unwrap_err();

        let error = error_context(Path::new("inputs/d03.txt"), original, error.into());
        assert_eq!(error.to_string(), "inputs/d03.txt:2:0-3");
    }

    #[test]
    fn test_other_error() {
        let input = IStr::new(b"..1\n", Size::ZERO);
        let error = error_context(Path::new("inputs/d03.txt"), input, anyhow::anyhow!("boom"));
        assert_eq!(error.to_string(), "inputs/d03.txt");
        assert_eq!(error.root_cause().to_string(), "boom");
    }
}
