use core::ops::Range;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::input::IStr;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the current input position based on the given index.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    use crate::input::NL;

    let span = Size::usize_range(span);

    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let it = memchr::memchr_iter(NL, d);

    let (line, last) = it
        .enumerate()
        .last()
        .map(|(line, n)| (line + 1, n + 1))
        .unwrap_or_default();

    let start = d.get(last..).unwrap_or_default().len();

    let end = if let Some(end) = data.get(span) {
        let len = memchr::memchr(NL, end).unwrap_or(end.len());
        start.saturating_add(len)
    } else {
        start
    };

    LineCol::new(line, start, end)
}

/// Read the input at the given path.
///
/// The buffer is leaked to give the input a `'static` lifetime, which is much
/// easier to deal with than lifetimes and the memory for it will be freed once
/// the process exits *anyway*.
pub fn input(path: &Path) -> anyhow::Result<IStr> {
    return inner(path).with_context(|| anyhow!("{}", path.display()));

    #[inline]
    fn inner(path: &Path) -> anyhow::Result<IStr> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(IStr::new(Vec::leak(buf), Size::ZERO))
    }
}
