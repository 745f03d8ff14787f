use core::fmt;

/// The bounding box of a token in the schematic.
///
/// Boxes are closed intervals, so two boxes which are next to each other
/// (including diagonally) intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Construct a new bounding box.
    #[inline]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Test if two bounding boxes touch or overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use gears::Rect;
    ///
    /// let star = Rect::new(3, 1, 1, 1);
    ///
    /// // `467` in the row above, ending diagonally up-left of the star.
    /// assert!(star.intersects(&Rect::new(0, 0, 3, 1)));
    /// // `114` in the row above, starting two columns to the right.
    /// assert!(!star.intersects(&Rect::new(5, 0, 3, 1)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && self.x + self.width >= other.x
            && self.y <= other.y + other.height
            && self.y + self.height >= other.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}+{}x{}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn test_symmetry() {
        let rects = [
            Rect::new(0, 0, 1, 1),
            Rect::new(3, 1, 1, 1),
            Rect::new(0, 0, 3, 1),
            Rect::new(5, 0, 3, 1),
            Rect::new(2, 2, 2, 1),
            Rect::new(6, 2, 3, 1),
            Rect::new(4, 4, 1, 1),
            Rect::new(0, 9, 10, 1),
        ];

        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersects(b), b.intersects(a), "{a} and {b}");
            }
        }
    }

    #[test]
    fn test_inclusive_boundaries() {
        let c = 5;
        let r = 3;
        let symbol = Rect::new(c, r, 1, 1);

        for k in 0..4 {
            for y in [r - 1, r, r + 1] {
                // Number ending right before the symbol.
                let left = Rect::new(c - 1 - k, y, k + 1, 1);
                // Number starting right after the symbol.
                let right = Rect::new(c + 1, y, k + 1, 1);

                assert!(symbol.intersects(&left), "{symbol} and {left}");
                assert!(symbol.intersects(&right), "{symbol} and {right}");
            }
        }
    }

    #[test]
    fn test_not_adjacent() {
        let symbol = Rect::new(5, 3, 1, 1);

        assert!(!symbol.intersects(&Rect::new(1, 3, 3, 1)));
        assert!(!symbol.intersects(&Rect::new(7, 3, 2, 1)));
        assert!(!symbol.intersects(&Rect::new(5, 1, 1, 1)));
        assert!(!symbol.intersects(&Rect::new(4, 5, 3, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(3, 1, 1, 1).to_string(), "3,1+1x1");
    }
}
