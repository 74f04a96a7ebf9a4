/// Rectangle in grid coordinates; the origin may lie outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// First column (may be negative)
    pub left: isize,
    /// First row (may be negative)
    pub top: isize,
    /// Column count
    pub width: usize,
    /// Row count
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(left: isize, top: isize, width: usize, height: usize) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge, saturating at `isize::MAX`
    pub fn right(&self) -> isize {
        self.left.saturating_add(clamp_extent(self.width))
    }

    /// Exclusive bottom edge, saturating at `isize::MAX`
    pub fn bottom(&self) -> isize {
        self.top.saturating_add(clamp_extent(self.height))
    }

    /// True when the rectangle covers no cells
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Overlap of two rectangles, `None` when they do not share a cell
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            left,
            top,
            right.abs_diff(left),
            bottom.abs_diff(top),
        ))
    }
}

fn clamp_extent(extent: usize) -> isize {
    isize::try_from(extent).unwrap_or(isize::MAX)
}
