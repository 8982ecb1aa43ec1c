//! Card grid layout
//!
//! Cards flow left to right and wrap onto the next row, like a wrapping
//! flex row. The column count follows the available width.
//!
//! ```text
//! Index:  0 1 2
//!         3 4
//! ```

use std::ops::Range;

/// Card width in cells, border included
pub const CARD_WIDTH: u16 = 14;
/// Card height in cells, border included
pub const CARD_HEIGHT: u16 = 5;
/// Gap between cards
pub const CARD_GAP: u16 = 2;

/// Grid layout for a given area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns (at least 1)
    pub columns: u16,
    /// Number of rows that fit on screen (at least 1)
    pub visible_rows: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            visible_rows: 2,
        }
    }
}

impl GridLayout {
    pub fn new(columns: u16, visible_rows: u16) -> Self {
        Self {
            columns: columns.max(1),
            visible_rows: visible_rows.max(1),
        }
    }

    /// Fit as many cards as the area allows
    pub fn fit(width: u16, height: u16) -> Self {
        let columns = width.saturating_add(CARD_GAP) / (CARD_WIDTH + CARD_GAP);
        let rows = height / CARD_HEIGHT;
        Self::new(columns, rows)
    }

    /// Total number of visible cards (columns × rows)
    pub fn visible_count(&self) -> usize {
        (self.columns as usize) * (self.visible_rows as usize)
    }

    /// Width of a full row of cards
    pub fn row_width(&self, total: usize) -> u16 {
        let cols = (self.columns as usize).min(total).max(1) as u16;
        cols * CARD_WIDTH + (cols - 1) * CARD_GAP
    }

    /// Page of cards containing `focused`
    pub fn visible_range(&self, focused: usize, total: usize) -> Range<usize> {
        if total == 0 {
            return 0..0;
        }

        let page_size = self.visible_count();
        let page = focused.min(total - 1) / page_size;
        let start = page * page_size;
        let end = (start + page_size).min(total);
        start..end
    }

    /// Convert flat index to (row, col), row-major
    pub fn index_to_position(&self, index: usize) -> (u16, u16) {
        let cols = self.columns as usize;
        ((index / cols) as u16, (index % cols) as u16)
    }

    pub fn move_left(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    pub fn move_right(&self, current: usize, total: usize) -> usize {
        (current + 1).min(total.saturating_sub(1))
    }

    pub fn move_up(&self, current: usize) -> usize {
        let cols = self.columns as usize;
        if current >= cols {
            current - cols
        } else {
            current
        }
    }

    pub fn move_down(&self, current: usize, total: usize) -> usize {
        let cols = self.columns as usize;
        if current + cols < total {
            current + cols
        } else {
            current
        }
    }

    pub fn move_end(&self, total: usize) -> usize {
        total.saturating_sub(1)
    }

    /// Tab navigation (next with wrap)
    pub fn tab_next(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            (current + 1) % total
        }
    }

    /// Shift+Tab navigation (previous with wrap)
    pub fn tab_prev(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else if current == 0 {
            total - 1
        } else {
            current - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        // 3 cards: 3*14 + 2*2 = 46
        assert_eq!(GridLayout::fit(46, 10), GridLayout::new(3, 2));
        assert_eq!(GridLayout::fit(45, 10).columns, 2);
        // Never zero
        assert_eq!(GridLayout::fit(0, 0), GridLayout::new(1, 1));
        // Widest possible area saturates instead of overflowing
        assert_eq!(GridLayout::fit(u16::MAX, 10).columns, u16::MAX / 16);
    }

    #[test]
    fn test_row_width() {
        let layout = GridLayout::new(3, 2);
        assert_eq!(layout.row_width(5), 46);
        assert_eq!(layout.row_width(1), 14);
    }

    #[test]
    fn test_index_to_position() {
        let layout = GridLayout::new(3, 2);
        assert_eq!(layout.index_to_position(0), (0, 0));
        assert_eq!(layout.index_to_position(2), (0, 2));
        assert_eq!(layout.index_to_position(3), (1, 0));
        assert_eq!(layout.index_to_position(4), (1, 1));
    }

    #[test]
    fn test_visible_range() {
        let layout = GridLayout::new(2, 1);
        assert_eq!(layout.visible_range(0, 5), 0..2);
        assert_eq!(layout.visible_range(3, 5), 2..4);
        assert_eq!(layout.visible_range(4, 5), 4..5);
        assert_eq!(layout.visible_range(0, 0), 0..0);
    }

    #[test]
    fn test_navigation() {
        let layout = GridLayout::new(3, 2);
        let total = 5;

        assert_eq!(layout.move_left(0), 0);
        assert_eq!(layout.move_right(4, total), 4);
        assert_eq!(layout.move_down(1, total), 4);
        // No card below index 2
        assert_eq!(layout.move_down(2, total), 2);
        assert_eq!(layout.move_up(4), 1);
        assert_eq!(layout.move_up(1), 1);
        assert_eq!(layout.move_end(total), 4);
    }

    #[test]
    fn test_tab_wrap() {
        let layout = GridLayout::new(3, 2);
        assert_eq!(layout.tab_next(4, 5), 0);
        assert_eq!(layout.tab_prev(0, 5), 4);
    }
}
