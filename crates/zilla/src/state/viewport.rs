//! Terminal geometry and list scrolling

/// Rows taken by the list pane's top and bottom border
const LIST_CHROME_ROWS: u16 = 2;

/// Split a total width into (list pane, detail pane) columns
///
/// The list gets a third of the width (rounded down), the detail pane the rest.
fn split_width(total: u16) -> (u16, u16) {
    let list = total / 3;
    (list, total - list)
}

/// Current terminal size plus the scroll position of the issue list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    /// Index of the first issue shown in the list pane
    pub scroll_offset: usize,
}

impl Viewport {
    pub fn list_width(&self) -> u16 {
        split_width(self.width).0
    }

    pub fn detail_width(&self) -> u16 {
        split_width(self.width).1
    }

    /// Number of issues that fit in the list pane (at least one)
    pub fn list_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(LIST_CHROME_ROWS)).max(1)
    }

    /// Adjust the scroll offset so `selected` is visible in a list of `len` items
    pub fn scroll_to(&mut self, selected: usize, len: usize) {
        let rows = self.list_rows();
        if len == 0 {
            self.scroll_offset = 0;
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + rows {
            self.scroll_offset = selected + 1 - rows;
        }

        // Don't leave empty rows at the bottom when the list fits
        let max_offset = len.saturating_sub(rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
