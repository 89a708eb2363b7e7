//! Responsive desktop icon grid sizing.

/// Icon cell width in CSS pixels (icon plus label).
pub const ICON_CELL_WIDTH: i32 = 96;
/// Icon cell height in CSS pixels (icon plus two label lines).
pub const ICON_CELL_HEIGHT: i32 = 104;
/// Gap between cells.
pub const ICON_GRID_GAP: i32 = 8;
/// Padding on every side of the grid container.
pub const ICON_GRID_PADDING: i32 = 16;

/// Measured grid container size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSize {
    /// Client width.
    pub width: i32,
    /// Client height.
    pub height: i32,
}

/// Column and row counts of the icon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGridLayout {
    /// Icons per row.
    pub columns: usize,
    /// Number of rows, at least one.
    pub rows: usize,
}

impl IconGridLayout {
    /// Number of cells.
    pub fn capacity(self) -> usize {
        self.columns * self.rows
    }

    /// CSS `grid-template-*` declarations for this layout.
    pub fn style(self) -> String {
        format!(
            "grid-template-columns:repeat({}, 1fr);grid-template-rows:repeat({}, 1fr);",
            self.columns, self.rows
        )
    }
}

fn cells_along(extent: i32, cell: i32) -> usize {
    let usable = extent - 2 * ICON_GRID_PADDING + ICON_GRID_GAP;
    if usable <= 0 {
        return 1;
    }
    ((usable / (cell + ICON_GRID_GAP)) as usize).max(1)
}

/// Computes how many columns and rows of icons fit `container`.
///
/// Columns fill the width first. Rows fill the height, and grow past it only when the icons
/// would not fit otherwise, so every icon always has a cell.
pub fn compute_icon_grid(container: ContainerSize, icon_count: usize) -> IconGridLayout {
    let columns = cells_along(container.width, ICON_CELL_WIDTH);
    let fitting_rows = cells_along(container.height, ICON_CELL_HEIGHT);
    let needed_rows = icon_count.div_ceil(columns).max(1);
    IconGridLayout {
        columns,
        rows: fitting_rows.max(needed_rows),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn size(width: i32, height: i32) -> ContainerSize {
        ContainerSize { width, height }
    }

    #[test]
    fn desktop_sized_container_fits_many_cells() {
        // (1024 - 32 + 8) / 104 = 9 columns, (700 - 32 + 8) / 112 = 6 rows
        assert_eq!(
            compute_icon_grid(size(1024, 700), 3),
            IconGridLayout {
                columns: 9,
                rows: 6
            }
        );
    }

    #[test]
    fn exact_fit_boundary_counts_the_last_cell() {
        let width = 2 * ICON_GRID_PADDING + 3 * ICON_CELL_WIDTH + 2 * ICON_GRID_GAP;
        assert_eq!(compute_icon_grid(size(width, 400), 1).columns, 3);
        assert_eq!(compute_icon_grid(size(width - 1, 400), 1).columns, 2);
    }

    #[test]
    fn tiny_or_unmeasured_container_still_gets_one_column() {
        assert_eq!(
            compute_icon_grid(size(0, 0), 3),
            IconGridLayout {
                columns: 1,
                rows: 3
            }
        );
        assert_eq!(compute_icon_grid(size(-20, 50), 0).capacity(), 1);
    }

    #[test]
    fn rows_grow_when_icons_exceed_visible_capacity() {
        let layout = compute_icon_grid(size(240, 150), 5);
        assert_eq!(layout.columns, 2);
        assert_eq!(layout.rows, 3);
        assert!(layout.capacity() >= 5);
    }

    #[test]
    fn style_emits_grid_templates() {
        let layout = IconGridLayout {
            columns: 4,
            rows: 2,
        };
        assert_eq!(
            layout.style(),
            "grid-template-columns:repeat(4, 1fr);grid-template-rows:repeat(2, 1fr);"
        );
    }
}
