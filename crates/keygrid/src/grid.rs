//! Directional moves over a grid.

use crate::cell::Cell;
use crate::classify::{classify_cell, classify_row};
use crate::config::GridConfig;
use crate::host::Host;
use crate::keys::Direction;
use crate::row::Row;
use core::fmt::Debug;

/// Navigation over one grid element.
///
/// Every move is total: it returns either a landable target or the target it
/// was given, which callers read as "focus does not move".
#[derive(Clone, Debug)]
pub struct KeyGrid<N> {
    grid: N,
    config: GridConfig,
}

impl<N: Copy + Eq + Debug> KeyGrid<N> {
    pub const fn new(grid: N, config: GridConfig) -> Self {
        Self { grid, config }
    }

    #[inline]
    pub const fn grid(&self) -> N {
        self.grid
    }

    #[inline]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Dispatch to the move for `direction`.
    pub fn navigate<H: Host<Node = N>>(&self, host: &H, target: N, direction: Direction) -> N {
        let landed = match direction {
            Direction::Left => self.move_left(host, target),
            Direction::Up => self.move_up(host, target),
            Direction::Right => self.move_right(host, target),
            Direction::Down => self.move_down(host, target),
        };
        if landed == target {
            log::debug!("move {direction} from {target:?}: no landable target");
        } else {
            log::trace!("move {direction}: {target:?} -> {landed:?}");
        }
        landed
    }

    /// Next landable target to the right. Entering a composite cell lands on
    /// its first sub-widget.
    pub fn move_right<H: Host<Node = N>>(&self, host: &H, target: N) -> N {
        self.move_horizontal(host, target, Cell::next, Cell::select_from_before)
    }

    /// Next landable target to the left. Entering a composite cell lands on
    /// its last sub-widget.
    pub fn move_left<H: Host<Node = N>>(&self, host: &H, target: N) -> N {
        self.move_horizontal(host, target, Cell::previous, Cell::select_from_after)
    }

    pub fn move_up<H: Host<Node = N>>(&self, host: &H, target: N) -> N {
        self.move_vertical(host, target, Row::previous)
    }

    pub fn move_down<H: Host<Node = N>>(&self, host: &H, target: N) -> N {
        self.move_vertical(host, target, Row::next)
    }

    fn move_horizontal<H: Host<Node = N>>(
        &self,
        host: &H,
        target: N,
        step: fn(&Cell<N>) -> Option<N>,
        select: fn(&Cell<N>) -> Option<N>,
    ) -> N {
        let Some(start) = classify_cell(host, Some(target), &self.config) else {
            return target;
        };
        let mut candidate = classify_cell(host, step(&start), &self.config);
        while let Some(cell) = candidate {
            if cell.is_landable()
                && let Some(landing) = select(&cell)
            {
                return landing;
            }
            candidate = classify_cell(host, step(&cell), &self.config);
        }
        target
    }

    fn move_vertical<H: Host<Node = N>>(
        &self,
        host: &H,
        target: N,
        step: fn(&Row<N>) -> Option<N>,
    ) -> N {
        let config = &self.config;
        let Some((row_element, column)) = position_of(host, target, config) else {
            return target;
        };
        let Some(start) = classify_row(host, Some(row_element), self.grid, config) else {
            return target;
        };

        let mut candidate = classify_row(host, step(&start), self.grid, config);
        let row = loop {
            match candidate {
                None => return target,
                Some(row) if row.is_landable() => break row,
                Some(skipped) => {
                    candidate = classify_row(host, step(&skipped), self.grid, config);
                }
            }
        };

        // Ragged rows: a shorter row lands on its last cell.
        let Some(last) = row.cells().len().checked_sub(1) else {
            return target;
        };
        let mut index = column.min(last);
        loop {
            let landing = classify_cell(host, row.item(index), config)
                .filter(Cell::is_landable)
                .and_then(|cell| cell.select_from_before());
            if let Some(landing) = landing {
                return landing;
            }
            let Some(before) = index.checked_sub(1) else {
                return target;
            };
            index = before;
        }
    }
}

/// Row of the cell owning `target`, and that cell's column among the row's
/// cells. Sub-widgets resolve to their owning cell.
fn position_of<H: Host>(
    host: &H,
    target: H::Node,
    config: &GridConfig,
) -> Option<(H::Node, usize)> {
    let cell = host.closest(target, config.cell_selector())?;
    let row = host.closest(cell, config.row_selector())?;
    let column = host
        .query_all(row, config.cell_selector())
        .iter()
        .position(|candidate| *candidate == cell)?;
    Some((row, column))
}
