//! Roving tabindex focus management for one grid.

use crate::config::GridConfig;
use crate::grid::KeyGrid;
use crate::host::{FocusHost, Host};
use crate::keys::{Direction, Key};
use core::fmt::Debug;

const TABINDEX: &str = "tabindex";
const FOCUSABLE: &str = "0";
const NOT_TABBABLE: &str = "-1";

/// Keeps exactly one cell of a grid in the tab order and moves it with the
/// arrow keys.
///
/// The host forwards its key presses on the grid to [`handle_key`] and focus
/// events on [`composite_cells`] to [`handle_focus`].
///
/// [`handle_key`]: FocusController::handle_key
/// [`handle_focus`]: FocusController::handle_focus
/// [`composite_cells`]: FocusController::composite_cells
#[derive(Clone, Debug)]
pub struct FocusController<N> {
    key_grid: KeyGrid<N>,
    last_focused: Option<N>,
}

impl<N: Copy + Eq + Debug> FocusController<N> {
    /// Initialise the roving tabindex of `grid`: every navigable cell gets
    /// `tabindex="-1"` except the first one in document order, which gets `"0"`.
    /// Skip rows and skip cells are left untouched.
    pub fn attach<H: FocusHost<Node = N>>(host: &mut H, grid: N, config: GridConfig) -> Self {
        let mut first = None;
        let mut navigable = 0_usize;
        let markers = config.markers();
        for row in host.query_all(grid, config.row_selector()) {
            if markers.is_skipped(&*host, row) {
                continue;
            }
            for cell in host.query_all(row, config.cell_selector()) {
                if markers.is_skipped(&*host, cell) {
                    continue;
                }
                first.get_or_insert(cell);
                navigable = navigable.saturating_add(1);
                host.set_attribute(cell, TABINDEX, NOT_TABBABLE);
            }
        }
        if let Some(cell) = first {
            host.set_attribute(cell, TABINDEX, FOCUSABLE);
            log::debug!("grid {grid:?}: {navigable} navigable cells, {cell:?} in tab order");
        } else {
            log::warn!("grid {grid:?} has no navigable cell");
        }
        Self {
            key_grid: KeyGrid::new(grid, config),
            last_focused: first,
        }
    }

    #[inline]
    pub const fn key_grid(&self) -> &KeyGrid<N> {
        &self.key_grid
    }

    /// The element currently holding `tabindex="0"`.
    #[inline]
    pub const fn last_focused(&self) -> Option<N> {
        self.last_focused
    }

    /// Cells declaring sub-widgets; focus landing on them is redirected by
    /// [`FocusController::handle_focus`].
    pub fn composite_cells<H: Host<Node = N>>(&self, host: &H) -> Vec<N> {
        let config = self.key_grid.config();
        host.query_all(self.key_grid.grid(), config.cell_selector())
            .into_iter()
            .filter(|cell| config.markers().is_composite(host, *cell))
            .collect()
    }

    /// Move focus arriving on a composite cell to its first sub-widget.
    /// Returns the sub-widget focused, or `None` if `target` is not a
    /// composite cell with sub-widgets.
    pub fn handle_focus<H: FocusHost<Node = N>>(&self, host: &mut H, target: N) -> Option<N> {
        let config = self.key_grid.config();
        let markers = config.markers();
        if !host.matches(target, config.cell_selector()) {
            return None;
        }
        let selector = markers.composite_selector(&*host, target)?;
        let widget = host
            .query_all(target, &selector)
            .into_iter()
            .find(|widget| !markers.is_skipped(&*host, *widget))?;
        host.focus(widget);
        Some(widget)
    }

    /// Handle a key press on `target`. Non-arrow keys are ignored.
    /// Returns the newly focused element, or `None` when focus stays.
    pub fn handle_key<'name, H: FocusHost<Node = N>>(
        &mut self,
        host: &mut H,
        target: N,
        key: impl Into<Key<'name>>,
    ) -> Option<N> {
        let direction = key.into().direction()?;
        self.handle_direction(host, target, direction)
    }

    /// Move from `target` in `direction` and apply the roving tabindex.
    pub fn handle_direction<H: FocusHost<Node = N>>(
        &mut self,
        host: &mut H,
        target: N,
        direction: Direction,
    ) -> Option<N> {
        let landed = self.key_grid.navigate(&*host, target, direction);
        if landed == target {
            return None;
        }
        if let Some(previous) = self.last_focused.replace(landed) {
            host.set_attribute(previous, TABINDEX, NOT_TABBABLE);
        }
        host.set_attribute(landed, TABINDEX, FOCUSABLE);
        host.focus(landed);
        Some(landed)
    }
}
