//! Turns host nodes into [`Cell`] and [`Row`] views.
//!
//! Classification reads markers and selector matches from the live tree and
//! nothing else, so the same node always classifies the same way until the
//! tree changes.

use crate::cell::{Cell, CompositeCell, RegularCell, SkipCell};
use crate::config::GridConfig;
use crate::host::Host;
use crate::row::{RegularRow, Row, SkipRow};
use crate::slot::Slot;

/// Classify `node` as a cell.
///
/// Returns `None` for `None`, and for nodes that are not inside a cell of a
/// row matched by `config`.
pub fn classify_cell<H: Host>(
    host: &H,
    node: Option<H::Node>,
    config: &GridConfig,
) -> Option<Cell<H::Node>> {
    let node = node?;
    let markers = config.markers();
    let cell_element = host.closest(node, config.cell_selector())?;
    let row_element = host.closest(cell_element, config.row_selector())?;
    let slot = Slot::locate(
        cell_element,
        host.query_all(row_element, config.cell_selector()),
    )?;

    if markers.is_skipped(host, node) {
        return Some(Cell::Skip(SkipCell::new(slot)));
    }
    if node != cell_element || markers.is_composite(host, node) {
        let sub_widgets = markers
            .composite_selector(host, cell_element)
            .map(|selector| {
                host.query_all(cell_element, &selector)
                    .into_iter()
                    .filter(|widget| !markers.is_skipped(host, *widget))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        if node == cell_element && sub_widgets.is_empty() {
            log::debug!("composite cell {cell_element:?} has no sub-widgets, passing through");
        }
        return Some(Cell::Composite(CompositeCell::new(node, slot, sub_widgets)));
    }
    Some(Cell::Regular(RegularCell::new(slot)))
}

/// Classify `node` as a row of `grid`.
///
/// Returns `None` for `None` and for nodes that are not rows of `grid`.
pub fn classify_row<H: Host>(
    host: &H,
    node: Option<H::Node>,
    grid: H::Node,
    config: &GridConfig,
) -> Option<Row<H::Node>> {
    let node = node?;
    let slot = Slot::locate(node, host.query_all(grid, config.row_selector()))?;
    if config.markers().is_skipped(host, node) {
        return Some(Row::Skip(SkipRow::new(slot)));
    }
    let cells = host.query_all(node, config.cell_selector());
    Some(Row::Regular(RegularRow::new(slot, cells)))
}
