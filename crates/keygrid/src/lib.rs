//! Arrow-key navigation for grid-like structures in a document tree.
//!
//! Given the element that currently has focus inside a grid (an HTML table or
//! an ARIA grid) and a [`Direction`], [`KeyGrid`] computes the element that
//! should receive focus next. Rows and cells are located purely structurally
//! through the selectors of a [`GridConfig`]; two marker attributes refine the
//! walk:
//!
//! - the skip marker (`data-keyboard-skip`) keeps a row or cell in place but
//!   never lands on it,
//! - the selector marker (`data-keyboard-selector`) turns a cell into a
//!   composite cell whose matching descendants are the real focus targets.
//!
//! # Architecture
//!
//! ```text
//! FocusController  (key -> direction, roving tabindex, focus side effects)
//!     ↓
//! KeyGrid          (move_left / move_right / move_up / move_down)
//!     ↓
//! Row / Cell       (positional next / previous, landing targets)
//!     ↓
//! classify         (regular | skip | composite, from markers and selectors)
//!     ↓
//! Host             (matches, query_all, closest, attributes)
//! ```
//!
//! Nothing is cached between moves: every call re-reads rows and cells from
//! the live tree, so structural mutations are always observed.

#![allow(
    clippy::module_name_repetitions,
    reason = "Types like RegularCell and GridConfig read better than their bare names"
)]

mod cell;
mod classify;
mod config;
mod focus;
mod grid;
mod host;
mod keys;
mod row;
mod slot;

pub use cell::{Cell, CompositeCell, RegularCell, SkipCell};
pub use classify::{classify_cell, classify_row};
pub use config::{DEFAULT_CELL_SELECTOR, DEFAULT_ROW_SELECTOR, GridConfig, Markers, SkipMarker};
pub use focus::FocusController;
pub use grid::KeyGrid;
pub use host::{FocusHost, Host};
pub use keys::{Direction, Key};
pub use keygrid_selectors::Selector;
pub use row::{RegularRow, Row, SkipRow};
pub use slot::Slot;
