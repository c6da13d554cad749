//! Classified rows and their vertical neighbours.

use crate::slot::Slot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row<N> {
    Regular(RegularRow<N>),
    Skip(SkipRow<N>),
}

/// A row that can receive vertical moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegularRow<N> {
    slot: Slot<N>,
    cells: Vec<N>,
}

/// A row carrying the skip marker; vertical moves pass through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkipRow<N> {
    slot: Slot<N>,
}

impl<N: Copy + Eq> RegularRow<N> {
    pub(crate) const fn new(slot: Slot<N>, cells: Vec<N>) -> Self {
        Self { slot, cells }
    }

    /// Matched cells of this row, in document order.
    #[inline]
    pub fn cells(&self) -> &[N] {
        &self.cells
    }

    /// The cell at `index`, or `None` past the end of the row.
    pub fn item(&self, index: usize) -> Option<N> {
        self.cells.get(index).copied()
    }
}

impl<N: Copy + Eq> SkipRow<N> {
    pub(crate) const fn new(slot: Slot<N>) -> Self {
        Self { slot }
    }
}

impl<N: Copy + Eq> Row<N> {
    const fn slot(&self) -> &Slot<N> {
        match self {
            Self::Regular(row) => &row.slot,
            Self::Skip(row) => &row.slot,
        }
    }

    /// Following row of the grid, or `None` after the last one.
    pub fn next(&self) -> Option<N> {
        self.slot().next()
    }

    /// Preceding row of the grid, or `None` before the first one.
    pub fn previous(&self) -> Option<N> {
        self.slot().previous()
    }

    /// Matched cells of a regular row; skip rows expose none.
    pub fn cells(&self) -> &[N] {
        match self {
            Self::Regular(row) => row.cells(),
            Self::Skip(_) => &[],
        }
    }

    /// The cell at `index`; skip rows expose no cells.
    pub fn item(&self, index: usize) -> Option<N> {
        match self {
            Self::Regular(row) => row.item(index),
            Self::Skip(_) => None,
        }
    }

    pub const fn is_landable(&self) -> bool {
        matches!(self, Self::Regular(_))
    }
}
