//! Classified cells and their horizontal neighbours.

use crate::slot::Slot;

/// A cell seen from the element that navigation is currently looking at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell<N> {
    Regular(RegularCell<N>),
    Skip(SkipCell<N>),
    Composite(CompositeCell<N>),
}

/// A plain cell; it is its own single focus target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegularCell<N> {
    slot: Slot<N>,
}

/// A cell (or sub-widget) carrying the skip marker. It keeps its slot in the
/// row but is never landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkipCell<N> {
    slot: Slot<N>,
}

/// Where inside a composite cell the classified element sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    /// On the cell element itself.
    Cell,
    /// On the sub-widget at this index.
    Widget(usize),
    /// On a descendant of the cell that is not a declared sub-widget.
    Inner,
}

/// A cell whose focus targets are its sub-widgets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeCell<N> {
    element: N,
    cell: Slot<N>,
    sub_widgets: Vec<N>,
    position: Position,
}

impl<N: Copy + Eq> RegularCell<N> {
    pub(crate) const fn new(slot: Slot<N>) -> Self {
        Self { slot }
    }
}

impl<N: Copy + Eq> SkipCell<N> {
    pub(crate) const fn new(slot: Slot<N>) -> Self {
        Self { slot }
    }
}

impl<N: Copy + Eq> CompositeCell<N> {
    /// `element` is either the cell of `cell` or one of its descendants.
    pub(crate) fn new(element: N, cell: Slot<N>, sub_widgets: Vec<N>) -> Self {
        let position = if element == cell.element() {
            Position::Cell
        } else {
            sub_widgets
                .iter()
                .position(|widget| *widget == element)
                .map_or(Position::Inner, Position::Widget)
        };
        Self {
            element,
            cell,
            sub_widgets,
            position,
        }
    }

    fn next(&self) -> Option<N> {
        if let Position::Widget(index) = self.position
            && let Some(widget) = index.checked_add(1).and_then(|after| self.sub_widgets.get(after))
        {
            return Some(*widget);
        }
        self.cell.next()
    }

    fn previous(&self) -> Option<N> {
        if let Position::Widget(index) = self.position
            && let Some(widget) = index.checked_sub(1).and_then(|before| self.sub_widgets.get(before))
        {
            return Some(*widget);
        }
        self.cell.previous()
    }

    fn select_from_before(&self) -> Option<N> {
        match self.position {
            Position::Cell => self.sub_widgets.first().copied(),
            Position::Widget(_) | Position::Inner => Some(self.element),
        }
    }

    fn select_from_after(&self) -> Option<N> {
        match self.position {
            Position::Cell => self.sub_widgets.last().copied(),
            Position::Widget(_) | Position::Inner => Some(self.element),
        }
    }
}

impl<N: Copy + Eq> Cell<N> {
    /// Next focus candidate to the right, or `None` at the end of the row.
    pub fn next(&self) -> Option<N> {
        match self {
            Self::Regular(cell) => cell.slot.next(),
            Self::Skip(cell) => cell.slot.next(),
            Self::Composite(cell) => cell.next(),
        }
    }

    /// Next focus candidate to the left, or `None` at the start of the row.
    pub fn previous(&self) -> Option<N> {
        match self {
            Self::Regular(cell) => cell.slot.previous(),
            Self::Skip(cell) => cell.slot.previous(),
            Self::Composite(cell) => cell.previous(),
        }
    }

    /// Landing target when arriving from the left.
    pub fn select_from_before(&self) -> Option<N> {
        match self {
            Self::Regular(cell) => Some(cell.slot.element()),
            Self::Skip(_) => None,
            Self::Composite(cell) => cell.select_from_before(),
        }
    }

    /// Landing target when arriving from the right.
    pub fn select_from_after(&self) -> Option<N> {
        match self {
            Self::Regular(cell) => Some(cell.slot.element()),
            Self::Skip(_) => None,
            Self::Composite(cell) => cell.select_from_after(),
        }
    }

    /// Whether navigation may stop on this cell. A composite cell without
    /// sub-widgets is passed through like a skip cell.
    pub fn is_landable(&self) -> bool {
        self.select_from_before().is_some()
    }
}
