/// An element's position among its ordered siblings (cells of a row, rows of a grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot<N> {
    element: N,
    siblings: Vec<N>,
    index: usize,
}

impl<N: Copy + Eq> Slot<N> {
    /// Locate `element` in `siblings`; `None` if it is not one of them.
    pub fn locate(element: N, siblings: Vec<N>) -> Option<Self> {
        let index = siblings.iter().position(|sibling| *sibling == element)?;
        Some(Self {
            element,
            siblings,
            index,
        })
    }

    #[inline]
    pub const fn element(&self) -> N {
        self.element
    }

    /// Following sibling, or `None` at the end.
    pub fn next(&self) -> Option<N> {
        self.siblings.get(self.index.checked_add(1)?).copied()
    }

    /// Preceding sibling, or `None` at the start.
    pub fn previous(&self) -> Option<N> {
        self.siblings.get(self.index.checked_sub(1)?).copied()
    }
}
