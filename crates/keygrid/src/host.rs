//! Primitives the host tree must supply.

use core::fmt::Debug;
use keygrid_selectors::Selector;

/// Read access to the document tree a grid lives in.
///
/// Navigation never constructs nodes; it only asks the host about ancestry,
/// descendants and attributes of nodes it was handed.
pub trait Host {
    /// Opaque handle to an element.
    type Node: Copy + Eq + Debug;

    /// True if `node` matches `selector`.
    fn matches(&self, node: Self::Node, selector: &Selector) -> bool;

    /// Descendants of `node` (excluding `node`) matching `selector`, in document order.
    fn query_all(&self, node: Self::Node, selector: &Selector) -> Vec<Self::Node>;

    /// Nearest inclusive ancestor of `node` matching `selector`.
    fn closest(&self, node: Self::Node, selector: &Selector) -> Option<Self::Node>;

    /// Attribute value, if the attribute is present.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }
}

/// Side effects the focus controller applies after a move.
pub trait FocusHost: Host {
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Give keyboard focus to `node`.
    fn focus(&mut self, node: Self::Node);
}
