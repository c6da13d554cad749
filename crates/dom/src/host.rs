//! Selector matching and keygrid host primitives over [`Document`].

use crate::tree::Document;
use indextree::NodeId;
use keygrid::{FocusHost, Host};
use keygrid_selectors::{ElementAdapter, Selector};

impl ElementAdapter for Document {
    type Handle = NodeId;

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.parent_of(element)
            .filter(|parent| self.is_element(*parent))
    }

    fn previous_sibling_element(&self, element: NodeId) -> Option<NodeId> {
        self.previous_element_sibling(element)
    }

    fn tag_name(&self, element: NodeId) -> &str {
        self.tag(element).unwrap_or_default()
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        self.attr_value(element, name)
    }
}

impl Host for Document {
    type Node = NodeId;

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        self.is_element(node) && selector.matches(self, node)
    }

    fn query_all(&self, node: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.element_descendants(node)
            .filter(|descendant| selector.matches(self, *descendant))
            .collect()
    }

    fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if self.matches(candidate, selector) {
                return Some(candidate);
            }
            current = self.parent_of(candidate);
        }
        None
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attr_value(node, name)
    }
}

impl FocusHost for Document {
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.set_attr(node, name, value);
    }

    fn focus(&mut self, node: NodeId) {
        self.set_focused(node);
    }
}
