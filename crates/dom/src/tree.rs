use anyhow::{Error, anyhow};
use indextree::{Arena, Node, NodeId};
use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Document,
    Element { tag: String },
    Text { text: String },
    Comment { text: String },
}

#[derive(Debug, Clone, Default)]
pub struct DOMNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<[(String, String); 4]>,
}

/// An owned document tree plus the element that currently has focus.
#[derive(Debug)]
pub struct Document {
    arena: Arena<DOMNode>,
    root: NodeId,
    focused: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document holding only its root node.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(DOMNode::default()),
            arena,
            focused: None,
        }
    }

    #[inline]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, node: NodeId) -> Option<&DOMNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get)
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut DOMNode> {
        self.arena
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get_mut)
    }

    /// Create a detached element. Tag names are stored in ASCII lowercase.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(DOMNode {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            attrs: SmallVec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(DOMNode {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            attrs: SmallVec::new(),
        })
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.arena.new_node(DOMNode {
            kind: NodeKind::Comment {
                text: text.to_owned(),
            },
            attrs: SmallVec::new(),
        })
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    /// Returns an error if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|error| anyhow!("cannot append {child:?} to {parent:?}: {error:?}"))
    }

    /// Create an element with `attrs` and append it to `parent`.
    ///
    /// # Errors
    /// Returns an error if the element cannot be appended.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId, Error> {
        let element = self.create_element(tag);
        for &(name, value) in attrs {
            self.set_attr(element, name, value);
        }
        self.append_child(parent, element)?;
        Ok(element)
    }

    /// Detach `node` and drop it together with its descendants.
    pub fn remove(&mut self, node: NodeId) {
        if self.focused.is_some_and(|focused| {
            focused.ancestors(&self.arena).any(|ancestor| ancestor == node)
        }) {
            self.focused = None;
        }
        node.remove_subtree(&mut self.arena);
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.node(node)
            .is_some_and(|entry| matches!(entry.kind, NodeKind::Element { .. }))
    }

    /// Lowercase tag name, or `None` for non-elements.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Document | NodeKind::Text { .. } | NodeKind::Comment { .. } => None,
        }
    }

    pub fn attr_value(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set or replace an attribute. Attribute names are stored in ASCII lowercase.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(entry) = self.node_mut(node) else {
            log::warn!("set_attr on missing node {node:?}");
            return;
        };
        let name = name.to_ascii_lowercase();
        if let Some(existing) = entry.attrs.iter_mut().find(|(attr_name, _)| *attr_name == name) {
            value.clone_into(&mut existing.1);
        } else {
            entry.attrs.push((name, value.to_owned()));
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(entry) = self.node_mut(node) {
            entry
                .attrs
                .retain(|(attr_name, _)| !attr_name.eq_ignore_ascii_case(name));
        }
    }

    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        node.parent(&self.arena)
    }

    /// Element children of `node`, in document order.
    pub fn element_children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
            .filter(|child| self.is_element(*child))
    }

    /// Element descendants of `node` (excluding `node`), in document order.
    pub fn element_descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.descendants(&self.arena)
            .skip(1)
            .filter(|descendant| self.is_element(*descendant))
    }

    /// Preceding element sibling of `node`.
    pub fn previous_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        node.preceding_siblings(&self.arena)
            .skip(1)
            .find(|sibling| self.is_element(*sibling))
    }

    /// First element in document order whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.element_descendants(self.root)
            .find(|node| self.attr_value(*node, "id") == Some(id))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node: NodeId) -> String {
        node.descendants(&self.arena)
            .filter_map(|descendant| match &self.node(descendant)?.kind {
                NodeKind::Text { text } => Some(text.as_str()),
                NodeKind::Document | NodeKind::Element { .. } | NodeKind::Comment { .. } => None,
            })
            .collect()
    }

    /// The element that last received focus.
    #[inline]
    pub const fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn set_focused(&mut self, node: NodeId) {
        if self.is_element(node) {
            self.focused = Some(node);
        } else {
            log::warn!("refusing to focus non-element node {node:?}");
        }
    }
}
