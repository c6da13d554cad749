//! A small document tree that keyboard grids can navigate.
//!
//! [`Document`] keeps nodes in an [`indextree::Arena`] and implements both
//! the selector [`ElementAdapter`](keygrid_selectors::ElementAdapter) and the
//! [`keygrid::Host`]/[`keygrid::FocusHost`] traits. Documents are built
//! programmatically or parsed from HTML with [`parse_html`].

#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

mod host;
mod parser;
mod tree;

pub use indextree::NodeId;
pub use parser::parse_html;
pub use tree::{DOMNode, Document, NodeKind};
