//! Selectors Level 3, the subset needed to describe grid rows, cells and
//! composite sub-widgets.
//! Reference: <https://www.w3.org/TR/selectors-3/>
//!
//! Supported:
//! - Type, class, id, attribute presence and attribute equals selectors
//! - Negation `:not(...)` over compound selectors; selectors using any other
//!   pseudo-class or pseudo-element are dropped from their list
//! - Combinators: descendant, child, adjacent sibling, general sibling
//! - Comma separated selector lists
//!
//! Matching goes through [`ElementAdapter`] so any tree can be queried.

mod matcher;
mod parser;
mod selector;

pub use matcher::{matches_complex, matches_compound, matches_selector_list};
pub use parser::{parse_complex_selector, parse_selector_list};
pub use selector::Selector;

/// An adapter that abstracts tree access for selector matching.
/// Implement this for your DOM layer.
///
/// Selectors-3 references:
/// - §3: Selectors overview and element matching
pub trait ElementAdapter {
    type Handle: Copy + Eq;

    /// Parent element if any.
    /// Selectors-3 §11: Combinators (for tree relationships)
    fn parent(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Previous sibling element (skip non-elements if your DOM has mixed nodes).
    /// Selectors-3 §11: Sibling combinators
    fn previous_sibling_element(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Tag name in ASCII lowercase (per HTML parsing conventions).
    /// Selectors-3 §5: Type selectors
    fn tag_name(&self, element: Self::Handle) -> &str;

    /// Returns the attribute value if present.
    /// Selectors-3 §8: Attribute selectors
    fn attr(&self, element: Self::Handle, name: &str) -> Option<&str>;

    /// Returns Some(id) if the element has an id attribute, else None.
    /// Selectors-3 §7: ID selectors
    fn element_id(&self, element: Self::Handle) -> Option<&str> {
        self.attr(element, "id")
    }

    /// True if the element has the given class token.
    /// Selectors-3 §6: Class selectors
    fn has_class(&self, element: Self::Handle, class: &str) -> bool {
        self.attr(element, "class").is_some_and(|classes| {
            classes
                .split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case(class))
        })
    }
}

/// Simple selectors (subset).
/// Selectors-3 §5, 6, 7, 8
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Selectors-3 §5: Type selectors
    Type(String),
    /// Selectors-3 §6: Class selectors
    Class(String),
    /// Selectors-3 §7: ID selectors
    IdSelector(String),
    /// Selectors-3 §8: Attribute selectors [attr]
    AttrExists(String),
    /// Selectors-3 §8: Attribute selectors [attr=value]
    AttrEquals { name: String, value: String },
    /// Selectors-3 §5: Universal selector
    Universal,
    /// Selectors-3 §6.6.7: Negation `:not(...)`; matches when none of the compounds do
    Not(Vec<CompoundSelector>),
}

/// A compound selector is a sequence of simple selectors (no combinators).
/// Selectors-3 §5: Simple selector sequences
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// True when no simple selector was parsed into this compound.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.simples.is_empty()
    }
}

/// Combinators between compounds.
/// Selectors-3 §11: Combinators
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

/// A complex selector is one or more compounds separated by combinators.
/// `rest[i].0` is the combinator joining the compound before it to `rest[i].1`.
/// Selectors-3 §3, 11
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ComplexSelector {
    pub first: CompoundSelector,
    pub rest: Vec<(Combinator, CompoundSelector)>,
}

/// A selector list separated by commas.
/// Selectors-3 §4: Groups of selectors
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}
