//! A parsed selector that remembers its source text.

use crate::{ElementAdapter, SelectorList, matches_selector_list, parse_selector_list};
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// A selector list together with the text it was parsed from.
///
/// Hosts backed by a native engine can hand [`Selector::as_str`] to their own
/// query primitive; everyone else matches through [`Selector::matches`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    source: String,
    list: SelectorList,
}

impl Selector {
    /// Parse selector text. Parsing never fails: list entries using syntax
    /// that cannot be matched (pseudo-classes other than `:not`,
    /// pseudo-elements) are dropped whole, so they never match.
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.trim().to_owned(),
            list: parse_selector_list(source),
        }
    }

    /// The trimmed source text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub const fn list(&self) -> &SelectorList {
        &self.list
    }

    /// True when the text held no usable selector. An empty selector matches nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.selectors.is_empty()
    }

    /// Match this selector against `element`.
    #[inline]
    pub fn matches<A: ElementAdapter>(&self, adapter: &A, element: A::Handle) -> bool {
        matches_selector_list(adapter, element, &self.list)
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(source))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.source)
    }
}
