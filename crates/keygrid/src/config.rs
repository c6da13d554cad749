//! Grid configuration: row/cell selectors and marker attributes.

use crate::host::Host;
use anyhow::{Context as _, Error};
use keygrid_selectors::Selector;
use serde::Deserialize;

/// Rows of an HTML table.
pub const DEFAULT_ROW_SELECTOR: &str = "tr";
/// Data and header cells of an HTML table.
pub const DEFAULT_CELL_SELECTOR: &str = "td,th";

/// How the skip attribute is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipMarker {
    /// Any occurrence of the attribute marks a skip, whatever its value.
    #[default]
    Present,
    /// Only the value `"true"` (ASCII case-insensitive) marks a skip.
    True,
}

/// Marker attribute names recognised on rows and cells.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Markers {
    /// Excludes a row or cell from landing while keeping its slot.
    pub skip_attribute: String,
    /// Holds the selector of a composite cell's sub-widgets.
    pub selector_attribute: String,
    pub skip_policy: SkipMarker,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            skip_attribute: String::from("data-keyboard-skip"),
            selector_attribute: String::from("data-keyboard-selector"),
            skip_policy: SkipMarker::Present,
        }
    }
}

impl Markers {
    /// True if `node` carries the skip marker under the configured policy.
    pub fn is_skipped<H: Host>(&self, host: &H, node: H::Node) -> bool {
        match self.skip_policy {
            SkipMarker::Present => host.has_attribute(node, &self.skip_attribute),
            SkipMarker::True => host
                .attribute(node, &self.skip_attribute)
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("true")),
        }
    }

    /// True if `node` declares sub-widgets.
    pub fn is_composite<H: Host>(&self, host: &H, node: H::Node) -> bool {
        host.has_attribute(node, &self.selector_attribute)
    }

    /// The sub-widget selector declared on `node`, if any.
    pub fn composite_selector<H: Host>(&self, host: &H, node: H::Node) -> Option<Selector> {
        host.attribute(node, &self.selector_attribute)
            .map(Selector::parse)
    }
}

/// Immutable description of how a grid is laid out in the host tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawGridConfig")]
pub struct GridConfig {
    row_selector: Selector,
    cell_selector: Selector,
    markers: Markers,
}

impl GridConfig {
    pub fn new(row_selector: &str, cell_selector: &str) -> Self {
        Self {
            row_selector: Selector::parse(row_selector),
            cell_selector: Selector::parse(cell_selector),
            markers: Markers::default(),
        }
    }

    /// ARIA grid: `[role=row]` rows holding `[role=gridcell]` cells.
    pub fn aria() -> Self {
        Self::new("[role=row]", "[role=gridcell],[role=columnheader],[role=rowheader]")
    }

    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```json
    /// { "rowSelector": "[role=row]", "markers": { "skipPolicy": "true" } }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON or contains unknown fields.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).context("invalid grid configuration")
    }

    #[inline]
    pub const fn row_selector(&self) -> &Selector {
        &self.row_selector
    }

    #[inline]
    pub const fn cell_selector(&self) -> &Selector {
        &self.cell_selector
    }

    #[inline]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_SELECTOR, DEFAULT_CELL_SELECTOR)
    }
}

/// Wire form of [`GridConfig`]; selectors arrive as text.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
struct RawGridConfig {
    row_selector: String,
    cell_selector: String,
    markers: Markers,
}

impl Default for RawGridConfig {
    fn default() -> Self {
        Self {
            row_selector: String::from(DEFAULT_ROW_SELECTOR),
            cell_selector: String::from(DEFAULT_CELL_SELECTOR),
            markers: Markers::default(),
        }
    }
}

impl From<RawGridConfig> for GridConfig {
    fn from(raw: RawGridConfig) -> Self {
        Self::new(&raw.row_selector, &raw.cell_selector).with_markers(raw.markers)
    }
}
