#![allow(dead_code, reason = "Each test binary uses a different subset of helpers")]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result, anyhow};
use keygrid::{Direction, GridConfig, Host as _, KeyGrid};
use keygrid_dom::{Document, NodeId, parse_html};

pub fn init_logger() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
}

/// Returns the directory containing HTML fixtures for integration tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn read_fixture(name: &str) -> Result<String> {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).with_context(|| format!("failed to read fixture {}", path.display()))
}

/// A parsed document with a grid rooted at `#grid`.
pub struct Page {
    pub doc: Document,
    pub grid: KeyGrid<NodeId>,
}

impl Page {
    /// Parse `html` and navigate the `#grid` element as an HTML table.
    pub fn table(html: &str) -> Result<Self> {
        Self::with_config(html, GridConfig::default())
    }

    pub fn with_config(html: &str, config: GridConfig) -> Result<Self> {
        init_logger();
        let doc = parse_html(html)?;
        let grid = doc.get_element_by_id("grid").context("fixture has no #grid")?;
        Ok(Self {
            doc,
            grid: KeyGrid::new(grid, config),
        })
    }

    pub fn fixture(name: &str, config: GridConfig) -> Result<Self> {
        Self::with_config(&read_fixture(name)?, config)
    }

    pub fn node(&self, id: &str) -> Result<NodeId> {
        self.doc
            .get_element_by_id(id)
            .ok_or_else(|| anyhow!("no element with id {id}"))
    }

    /// The id of `node`, for readable assertions.
    pub fn id_of(&self, node: NodeId) -> Result<String> {
        self.doc
            .attribute(node, "id")
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("element {node:?} has no id"))
    }

    /// Move from the element with id `from` and return the id of the landing element.
    pub fn step(&self, from: &str, direction: Direction) -> Result<String> {
        let target = self.node(from)?;
        self.id_of(self.grid.navigate(&self.doc, target, direction))
    }

    pub fn right(&self, from: &str) -> Result<String> {
        self.step(from, Direction::Right)
    }

    pub fn left(&self, from: &str) -> Result<String> {
        self.step(from, Direction::Left)
    }

    pub fn up(&self, from: &str) -> Result<String> {
        self.step(from, Direction::Up)
    }

    pub fn down(&self, from: &str) -> Result<String> {
        self.step(from, Direction::Down)
    }
}

/// A one-table document; `rows` is the inner HTML of its `tbody`.
pub fn table_html(rows: &str) -> String {
    format!(r#"<table id="grid"><tbody>{rows}</tbody></table>"#)
}
