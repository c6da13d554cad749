use anyhow::{Context as _, Result};
use keygrid::{FocusHost as _, Host as _, Selector};
use keygrid_dom::parse_html;

const GRID: &str = r#"
<div role="grid" id="grid">
  <div role="row" id="r1">
    <span role="gridcell" id="a">a</span>
    <span role="gridcell" id="b" data-keyboard-selector="button">
      <button id="ok">ok</button><button id="cancel">cancel</button>
    </span>
  </div>
  <div role="row" id="r2" data-keyboard-skip="true">
    <span role="gridcell" id="c">c</span>
  </div>
</div>"#;

fn init_logger() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
}

#[test]
fn query_all_returns_descendants_in_document_order() -> Result<()> {
    init_logger();
    let doc = parse_html(GRID)?;
    let grid = doc.get_element_by_id("grid").context("grid")?;
    let cells = doc.query_all(grid, &Selector::parse("[role=gridcell]"));
    let ids: Vec<_> = cells
        .iter()
        .filter_map(|cell| doc.attribute(*cell, "id"))
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    // The node itself is never part of its own query.
    assert!(doc.query_all(grid, &Selector::parse("#grid")).is_empty());
    Ok(())
}

#[test]
fn closest_is_inclusive() -> Result<()> {
    init_logger();
    let doc = parse_html(GRID)?;
    let ok = doc.get_element_by_id("ok").context("ok")?;
    let cell = doc.get_element_by_id("b").context("b")?;
    let row = doc.get_element_by_id("r1").context("r1")?;
    let cell_selector = Selector::parse("[role=gridcell]");

    assert_eq!(doc.closest(ok, &cell_selector), Some(cell));
    assert_eq!(doc.closest(cell, &cell_selector), Some(cell));
    assert_eq!(doc.closest(ok, &Selector::parse("[role=row]")), Some(row));
    assert_eq!(doc.closest(row, &cell_selector), None);
    Ok(())
}

#[test]
fn marker_attributes_are_visible_to_the_host() -> Result<()> {
    init_logger();
    let doc = parse_html(GRID)?;
    let composite = doc.get_element_by_id("b").context("b")?;
    let skipped = doc.get_element_by_id("r2").context("r2")?;
    assert_eq!(doc.attribute(composite, "data-keyboard-selector"), Some("button"));
    assert_eq!(doc.attribute(skipped, "data-keyboard-skip"), Some("true"));
    assert!(!doc.has_attribute(composite, "data-keyboard-skip"));
    Ok(())
}

#[test]
fn focus_and_attribute_side_effects() -> Result<()> {
    init_logger();
    let mut doc = parse_html(GRID)?;
    let cell = doc.get_element_by_id("a").context("a")?;
    doc.set_attribute(cell, "tabindex", "0");
    doc.focus(cell);
    assert_eq!(doc.attribute(cell, "tabindex"), Some("0"));
    assert_eq!(doc.focused(), Some(cell));
    Ok(())
}
