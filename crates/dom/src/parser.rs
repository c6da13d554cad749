//! HTML5 parsing using html5ever.

use crate::tree::Document;
use anyhow::{Context as _, Error};
use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use indextree::NodeId;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Parse a complete HTML document into a [`Document`].
///
/// Whitespace-only text, doctypes and processing instructions are dropped.
/// Markup fragments are fine: the HTML5 tree builder wraps them in
/// `html`/`body`, and table rows get their implied `tbody`.
///
/// # Errors
/// Returns an error if the input cannot be read or the tree cannot be built.
pub fn parse_html(html: &str) -> Result<Document, Error> {
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .context("failed to parse HTML")?;
    let mut document = Document::new();
    let root = document.root();
    convert_children(&mut document, &dom.document, root)?;
    log::debug!("parsed {} bytes of HTML", html.len());
    Ok(document)
}

/// Convert the children of an html5ever node into `parent`.
fn convert_children(document: &mut Document, rc_node: &Handle, parent: NodeId) -> Result<(), Error> {
    for child in rc_node.children.borrow().iter() {
        convert_node(document, child, parent)?;
    }
    Ok(())
}

fn convert_node(document: &mut Document, rc_node: &Handle, parent: NodeId) -> Result<(), Error> {
    match &rc_node.data {
        RcNodeData::Document => convert_children(document, rc_node, parent),
        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => Ok(()),
        RcNodeData::Text { contents } => {
            let text = contents.borrow();
            if text.trim().is_empty() {
                return Ok(());
            }
            let node = document.create_text(&text);
            document.append_child(parent, node)
        }
        RcNodeData::Comment { contents } => {
            let node = document.create_comment(contents);
            document.append_child(parent, node)
        }
        RcNodeData::Element { name, attrs, .. } => {
            let node = document.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                document.set_attr(node, &attr.name.local, &attr.value);
            }
            document.append_child(parent, node)?;
            convert_children(document, rc_node, node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;

    #[test]
    fn parses_a_table_with_implied_tbody() -> Result<(), Error> {
        let doc = parse_html(
            r#"<table id="grid"><tr id="r1"><td id="1">foo</td><td id="2">bar</td></tr></table>"#,
        )?;
        let table = doc.get_element_by_id("grid").context("table")?;
        let row = doc.get_element_by_id("r1").context("row")?;
        let tbody = doc.parent_of(row).context("row parent")?;
        assert_eq!(doc.tag(tbody), Some("tbody"));
        assert_eq!(doc.parent_of(tbody), Some(table));
        assert_eq!(doc.text_content(row), "foobar");
        Ok(())
    }

    #[test]
    fn keeps_attributes_and_drops_blank_text() -> Result<(), Error> {
        let doc = parse_html(
            "<div role=\"grid\">\n  <div role=\"row\" data-keyboard-skip>\n  </div>\n</div>",
        )?;
        let grid = doc
            .element_descendants(doc.root())
            .find(|node| doc.attr_value(*node, "role") == Some("grid"))
            .context("grid")?;
        let rows: Vec<_> = doc.element_children(grid).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(doc.attr_value(rows[0], "data-keyboard-skip"), Some(""));
        assert_eq!(doc.text_content(grid), "");
        Ok(())
    }
}
