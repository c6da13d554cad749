use anyhow::Result;

mod common;

use common::{Page, table_html};

#[test]
fn move_up_clamps_to_a_shorter_row() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td><td id="2">b</td></tr>
           <tr><td id="11">c</td><td id="12">d</td><td id="13">e</td></tr>"#,
    ))?;
    assert_eq!(page.up("13")?, "2");
    assert_eq!(page.up("11")?, "1");
    // First row: focus stays.
    assert_eq!(page.up("2")?, "2");
    Ok(())
}

#[test]
fn move_down_keeps_the_column() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td><td id="2">b</td><td id="3">c</td></tr>
           <tr><td id="11">d</td><td id="12">e</td><td id="13">f</td></tr>"#,
    ))?;
    assert_eq!(page.down("1")?, "11");
    assert_eq!(page.down("2")?, "12");
    assert_eq!(page.down("3")?, "13");
    // Last row: focus stays.
    assert_eq!(page.down("12")?, "12");
    Ok(())
}

#[test]
fn move_down_clamps_to_a_shorter_row() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td><td id="2">b</td><td id="3">c</td></tr>
           <tr><td id="11">d</td></tr>"#,
    ))?;
    assert_eq!(page.down("3")?, "11");
    Ok(())
}

#[test]
fn skip_rows_are_passed_through() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr id="r1"><td id="1">a</td><td id="2">b</td></tr>
           <tr id="r2" data-keyboard-skip><td id="11">c</td><td id="12">d</td></tr>
           <tr id="r3"><td id="21">e</td><td id="22">f</td></tr>"#,
    ))?;
    assert_eq!(page.down("2")?, "22");
    assert_eq!(page.up("21")?, "1");
    Ok(())
}

#[test]
fn consecutive_skip_rows_are_passed_through() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td><td id="2">b</td></tr>
           <tr data-keyboard-skip><td id="11">c</td><td id="12">d</td></tr>
           <tr data-keyboard-skip><td id="21">e</td><td id="22">f</td></tr>
           <tr data-keyboard-skip><td id="31">g</td><td id="32">h</td></tr>
           <tr><td id="41">i</td><td id="42">j</td></tr>"#,
    ))?;
    assert_eq!(page.down("2")?, "42");
    assert_eq!(page.down("1")?, "41");
    assert_eq!(page.up("42")?, "2");
    assert_eq!(page.up("41")?, "1");
    Ok(())
}

#[test]
fn skip_rows_at_the_edge_keep_focus_in_place() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td></tr>
           <tr data-keyboard-skip><td id="11">b</td></tr>
           <tr data-keyboard-skip><td id="21">c</td></tr>"#,
    ))?;
    assert_eq!(page.down("1")?, "1");
    Ok(())
}

#[test]
fn skip_cell_in_the_landing_column_falls_back_leftwards() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td><td id="2">b</td><td id="3">c</td></tr>
           <tr><td id="11">d</td><td id="12" data-keyboard-skip>e</td><td id="13">f</td></tr>"#,
    ))?;
    assert_eq!(page.down("2")?, "11");
    assert_eq!(page.down("3")?, "13");
    Ok(())
}

#[test]
fn row_without_landable_cells_keeps_focus_in_place() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td><td id="2">b</td></tr>
           <tr><td id="11" data-keyboard-skip>c</td><td id="12" data-keyboard-skip>d</td></tr>"#,
    ))?;
    assert_eq!(page.down("2")?, "2");
    Ok(())
}

#[test]
fn row_without_cells_keeps_focus_in_place() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td></tr><tr id="empty"></tr>"#,
    ))?;
    assert_eq!(page.down("1")?, "1");
    Ok(())
}

#[test]
fn vertical_moves_into_a_composite_cell_land_on_its_first_sub_widget() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr><td id="1">a</td><td id="2">b</td></tr>
           <tr>
             <td id="11">c</td>
             <td id="12" data-keyboard-selector="button">
               <button id="ok">ok</button><button id="cancel">cancel</button>
             </td>
           </tr>
           <tr><td id="21">d</td><td id="22">e</td></tr>"#,
    ))?;
    assert_eq!(page.down("2")?, "ok");
    assert_eq!(page.up("22")?, "ok");
    Ok(())
}

#[test]
fn vertical_moves_from_a_sub_widget_use_its_cell_column() -> Result<()> {
    let page = Page::table(&table_html(
        r#"<tr>
             <td id="1">a</td>
             <td id="2" data-keyboard-selector="button">
               <button id="ok">ok</button><button id="cancel">cancel</button>
             </td>
           </tr>
           <tr><td id="11">c</td><td id="12">d</td></tr>"#,
    ))?;
    assert_eq!(page.down("cancel")?, "12");
    assert_eq!(page.up("12")?, "ok");
    Ok(())
}
