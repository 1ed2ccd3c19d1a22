//! DOM-side dynamic list manager.
//!
//! Each repeating list is a plain `<ul class="entry-list">` whose `<li>` rows
//! are built here and mutated in place by the page-global handlers in
//! `main.rs`. The live DOM tree is the only list state: growth and removal
//! inspect siblings instead of tracking indices elsewhere.

use shared::{ListField, RowSpec, should_grow};
use zoon::wasm_bindgen::{JsCast, JsValue};
use zoon::*;

/// Class selecting a row's text input.
pub const ROW_INPUT_CLASS: &str = "list";
/// Class selecting a row's remove control.
pub const REMOVE_CONTROL_CLASS: &str = "remove-item";

pub fn list_element_id(field: ListField) -> String {
    format!("{}-list", field.as_str())
}

/// Build one `<li>` row from its description: a text input paired with a
/// remove control.
pub fn build_row(
    document: &web_sys::Document,
    spec: &RowSpec,
) -> Result<web_sys::Element, JsValue> {
    let row = document.create_element("li")?;

    let group = document.create_element("div")?;
    group.set_class_name("input-group");

    let input = document
        .create_element("input")?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(JsValue::from)?;
    input.set_type("text");
    input.set_class_name(&format!("form-control {ROW_INPUT_CLASS}"));
    input.set_name(&spec.input_name());
    input.set_placeholder(&spec.placeholder());
    group.append_child(&input)?;

    let addon = document.create_element("div")?;
    addon.set_class_name("input-group-addon");

    let remove = document.create_element("a")?;
    remove.set_class_name(REMOVE_CONTROL_CLASS);
    remove.set_attribute("href", "#remove")?;
    remove.set_attribute("title", "Remove")?;
    remove.set_attribute("tabindex", "-1")?;

    let icon = document.create_element("span")?;
    icon.set_class_name("remove-icon");
    icon.set_text_content(Some("\u{00d7}"));
    remove.append_child(&icon)?;

    addon.append_child(&remove)?;
    group.append_child(&addon)?;
    row.append_child(&group)?;
    Ok(row)
}

/// Build a list's `<ul>` with one row per existing value plus the trailing
/// blank row, and attach it under `container`.
pub fn mount_list(
    container: &web_sys::Element,
    field: ListField,
    values: &[String],
) -> Result<(), JsValue> {
    let document = document();
    let list = document.create_element("ul")?;
    list.set_class_name("entry-list");
    list.set_id(&list_element_id(field));

    let spec = RowSpec::new(field.as_str());
    for value in values {
        let row = build_row(&document, &spec)?;
        if let Some(input) = row_input(&row) {
            input.set_value(value);
        }
        list.append_child(&row)?;
    }
    list.append_child(&build_row(&document, &spec)?.into())?;

    container.append_child(&list)?;
    Ok(())
}

/// Remove the row enclosing an activated remove control. The control itself
/// or any of its descendants may be passed in.
pub fn remove_row_for(control: &web_sys::Element) {
    if let Ok(Some(row)) = control.closest("li") {
        row.remove();
    }
}

/// Append a blank row after a keystroke in `input`, provided the edited row
/// is the last one in its list, the previous row (if any) holds a non-empty
/// value, and the edited value itself is non-empty.
pub fn grow_list_for(input: &web_sys::HtmlInputElement) -> Result<(), JsValue> {
    let Ok(Some(row)) = input.closest("li") else {
        return Ok(());
    };
    if row.next_element_sibling().is_some() {
        return Ok(());
    }

    // A previous row without a readable input counts as absent.
    let previous_value = row
        .previous_element_sibling()
        .and_then(|previous| row_input(&previous))
        .map(|previous_input| previous_input.value());
    if !should_grow(previous_value.as_deref(), &input.value()) {
        return Ok(());
    }

    let Some(list) = row.parent_element() else {
        return Ok(());
    };
    let spec = RowSpec::from_input_name(&input.name());
    list.append_child(&build_row(&document(), &spec)?.into())?;
    Ok(())
}

/// Explicit add control: append a blank row when the last row is filled in,
/// otherwise focus the existing trailing blank row.
pub fn add_row(field: ListField) -> Result<(), JsValue> {
    let document = document();
    let Some(list) = document.get_element_by_id(&list_element_id(field)) else {
        return Ok(());
    };

    let last_input = list
        .query_selector(&format!("li:last-child .{ROW_INPUT_CLASS}"))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = last_input
        && input.value().is_empty()
    {
        let _ = input.focus();
        return Ok(());
    }

    let row = build_row(&document, &RowSpec::new(field.as_str()))?;
    list.append_child(&row)?;
    if let Some(input) = row_input(&row) {
        let _ = input.focus();
    }
    Ok(())
}

fn row_input(row: &web_sys::Element) -> Option<web_sys::HtmlInputElement> {
    row.query_selector(&format!(".{ROW_INPUT_CLASS}"))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
}
