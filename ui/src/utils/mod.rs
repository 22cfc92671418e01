use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Read the value of an input element the hosting page may provide.
pub fn host_value(id: &str) -> Option<String> {
    let element = gloo_utils::document().get_element_by_id(id)?;
    let input = element.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    Some(input.value())
}

/// Apply the rendered width of the result table to every decorative
/// `.background` element, keeping them visually aligned with the table.
pub fn adjust_background_width(table: &NodeRef) {
    let Some(table) = table.cast::<web_sys::HtmlElement>() else {
        return;
    };
    let width = format!("{}px", table.offset_width());

    let Ok(elements) = gloo_utils::document().query_selector_all(".background") else {
        return;
    };

    for i in 0..elements.length() {
        let Some(element) = elements
            .get(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        if let Err(err) = element.style().set_property("width", &width) {
            log::warn!("Failed to adjust background width: {err:?}");
        }
    }
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Err(err) = gloo_utils::window().open_with_url_and_target(url, "_blank") {
        log::warn!("Failed to open {url}: {err:?}");
    }
}
