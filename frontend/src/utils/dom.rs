//! Small helpers over raw `web_sys` nodes.

use web_sys::Element;

/// Snapshot of an element's child elements, in document order.
///
/// Collected eagerly so callers can re-parent the children while iterating.
pub fn element_children(element: &Element) -> Vec<Element> {
    let collection = element.children();
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_element_children_skips_text_nodes() {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent = document.create_element("div").unwrap();
        parent.set_inner_html("text<p>one</p> more <p>two</p>");

        let children = element_children(&parent);
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].text_content().as_deref(), Some("two"));
    }
}
