//! Entry point for authored accordion blocks.
//!
//! A block is a container whose child rows each hold a label cell and a
//! content cell. [`decorate`] replaces those rows with the interactive
//! accordion.

use leptos::*;
use shared::{build, AccordionConfig, Cell, Row};
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::components::accordion::Accordion;
use crate::utils::element_children;

pub const CONFIG_ATTRIBUTE: &str = "data-accordion-config";

#[wasm_bindgen]
pub fn decorate(block: Element) {
    let config = read_config(&block);
    let (tree, open) = build(read_rows(&block), &config);
    log::debug!(
        "Decorating accordion {} with {} items",
        config.id_prefix(),
        tree.len()
    );

    let parent = match block.dyn_into::<HtmlElement>() {
        Ok(parent) => parent,
        Err(_) => {
            log::warn!("Accordion block is not an HTML element, leaving it untouched");
            return;
        }
    };
    parent.set_text_content(Some(""));

    let transition_ms = config.transition_ms;
    mount_to(parent, move || {
        view! { <Accordion tree=tree open=open transition_ms=transition_ms/> }
    });
}

/// Reads the block's rows. Cells keep their nodes so content can be moved
/// into the accordion later.
pub fn read_rows(block: &Element) -> Vec<Row<Element>> {
    element_children(block)
        .into_iter()
        .map(|row| {
            let cells = element_children(&row)
                .into_iter()
                .map(|cell| Cell::new(cell.text_content().unwrap_or_default(), cell))
                .collect();
            Row::new(cells)
        })
        .collect()
}

/// Reads the block configuration, falling back to defaults when the
/// attribute is missing or invalid. Ids are scoped to this block unless a
/// prefix is configured.
pub fn read_config(block: &Element) -> AccordionConfig {
    let config = match block.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => AccordionConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("Ignoring invalid {}: {}", CONFIG_ATTRIBUTE, err);
            AccordionConfig::default()
        }),
        None => AccordionConfig::default(),
    };

    if config.id_prefix.is_some() {
        return config;
    }
    let scope = Uuid::new_v4().simple().to_string();
    let prefix = format!("{}-{}", config.id_prefix(), &scope[..8]);
    config.with_id_prefix(prefix)
}
