//! Pure description of the rendered block.
//!
//! [`render`] maps authored rows plus a requested open item to the tree the
//! page should show and the open item that actually results. Putting that
//! tree on the page is the frontend's job.

use serde::Serialize;

use crate::config::AccordionConfig;
use crate::types::{collect_items, ItemState, Row};

pub const CONTAINER_CLASS: &str = "accordion-container-child";
pub const CONTAINER_ROLE: &str = "group";
pub const HEADER_CLASS: &str = "accordion-header";
pub const LABEL_CLASS: &str = "accordion-label";
pub const ICON_CLASS: &str = "accordion-icon";
pub const WRAPPER_CLASS: &str = "accordion-content-wrapper";
pub const CONTENT_CLASS: &str = "accordion-content";

/// State-dependent attributes of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemAttributes {
    pub item_class: &'static str,
    pub aria_expanded: &'static str,
    pub aria_hidden: &'static str,
}

impl ItemAttributes {
    pub fn for_state(state: ItemState) -> Self {
        match state {
            ItemState::Open => Self {
                item_class: "accordion-item is-open",
                aria_expanded: "true",
                aria_hidden: "false",
            },
            ItemState::Closed => Self {
                item_class: "accordion-item",
                aria_expanded: "false",
                aria_hidden: "true",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemNode<C> {
    pub position: usize,
    /// Numbered header text, e.g. `"02 Returns"`.
    pub label: String,
    /// Id of the content panel; the header's `aria-controls` points here.
    pub panel_id: String,
    pub content: C,
    pub attributes: ItemAttributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionTree<C> {
    pub items: Vec<ItemNode<C>>,
}

impl<C> AccordionTree<C> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }
}

/// Builds the tree for `rows` with `current_open` expanded.
///
/// An open index that does not address a built item is dropped, so the
/// returned index is always valid for the returned tree.
pub fn render<C>(
    rows: impl IntoIterator<Item = Row<C>>,
    current_open: Option<usize>,
    id_prefix: &str,
) -> (AccordionTree<C>, Option<usize>) {
    let items = collect_items(rows);
    let open = current_open.filter(|&position| position < items.len());

    let items = items
        .into_iter()
        .map(|item| {
            let state = ItemState::from_open(open == Some(item.position));
            ItemNode {
                position: item.position,
                label: item.display_label(),
                panel_id: item.panel_id(id_prefix),
                attributes: ItemAttributes::for_state(state),
                content: item.content,
            }
        })
        .collect();

    (AccordionTree { items }, open)
}

/// Initial build: the first item is open unless the config says otherwise.
pub fn build<C>(
    rows: impl IntoIterator<Item = Row<C>>,
    config: &AccordionConfig,
) -> (AccordionTree<C>, Option<usize>) {
    let requested = config.open_first.then_some(0);
    render(rows, requested, config.id_prefix())
}
