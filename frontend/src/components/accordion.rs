use leptos::*;
use shared::render::{
    CONTAINER_CLASS, CONTAINER_ROLE, CONTENT_CLASS, HEADER_CLASS, ICON_CLASS, LABEL_CLASS,
    WRAPPER_CLASS,
};
use shared::{
    Accordion as AccordionState, AccordionTree, ActivationKey, Effect, ItemAttributes, ItemNode,
    Message,
};
use web_sys::Element;

use crate::components::icons::{MinusIcon, PlusIcon};
use crate::utils::PanelHandle;

/// Single-expand accordion over an already built tree.
///
/// `open` is expanded right away; its opening animation starts on the next
/// frame, once the panels are on the page and can be measured.
#[component]
pub fn Accordion(
    tree: AccordionTree<Element>,
    open: Option<usize>,
    transition_ms: u32,
) -> impl IntoView {
    let state = create_rw_signal(AccordionState::new(tree.len()));
    let handles: Vec<PanelHandle> = (0..tree.len()).map(|_| PanelHandle::new()).collect();
    let panels = store_value(handles.clone());

    let dispatch = move |message: Message| {
        if let Some(effects) = transition(state, panels, message) {
            run_effects(&effects, panels, state, transition_ms);
        }
    };

    let initial = open.and_then(|position| transition(state, panels, Message::open(position)));
    if let Some(effects) = initial {
        request_animation_frame(move || run_effects(&effects, panels, state, transition_ms));
    }

    let items = tree
        .items
        .into_iter()
        .zip(handles)
        .map(|(item, panel)| {
            let position = item.position;
            let attributes =
                Signal::derive(move || state.with(|s| ItemAttributes::for_state(s.state(position))));
            view! {
                <AccordionItem
                    item=item
                    panel=panel
                    attributes=attributes
                    on_activate=Callback::new(move |_| dispatch(Message::activate(position)))
                />
            }
        })
        .collect_view();

    view! {
        <div class=CONTAINER_CLASS role=CONTAINER_ROLE>
            {items}
        </div>
    }
}

#[component]
fn AccordionItem(
    item: ItemNode<Element>,
    panel: PanelHandle,
    attributes: Signal<ItemAttributes>,
    on_activate: Callback<()>,
) -> impl IntoView {
    let ItemNode {
        label,
        panel_id,
        content,
        ..
    } = item;
    let controls = panel_id.clone();
    let wrapper_ref = panel.wrapper;
    let content_ref = panel.content;

    // Move the authored content node into the panel instead of copying it.
    content_ref.on_load(move |inner| {
        if let Err(err) = inner.append_child(&content) {
            log::warn!("Failed to attach accordion content: {:?}", err);
        }
    });

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key().parse::<ActivationKey>().is_ok() {
            ev.prevent_default();
            on_activate.call(());
        }
    };

    view! {
        <div class=move || attributes.get().item_class>
            <button
                type="button"
                class=HEADER_CLASS
                aria-expanded=move || attributes.get().aria_expanded
                aria-controls=controls
                on:click=move |_| on_activate.call(())
                on:keydown=on_keydown
            >
                <span class=LABEL_CLASS>{label}</span>
                <div class=ICON_CLASS>
                    <PlusIcon/>
                    <MinusIcon/>
                </div>
            </button>
            <div
                class=WRAPPER_CLASS
                id=panel_id
                aria-hidden=move || attributes.get().aria_hidden
                style:height=move || panel.height.get().css_value()
                node_ref=wrapper_ref
            >
                <div class=CONTENT_CLASS node_ref=content_ref></div>
            </div>
        </div>
    }
}

/// Applies `message` to the state, pinning closing panels at their current
/// height before the new state reaches the DOM.
fn transition(
    state: RwSignal<AccordionState>,
    panels: StoredValue<Vec<PanelHandle>>,
    message: Message,
) -> Option<Vec<Effect>> {
    let mut next = state.get_untracked();
    let effects = match next.dispatch(message) {
        Ok(effects) => effects,
        Err(err) => {
            log::warn!("Ignoring accordion message: {}", err);
            return None;
        }
    };

    let handles = panels.get_value();
    for effect in &effects {
        if let Effect::Close { position } = *effect {
            if let Some(panel) = handles.get(position) {
                panel.pin();
            }
        }
    }

    state.set(next);
    Some(effects)
}

/// Performs `effects` on the panels. Does nothing once the accordion has been
/// disposed, which can happen before a deferred frame or timer fires.
fn run_effects(
    effects: &[Effect],
    stored: StoredValue<Vec<PanelHandle>>,
    state: RwSignal<AccordionState>,
    delay_ms: u32,
) {
    let Some(panels) = stored.try_get_value() else {
        return;
    };
    for effect in effects {
        match *effect {
            Effect::Close { position } => {
                if let Some(panel) = panels.get(position) {
                    panel.collapse();
                }
            }
            Effect::Open { position, ticket } => {
                // Deferred effects can be overtaken by later messages.
                if state.try_with_untracked(|s| s.is_current(ticket)) != Some(true) {
                    continue;
                }
                if let Some(panel) = panels.get(position) {
                    panel.expand(delay_ms, move || {
                        let settled = state
                            .try_with_untracked(|s| s.timer_elapsed(ticket))
                            .flatten();
                        if let Some(effect) = settled {
                            run_effects(&[effect], stored, state, delay_ms);
                        }
                    });
                }
            }
            Effect::Relax { position } => {
                if let Some(panel) = panels.get(position) {
                    panel.relax();
                }
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::{build, AccordionConfig, Cell, Row};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(labels: &[&str]) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let rows = labels
            .iter()
            .map(|&label| {
                let body = document.create_element("p").unwrap();
                body.set_text_content(Some(label));
                Row::new(vec![Cell::new(label, body.clone()), Cell::new(label, body)])
            })
            .collect::<Vec<_>>();
        let config = AccordionConfig::default().with_id_prefix("item-test");
        let (tree, open) = build(rows, &config);

        let host = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        mount_to(host.clone(), move || {
            view! { <Accordion tree=tree open=open transition_ms=150/> }
        });
        host
    }

    fn headers(host: &HtmlElement) -> Vec<HtmlElement> {
        let nodes = host.query_selector_all(".accordion-header").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn expanded(host: &HtmlElement) -> Vec<bool> {
        headers(host)
            .iter()
            .map(|header| header.get_attribute("aria-expanded").as_deref() == Some("true"))
            .collect()
    }

    fn press(target: &HtmlElement, key: &str) -> bool {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        target.dispatch_event(&event).unwrap();
        event.default_prevented()
    }

    #[wasm_bindgen_test]
    fn test_click_toggles_exclusively() {
        let host = mount(&["A", "B", "C"]);
        assert_eq!(expanded(&host), vec![true, false, false]);

        headers(&host)[1].click();
        assert_eq!(expanded(&host), vec![false, true, false]);

        let items = host.query_selector_all(".accordion-item.is-open").unwrap();
        assert_eq!(items.length(), 1);

        headers(&host)[1].click();
        assert_eq!(expanded(&host), vec![false, false, false]);
        assert_eq!(
            host.query_selector_all(".accordion-item.is-open").unwrap().length(),
            0
        );
    }

    #[wasm_bindgen_test]
    fn test_keyboard_activation() {
        let host = mount(&["A", "B"]);

        assert!(press(&headers(&host)[1], "Enter"));
        assert_eq!(expanded(&host), vec![false, true]);

        assert!(press(&headers(&host)[1], " "));
        assert_eq!(expanded(&host), vec![false, false]);

        assert!(!press(&headers(&host)[0], "Escape"));
        assert_eq!(expanded(&host), vec![false, false]);
    }

    #[wasm_bindgen_test]
    fn test_panel_aria_follows_header() {
        let host = mount(&["A", "B"]);
        headers(&host)[1].click();

        let panel = host.query_selector("#item-test-1").unwrap().unwrap();
        assert_eq!(panel.get_attribute("aria-hidden").as_deref(), Some("false"));
        let panel = host.query_selector("#item-test-0").unwrap().unwrap();
        assert_eq!(panel.get_attribute("aria-hidden").as_deref(), Some("true"));
    }
}
