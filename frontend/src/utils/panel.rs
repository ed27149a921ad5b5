//! Height animation for one content panel.
//!
//! The wrapper's height is driven by a signal. Opening animates from zero to
//! the measured content height and then hands sizing back to the browser;
//! closing pins the current height first so the transition has a start value.

use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::*;
use shared::PanelHeight;

#[derive(Clone, Copy)]
pub struct PanelHandle {
    pub height: RwSignal<PanelHeight>,
    /// `.accordion-content-wrapper`, the element whose height transitions.
    pub wrapper: NodeRef<Div>,
    /// `.accordion-content`, measured for the target height.
    pub content: NodeRef<Div>,
    timer: StoredValue<Option<Timeout>>,
}

impl PanelHandle {
    pub fn new() -> Self {
        Self {
            height: create_rw_signal(PanelHeight::Collapsed),
            wrapper: create_node_ref(),
            content: create_node_ref(),
            timer: store_value(None),
        }
    }

    fn content_height(&self) -> Option<i32> {
        self.content.get_untracked().map(|content| content.scroll_height())
    }

    /// Animates open and runs `on_settled` once `delay_ms` has passed,
    /// unless the panel changes state before then.
    pub fn expand(&self, delay_ms: u32, on_settled: impl FnOnce() + 'static) {
        let Some(px) = self.content_height() else {
            // Not mounted, nothing to animate.
            self.cancel_timer();
            self.height.set(PanelHeight::Auto);
            return;
        };

        self.height.set(PanelHeight::Fixed(px));
        self.timer.set_value(Some(Timeout::new(delay_ms, on_settled)));
    }

    /// Fixes the panel at its current content height and forces a layout
    /// read so the browser commits it before [`PanelHandle::collapse`].
    pub fn pin(&self) {
        self.cancel_timer();
        if let Some(px) = self.content_height() {
            self.height.set(PanelHeight::Fixed(px));
        }
        if let Some(wrapper) = self.wrapper.get_untracked() {
            let _ = wrapper.offset_height();
        }
    }

    pub fn collapse(&self) {
        self.cancel_timer();
        self.height.set(PanelHeight::Collapsed);
    }

    pub fn relax(&self) {
        self.height.set(PanelHeight::Auto);
    }

    fn cancel_timer(&self) {
        // Dropping a pending Timeout clears it.
        self.timer.set_value(None);
    }
}

impl Default for PanelHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_panel() -> (PanelHandle, HtmlElement) {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let slot = Rc::new(Cell::new(None));
        let slot_in_view = Rc::clone(&slot);
        mount_to(host.clone(), move || {
            let panel = PanelHandle::new();
            slot_in_view.set(Some(panel));
            let wrapper_ref = panel.wrapper;
            let content_ref = panel.content;
            view! {
                <div style:height=move || panel.height.get().css_value() node_ref=wrapper_ref>
                    <div style="height: 40px" node_ref=content_ref></div>
                </div>
            }
        });
        (slot.get().unwrap(), host)
    }

    fn inline_height(panel: &PanelHandle) -> String {
        panel
            .wrapper
            .get_untracked()
            .unwrap()
            .style()
            .get_property_value("height")
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_close_pins_measured_height_before_collapsing() {
        let (panel, _host) = mount_panel();

        panel.expand(10, move || panel.relax());
        assert_eq!(inline_height(&panel), "40px");
        TimeoutFuture::new(50).await;
        assert_eq!(inline_height(&panel), "auto");

        panel.pin();
        let measured = panel.content.get_untracked().unwrap().scroll_height();
        assert_eq!(inline_height(&panel), format!("{}px", measured));

        panel.collapse();
        assert_eq!(inline_height(&panel), "0px");
    }

    #[wasm_bindgen_test]
    async fn test_collapse_cancels_pending_relax() {
        let (panel, _host) = mount_panel();

        panel.expand(10, move || panel.relax());
        panel.pin();
        panel.collapse();
        TimeoutFuture::new(50).await;

        assert_eq!(inline_height(&panel), "0px");
    }
}
