pub mod dom;
pub mod panel;

pub use dom::element_children;
pub use panel::PanelHandle;
