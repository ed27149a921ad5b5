pub mod block;
pub mod components;
pub mod utils;

use wasm_bindgen::prelude::*;

pub use block::decorate;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}
