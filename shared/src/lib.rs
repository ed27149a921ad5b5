//! DOM-free model of the accordion block.
//!
//! Everything here is plain data and pure transitions so it can be tested
//! without a browser. The `frontend` crate applies the results to the page.

pub mod accordion;
pub mod config;
pub mod error;
pub mod render;
pub mod types;

pub use accordion::{Accordion, Action, Effect, Message, TimerTicket};
pub use config::AccordionConfig;
pub use error::{AccordionError, ConfigError};
pub use render::{build, render, AccordionTree, ItemAttributes, ItemNode};
pub use types::{collect_items, AccordionItem, ActivationKey, Cell, ItemState, PanelHeight, Row};
