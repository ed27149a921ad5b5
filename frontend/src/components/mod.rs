pub mod accordion;
pub mod icons;
