//! Traits shared by the crate's value types.

mod bi_component;

pub use bi_component::BiComponent;
