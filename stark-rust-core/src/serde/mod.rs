pub mod unsigned_field_element;

pub use unsigned_field_element::{UfeHex, UfeHexOption};
