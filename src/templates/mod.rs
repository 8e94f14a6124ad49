pub mod components;
pub mod layouts;
pub mod pages;

pub use layouts::{admin_layout, desktop_layout};
