pub mod desktop;

pub use desktop::{admin_layout, desktop_layout};
