pub mod connection;
pub mod contact;
pub mod properties;
pub mod search_history;
pub mod site_content;

pub use connection::{init_db, Database};
