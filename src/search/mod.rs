pub mod broadcast;
pub mod query;
pub mod suggest;

pub use broadcast::{SearchBroadcast, SearchBus};
pub use suggest::LocationSuggestion;
