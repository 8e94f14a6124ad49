pub mod listing_region;
pub mod property_card;
pub mod suggestions;

pub use listing_region::{launches_region, listing_region, ListingContext};
pub use property_card::property_card;
pub use suggestions::suggestion_panel;
