pub mod itinerary;
pub mod plan;
pub mod preview;
pub mod session;
