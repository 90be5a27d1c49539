pub mod destination;
pub mod health;
pub mod itinerary;
pub mod payment;
