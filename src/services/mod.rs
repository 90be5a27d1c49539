pub mod itinerary_generation_service;
pub mod pdf_layout_service;
pub mod preview_service;
pub mod stripe;
pub mod suggestion_service;
