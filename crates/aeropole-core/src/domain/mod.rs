//! Validated domain types for the search pipeline.

pub mod codes;
pub mod dates;
pub mod offer;
pub mod search;

pub use codes::{AirportCode, CarrierCode};
pub use dates::{elapsed_minutes, TravelDate};
pub use offer::{NormalizedOffer, OfferPrice, OfferSource, SearchPayload};
pub use search::{RawSearchParams, SearchQuery};
