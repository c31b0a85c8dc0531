//! # Aeropole Core
//!
//! Domain model, fare-provider client, and offer normalization for the
//! aeropole flight search.
//!
//! The pipeline is: validate a raw search into a [`SearchQuery`], fetch raw
//! offers through [`AmadeusClient`] (credential exchange is cached behind a
//! single-slot token cache), then [`normalize`] the untrusted offers into
//! sorted [`NormalizedOffer`]s restricted to the approved-airline
//! allow-list. When no credentials are configured, [`mock`] supplies a
//! deterministic stand-in payload.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`airlines`] | Pole-vault-friendly carrier allow-list |
//! | [`airports`] | Major-airport lookup table |
//! | [`amadeus`] | Provider auth + flight-offers client |
//! | [`clock`] | Millisecond clock seam |
//! | [`domain`] | Validated search/offer types |
//! | [`duration`] | ISO-8601 duration parsing |
//! | [`http`] | Transport abstraction (reqwest or test doubles) |
//! | [`mock`] | Deterministic no-credential offers |
//! | [`normalize`] | The offer normalizer |
//!
//! Everything outside the two transport calls is pure and synchronous;
//! the normalizer in particular does no I/O and is safe to unit test
//! exhaustively.

pub mod airlines;
pub mod airports;
pub mod amadeus;
pub mod clock;
pub mod domain;
pub mod duration;
pub mod error;
pub mod http;
pub mod mock;
pub mod normalize;

pub use amadeus::{
    AmadeusClient, ProviderCredentials, RawDictionaries, RawItinerary, RawOffer, RawOfferResponse,
    RawPrice, RawSegment, RawSegmentPoint, DEFAULT_HOST,
};
pub use clock::{Clock, SystemClock};
pub use domain::{
    AirportCode, CarrierCode, NormalizedOffer, OfferPrice, OfferSource, RawSearchParams,
    SearchPayload, SearchQuery, TravelDate,
};
pub use error::{ProviderError, ValidationError};
pub use http::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use normalize::normalize;
