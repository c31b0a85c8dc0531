//! Deterministic example offers served when provider credentials are not
//! configured.

use crate::airlines;
use crate::domain::codes::CarrierCode;
use crate::domain::dates::TravelDate;
use crate::domain::offer::{NormalizedOffer, OfferPrice};

/// Explanation attached to every mock response.
pub const MOCK_MESSAGE: &str = "Mock data (provider credentials not configured)";

/// Two fixed offers on the first allow-listed carrier, dated from the
/// requested departure. Pure and infallible; already in sorted order.
pub fn sample_offers(depart_date: TravelDate) -> Vec<NormalizedOffer> {
    let airline = airlines::approved_airlines()
        .first()
        .expect("allow-list is never empty");
    let carrier = CarrierCode::parse(airline.iata_code).expect("allow-list codes are valid");
    let date = depart_date.to_string();

    vec![
        NormalizedOffer {
            id: String::from("mock-1"),
            carrier_code: carrier.clone(),
            airline_name: airline.name.to_owned(),
            price: OfferPrice {
                total: String::from("682.40"),
                currency: String::from("USD"),
            },
            depart_at: format!("{date}T08:10:00"),
            arrive_at: format!("{date}T22:05:00"),
            stops: 0,
            route_summary: format!("{carrier} 103"),
            duration_minutes: Some(835),
        },
        NormalizedOffer {
            id: String::from("mock-2"),
            carrier_code: carrier.clone(),
            airline_name: airline.name.to_owned(),
            price: OfferPrice {
                total: String::from("745.10"),
                currency: String::from("USD"),
            },
            depart_at: format!("{date}T11:30:00"),
            arrive_at: format!("{date}T23:45:00"),
            stops: 1,
            route_summary: format!("{carrier} 205 -> {carrier} 412"),
            duration_minutes: Some(855),
        },
    ]
}
