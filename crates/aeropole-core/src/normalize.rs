//! Offer normalization: turn untrusted provider offers into the sorted,
//! allow-list-filtered list the UI renders.

use std::collections::{HashMap, HashSet};

use crate::airlines;
use crate::amadeus::RawOffer;
use crate::domain::codes::CarrierCode;
use crate::domain::dates::elapsed_minutes;
use crate::domain::offer::{NormalizedOffer, OfferPrice};
use crate::duration::parse_duration_minutes;

const ROUTE_SEPARATOR: &str = " -> ";

/// Normalize, filter, and sort a batch of provider offers.
///
/// Offers are processed independently: one malformed offer is dropped
/// without affecting the rest, and the caller only ever sees survivors.
/// Ordering is part of the contract - numeric price ascending, then
/// duration ascending, with unparseable prices and missing durations
/// sorting last; the sort is stable beyond those two keys.
pub fn normalize(
    offers: &[RawOffer],
    carrier_names: Option<&HashMap<String, String>>,
    allowed_codes: &HashSet<String>,
) -> Vec<NormalizedOffer> {
    let mut ranked: Vec<RankedOffer> = offers
        .iter()
        .filter_map(|offer| rank_offer(offer, carrier_names, allowed_codes))
        .collect();

    ranked.sort_by(|a, b| {
        a.price_key
            .total_cmp(&b.price_key)
            .then(a.duration_key.total_cmp(&b.duration_key))
    });

    ranked.into_iter().map(|ranked| ranked.offer).collect()
}

struct RankedOffer {
    price_key: f64,
    duration_key: f64,
    offer: NormalizedOffer,
}

/// Validate and reshape a single offer; `None` means the offer is excluded.
fn rank_offer(
    offer: &RawOffer,
    carrier_names: Option<&HashMap<String, String>>,
    allowed_codes: &HashSet<String>,
) -> Option<RankedOffer> {
    // Only the first itinerary matters: the one-way leg, or the outbound
    // leg of a round trip.
    let itinerary = offer.itineraries.first()?;
    let segments = &itinerary.segments;
    let first = segments.first()?;
    let last = segments.last()?;

    let carrier_raw = first
        .carrier_code
        .as_deref()
        .or_else(|| offer.validating_airline_codes.first().map(String::as_str))?;
    let carrier_upper = carrier_raw.to_ascii_uppercase();
    if !allowed_codes.contains(&carrier_upper) {
        return None;
    }
    let carrier = CarrierCode::parse(&carrier_upper).ok()?;

    let depart_at = first.departure.as_ref()?.at.as_deref()?;
    let arrive_at = last.arrival.as_ref()?.at.as_deref()?;

    let price = OfferPrice {
        total: offer
            .price
            .as_ref()
            .and_then(|price| price.grand_total.clone())
            .unwrap_or_else(|| String::from("0.00")),
        currency: offer
            .price
            .as_ref()
            .and_then(|price| price.currency.clone())
            .unwrap_or_else(|| String::from("USD")),
    };

    let route_summary = segments
        .iter()
        .map(|segment| {
            let code = segment.carrier_code.as_deref().unwrap_or(carrier.as_str());
            match segment.number.as_deref() {
                Some(number) => format!("{code} {number}"),
                None => code.to_owned(),
            }
        })
        .collect::<Vec<_>>()
        .join(ROUTE_SEPARATOR);

    // An explicit duration that parses wins even when it parses to zero;
    // the wall-clock fallback only applies when the field is absent or
    // out of grammar. Zero never survives into the output.
    let duration_minutes = match itinerary.duration.as_deref().and_then(parse_duration_minutes) {
        Some(minutes) => Some(minutes),
        None => elapsed_minutes(depart_at, arrive_at),
    }
    .filter(|&minutes| minutes > 0);

    let airline_name = carrier_names
        .and_then(|names| names.get(carrier.as_str()))
        .cloned()
        .or_else(|| airlines::airline_name(carrier.as_str()).map(str::to_owned))
        .unwrap_or_else(|| carrier.as_str().to_owned());

    let id = offer
        .id
        .clone()
        .unwrap_or_else(|| format!("{}-{depart_at}", carrier.as_str()));

    let price_key = price
        .total
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::INFINITY);
    let duration_key = duration_minutes.map(f64::from).unwrap_or(f64::INFINITY);

    Some(RankedOffer {
        price_key,
        duration_key,
        offer: NormalizedOffer {
            id,
            carrier_code: carrier,
            airline_name,
            price,
            depart_at: depart_at.to_owned(),
            arrive_at: arrive_at.to_owned(),
            stops: segments.len().saturating_sub(1) as u32,
            route_summary,
            duration_minutes,
        },
    })
}
