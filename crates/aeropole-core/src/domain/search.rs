use serde::Deserialize;

use crate::domain::codes::AirportCode;
use crate::domain::dates::TravelDate;
use crate::error::ValidationError;

/// Raw query-string parameters exactly as the HTTP layer received them.
///
/// Everything stays an optional string so the validator can distinguish an
/// absent field from a present-but-blank one; the two are not always
/// equivalent (see passenger counts).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub depart_date: Option<String>,
    pub return_date: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub infants: Option<String>,
}

/// A fully validated flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub depart_date: TravelDate,
    pub return_date: Option<TravelDate>,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl SearchQuery {
    /// Validate raw parameters into a search, short-circuiting on the first
    /// failure. Check order is part of the contract: route shape, route
    /// distinctness, departure date, return date shape, return-before-
    /// departure, passenger parse, passenger range, infants-per-adult.
    pub fn from_raw(params: &RawSearchParams) -> Result<Self, ValidationError> {
        let origin = parse_airport("origin", params.origin.as_deref())?;
        let destination = parse_airport("destination", params.destination.as_deref())?;
        if origin == destination {
            return Err(ValidationError::SameAirport);
        }

        let depart_raw = params.depart_date.as_deref().unwrap_or("");
        let depart_date =
            TravelDate::parse(depart_raw).map_err(|_| ValidationError::InvalidDepartDate {
                value: depart_raw.to_owned(),
            })?;

        let return_date = match params.return_date.as_deref() {
            None | Some("") => None,
            Some(raw) => {
                let parsed =
                    TravelDate::parse(raw).map_err(|_| ValidationError::InvalidReturnDate {
                        value: raw.to_owned(),
                    })?;
                if parsed < depart_date {
                    return Err(ValidationError::ReturnBeforeDeparture {
                        depart_date: depart_date.to_string(),
                        return_date: parsed.to_string(),
                    });
                }
                Some(parsed)
            }
        };

        let adults = parse_count("adults", params.adults.as_deref(), 1)?;
        let children = parse_count("children", params.children.as_deref(), 0)?;
        let infants = parse_count("infants", params.infants.as_deref(), 0)?;

        if adults < 1 {
            return Err(ValidationError::AdultsRequired);
        }
        if infants > adults {
            return Err(ValidationError::TooManyInfants { infants, adults });
        }

        Ok(Self {
            origin,
            destination,
            depart_date,
            return_date,
            adults,
            children,
            infants,
        })
    }
}

fn parse_airport(field: &'static str, value: Option<&str>) -> Result<AirportCode, ValidationError> {
    let raw = value.unwrap_or("");
    AirportCode::parse(raw).map_err(|_| ValidationError::InvalidAirportCode {
        field,
        value: raw.to_owned(),
    })
}

/// Parse one passenger-count field. Absent and blank strings both take the
/// default; any other non-numeric or negative string is rejected.
fn parse_count(
    field: &'static str,
    value: Option<&str>,
    default: u32,
) -> Result<u32, ValidationError> {
    match value {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPassengerCount {
                field,
                value: raw.to_owned(),
            }),
    }
}
