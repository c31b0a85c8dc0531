use thiserror::Error;

/// Search-request validation errors, tagged by the offending field.
///
/// Checks run in a fixed precedence order and the first failure wins, so a
/// caller only ever sees one of these per request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {field} airport code '{value}', expected a three-letter IATA code")]
    InvalidAirportCode { field: &'static str, value: String },

    #[error("origin and destination must be different")]
    SameAirport,

    #[error("invalid departure date '{value}', expected YYYY-MM-DD")]
    InvalidDepartDate { value: String },

    #[error("invalid return date '{value}', expected YYYY-MM-DD")]
    InvalidReturnDate { value: String },

    #[error("return date {return_date} cannot be before departure date {depart_date}")]
    ReturnBeforeDeparture {
        depart_date: String,
        return_date: String,
    },

    #[error("invalid {field} count '{value}', expected a non-negative integer")]
    InvalidPassengerCount { field: &'static str, value: String },

    #[error("at least one adult passenger is required")]
    AdultsRequired,

    #[error("infants ({infants}) cannot exceed adults ({adults})")]
    TooManyInfants { infants: u32, adults: u32 },

    #[error("invalid carrier code '{value}', expected 2-3 uppercase alphanumerics")]
    InvalidCarrierCode { value: String },

    #[error("invalid calendar date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

impl ValidationError {
    /// The request field this failure is attributed to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidAirportCode { .. } | Self::SameAirport => "route",
            Self::InvalidDepartDate { .. } => "departDate",
            Self::InvalidReturnDate { .. } | Self::ReturnBeforeDeparture { .. } => "returnDate",
            Self::InvalidPassengerCount { .. } | Self::AdultsRequired => "passengerCount",
            Self::TooManyInfants { .. } => "infantCount",
            Self::InvalidCarrierCode { .. } => "carrier",
            Self::InvalidDate { .. } => "date",
        }
    }
}

/// Failures surfaced by the fare provider client.
///
/// Auth and query rejections carry the upstream status code plus whatever
/// detail could be parsed out of the error body; nothing upstream is ever
/// passed through uninterpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider token exchange rejected (status {status}): {detail}")]
    AuthRejected { status: u16, detail: String },

    #[error("provider fare query rejected (status {status}): {detail}")]
    QueryRejected { status: u16, detail: String },

    #[error("provider transport error: {0}")]
    Transport(String),

    #[error("unexpected provider payload: {0}")]
    UnexpectedPayload(String),
}

impl ProviderError {
    pub fn auth_rejected(status: u16, detail: Option<String>) -> Self {
        Self::AuthRejected {
            status,
            detail: detail.unwrap_or_else(|| String::from("failed to fetch an access token")),
        }
    }

    pub fn query_rejected(status: u16, detail: Option<String>) -> Self {
        Self::QueryRejected {
            status,
            detail: detail.unwrap_or_else(|| String::from("flight offers request failed")),
        }
    }

    /// Upstream HTTP status, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthRejected { status, .. } | Self::QueryRejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::UnexpectedPayload(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_report_their_field() {
        assert_eq!(ValidationError::SameAirport.field(), "route");
        assert_eq!(
            ValidationError::TooManyInfants {
                infants: 2,
                adults: 1
            }
            .field(),
            "infantCount"
        );
    }

    #[test]
    fn rejection_constructors_fill_in_default_detail() {
        let error = ProviderError::auth_rejected(401, None);
        assert_eq!(error.status(), Some(401));
        assert!(error.to_string().contains("401"));
    }
}
