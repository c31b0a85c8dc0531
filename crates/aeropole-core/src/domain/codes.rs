use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Three-letter IATA airport code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        let valid = normalized.len() == 3
            && normalized.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(ValidationError::InvalidAirportCode {
                field: "airport",
                value: input.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AirportCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AirportCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AirportCode> for String {
    fn from(value: AirportCode) -> Self {
        value.0
    }
}

/// IATA airline designator: two or three uppercase alphanumerics with at
/// least one letter ("PR", "B6", "9W").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarrierCode(String);

impl CarrierCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        let len = normalized.len();
        let valid = (2..=3).contains(&len)
            && normalized.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            && normalized.bytes().any(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(ValidationError::InvalidCarrierCode {
                value: input.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CarrierCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CarrierCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CarrierCode> for String {
    fn from(value: CarrierCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_uppercases_airport_code() {
        let parsed = AirportCode::parse(" jfk ").expect("code should parse");
        assert_eq!(parsed.as_str(), "JFK");
    }

    #[test]
    fn rejects_short_and_non_alpha_airport_codes() {
        assert!(AirportCode::parse("JK").is_err());
        assert!(AirportCode::parse("JFKX").is_err());
        assert!(AirportCode::parse("J2K").is_err());
        assert!(AirportCode::parse("").is_err());
    }

    #[test]
    fn accepts_digit_bearing_carrier_codes() {
        let parsed = CarrierCode::parse("9w").expect("code should parse");
        assert_eq!(parsed.as_str(), "9W");
    }

    #[test]
    fn rejects_all_digit_and_oversized_carrier_codes() {
        assert!(CarrierCode::parse("99").is_err());
        assert!(CarrierCode::parse("ABCD").is_err());
        assert!(CarrierCode::parse("A").is_err());
        assert!(CarrierCode::parse("P_").is_err());
    }
}
