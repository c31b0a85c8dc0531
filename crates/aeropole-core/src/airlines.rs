//! Internal allow-list of pole-vault-friendly airlines.
//!
//! Carriers land here once an internal record confirms they will check a
//! vaulting pole as sports equipment. The table is compiled in, loaded
//! once, and only ever read.

use std::collections::HashSet;

use serde::Serialize;

/// One allow-listed carrier, as recorded internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedAirline {
    pub iata_code: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub notes: &'static str,
}

const APPROVED_AIRLINES: &[ApprovedAirline] = &[ApprovedAirline {
    iata_code: "PR",
    name: "Philippine Airlines",
    status: "confirmed",
    notes: "Only carrier in the launch allow-list",
}];

/// Every approved airline, in allow-list order.
pub fn approved_airlines() -> &'static [ApprovedAirline] {
    APPROVED_AIRLINES
}

/// Approved carrier codes, in allow-list order.
pub fn approved_codes() -> Vec<&'static str> {
    APPROVED_AIRLINES
        .iter()
        .map(|airline| airline.iata_code)
        .collect()
}

/// Uppercased membership set used by the offer normalizer.
pub fn approved_code_set() -> HashSet<String> {
    APPROVED_AIRLINES
        .iter()
        .map(|airline| airline.iata_code.to_ascii_uppercase())
        .collect()
}

/// Display name for an approved carrier; lookup is case-insensitive.
pub fn airline_name(code: &str) -> Option<&'static str> {
    APPROVED_AIRLINES
        .iter()
        .find(|airline| airline.iata_code.eq_ignore_ascii_case(code))
        .map(|airline| airline.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_never_empty() {
        assert!(!approved_airlines().is_empty());
        assert_eq!(approved_codes()[0], "PR");
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(airline_name("pr"), Some("Philippine Airlines"));
        assert_eq!(airline_name("PR"), Some("Philippine Airlines"));
        assert_eq!(airline_name("ZZ"), None);
    }

    #[test]
    fn membership_set_is_uppercased() {
        let codes = approved_code_set();
        assert!(codes.contains("PR"));
        assert!(!codes.contains("pr"));
    }
}
