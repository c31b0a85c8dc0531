use serde::{Deserialize, Serialize};

use crate::domain::codes::CarrierCode;

/// Provider-quoted fare as displayed, amount kept as the decimal string the
/// provider sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPrice {
    pub total: String,
    pub currency: String,
}

/// One cleaned, allow-list-filtered, UI-ready fare offer.
///
/// Instances are built once by the normalizer (or the mock builder) and
/// never mutated; their position in a result list is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOffer {
    pub id: String,
    pub carrier_code: CarrierCode,
    pub airline_name: String,
    pub price: OfferPrice,
    pub depart_at: String,
    pub arrive_at: String,
    pub stops: u32,
    pub route_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// Where a search result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferSource {
    Mock,
    Provider,
}

/// Successful search response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub source: OfferSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<NormalizedOffer>,
}

impl SearchPayload {
    pub fn mock(message: impl Into<String>, data: Vec<NormalizedOffer>) -> Self {
        Self {
            source: OfferSource::Mock,
            message: Some(message.into()),
            data,
        }
    }

    pub fn provider(data: Vec<NormalizedOffer>) -> Self {
        Self {
            source: OfferSource::Provider,
            message: None,
            data,
        }
    }
}
