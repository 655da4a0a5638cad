use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use crate::models::review::Review;

/// Envelope returned by the place details endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct PlaceDetailsResponse {
    pub data: PlaceDetails,
    pub cache_hit: bool,
    pub count: i64,
}

/// A single place. Only `id` is guaranteed; everything else is whatever the
/// upstream provider happened to send.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct PlaceDetails {
    pub id: String,
    pub reviews: Option<Vec<Review>>,
    pub google_rating: Option<f64>,
    pub price_level: Option<i32>,
    pub user_rating_count: Option<i64>,
    pub open_now: Option<bool>,
    pub name: Option<String>,
    pub primary_type_display_name: Option<String>,
    pub takeout: Option<bool>,
    pub delivery: Option<bool>,
    pub dine_in: Option<bool>,
    pub editorial_summary: Option<String>,
    pub outdoor_seating: Option<bool>,
    pub live_music: Option<bool>,
    pub menu_for_children: Option<bool>,
    pub serves_dessert: Option<bool>,
    pub serves_coffee: Option<bool>,
    pub good_for_children: Option<bool>,
    pub good_for_groups: Option<bool>,
    pub allows_dogs: Option<bool>,
    pub restroom: Option<bool>,
    pub accepts_credit_cards: Option<bool>,
    pub accepts_debit_cards: Option<bool>,
    pub accepts_cash_only: Option<bool>,
    pub generative_summary: Option<String>,
    pub is_free: Option<bool>,
}
