use serde_json::Value;
use tracing::{debug, error};
use crate::decoder::defect::{Decoded, SoftDefect};
use crate::decoder::error::DecodeError;
use crate::decoder::reader::FieldReader;
use crate::decoder::rules::{envelope, place, review, FieldRule};
use crate::models::place_details::{PlaceDetails, PlaceDetailsResponse};
use crate::models::review::Review;

pub fn decode_response_str(body: &str) -> Result<Decoded<PlaceDetailsResponse>, DecodeError> {
    let document: Value = serde_json::from_str(body).map_err(|e| {
        error!("Place details response is not JSON: {}", e);
        DecodeError::from(e)
    })?;
    decode_response(&document)
}

pub fn decode_response(document: &Value) -> Result<Decoded<PlaceDetailsResponse>, DecodeError> {
    debug!("Starting to decode PlaceDetailsResponse");
    let mut defects = Vec::new();
    match read_response(document, &mut defects) {
        Ok(value) => Ok(Decoded { value, defects }),
        Err(e) => {
            error!("Error decoding PlaceDetailsResponse: {}", e);
            Err(e)
        }
    }
}

pub fn decode_place_details(value: &Value) -> Result<Decoded<PlaceDetails>, DecodeError> {
    let mut defects = Vec::new();
    let place = read_place(value, String::new(), &mut defects)?;
    Ok(Decoded {
        value: place,
        defects,
    })
}

/// Unlike a place, a review with a missing required field is rejected.
pub fn decode_review(value: &Value) -> Result<Decoded<Review>, DecodeError> {
    let mut defects = Vec::new();
    let review = read_review(value, String::new(), &mut defects)?;
    Ok(Decoded {
        value: review,
        defects,
    })
}

fn read_response(
    document: &Value,
    defects: &mut Vec<SoftDefect>,
) -> Result<PlaceDetailsResponse, DecodeError> {
    let mut reader = FieldReader::from_value(document, "", defects)?;
    log_unknown_keys(&reader, &envelope::ALL, "PlaceDetailsResponse");
    let data = reader.object(&envelope::DATA)?;
    let cache_hit = reader.value(&envelope::CACHE_HIT)?;
    let count = reader.value(&envelope::COUNT)?;

    Ok(PlaceDetailsResponse {
        data: read_place(data, envelope::DATA.key.to_string(), defects)?,
        cache_hit,
        count,
    })
}

fn read_place(
    value: &Value,
    path: String,
    defects: &mut Vec<SoftDefect>,
) -> Result<PlaceDetails, DecodeError> {
    debug!("Starting to decode PlaceDetails");
    let mut reader = FieldReader::from_value(value, path, defects)?;
    log_unknown_keys(&reader, &place::ALL, "PlaceDetails");

    let name: Option<String> = reader.read(&place::NAME)?;
    let id = reader
        .read::<String>(&place::ID)?
        .filter(|id| !id.is_empty())
        .or_else(|| name.clone())
        .unwrap_or_default();

    Ok(PlaceDetails {
        id,
        reviews: reader.list(&place::REVIEWS, read_review)?,
        google_rating: reader.read(&place::GOOGLE_RATING)?,
        price_level: reader.read(&place::PRICE_LEVEL)?,
        user_rating_count: reader.read(&place::USER_RATING_COUNT)?,
        open_now: reader.read(&place::OPEN_NOW)?,
        name,
        primary_type_display_name: reader.read(&place::PRIMARY_TYPE_DISPLAY_NAME)?,
        takeout: reader.read(&place::TAKEOUT)?,
        delivery: reader.read(&place::DELIVERY)?,
        dine_in: reader.read(&place::DINE_IN)?,
        editorial_summary: reader.read(&place::EDITORIAL_SUMMARY)?,
        outdoor_seating: reader.read(&place::OUTDOOR_SEATING)?,
        live_music: reader.read(&place::LIVE_MUSIC)?,
        menu_for_children: reader.read(&place::MENU_FOR_CHILDREN)?,
        serves_dessert: reader.read(&place::SERVES_DESSERT)?,
        serves_coffee: reader.read(&place::SERVES_COFFEE)?,
        good_for_children: reader.read(&place::GOOD_FOR_CHILDREN)?,
        good_for_groups: reader.read(&place::GOOD_FOR_GROUPS)?,
        allows_dogs: reader.read(&place::ALLOWS_DOGS)?,
        restroom: reader.read(&place::RESTROOM)?,
        accepts_credit_cards: reader.read(&place::ACCEPTS_CREDIT_CARDS)?,
        accepts_debit_cards: reader.read(&place::ACCEPTS_DEBIT_CARDS)?,
        accepts_cash_only: reader.read(&place::ACCEPTS_CASH_ONLY)?,
        generative_summary: reader.read(&place::GENERATIVE_SUMMARY)?,
        is_free: reader.read(&place::IS_FREE)?,
    })
}

fn read_review(
    value: &Value,
    path: String,
    defects: &mut Vec<SoftDefect>,
) -> Result<Review, DecodeError> {
    debug!("Starting to decode Review");
    let mut reader = FieldReader::from_value(value, path, defects)?;
    log_unknown_keys(&reader, &review::ALL, "Review");

    Ok(Review {
        id: reader.value(&review::ID)?,
        place_id: reader.value(&review::PLACE_ID)?,
        relative_publish_time_description: reader.value(&review::RELATIVE_PUBLISH_TIME_DESCRIPTION)?,
        rating: reader.value(&review::RATING)?,
        text: reader.value(&review::TEXT)?,
    })
}

fn log_unknown_keys(reader: &FieldReader<'_, '_>, rules: &[FieldRule], record: &str) {
    let unknown = reader.unknown_keys(rules);
    if !unknown.is_empty() {
        debug!("Ignoring fields {:?} not read into {}", unknown, record);
    }
}

impl TryFrom<Value> for PlaceDetailsResponse {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode_response(&value).map(Decoded::into_value)
    }
}

impl TryFrom<Value> for PlaceDetails {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode_place_details(&value).map(Decoded::into_value)
    }
}

impl TryFrom<Value> for Review {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode_review(&value).map(Decoded::into_value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::decoder::defect::{DefectKind, JsonType};
    use super::*;

    fn review_json(rating: Value) -> Value {
        json!({
            "id": "r1",
            "placeId": "p1",
            "relativePublishTimeDescription": "a week ago",
            "rating": rating,
            "text": "Great espresso"
        })
    }

    #[test]
    fn missing_counters_default() {
        let decoded = decode_response(&json!({ "data": { "name": "places/abc" } })).unwrap();
        assert!(!decoded.value.cache_hit);
        assert_eq!(decoded.value.count, 0);
        assert!(decoded.is_clean());
    }

    #[test]
    fn identity_falls_back_to_name_then_empty() {
        let with_id = decode_place_details(&json!({ "id": "abc", "name": "places/xyz" })).unwrap();
        assert_eq!(with_id.value.id, "abc");

        let with_name = decode_place_details(&json!({ "name": "places/xyz" })).unwrap();
        assert_eq!(with_name.value.id, "places/xyz");
        assert_eq!(with_name.value.name.as_deref(), Some("places/xyz"));

        let empty = decode_place_details(&json!({ "id": 42 })).unwrap();
        assert_eq!(empty.value.id, "");
        assert_eq!(empty.defects.len(), 1);
    }

    #[test]
    fn price_level_string_coercion() {
        let numeric = decode_place_details(&json!({ "priceLevel": "2" })).unwrap();
        assert_eq!(numeric.value.price_level, Some(2));
        assert_eq!(
            numeric.defects[0],
            SoftDefect {
                path: "priceLevel".to_string(),
                kind: DefectKind::Coerced { from: JsonType::String },
            }
        );

        let garbage = decode_place_details(&json!({ "priceLevel": "PRICE_LEVEL_MODERATE" })).unwrap();
        assert_eq!(garbage.value.price_level, None);
    }

    #[test]
    fn google_rating_accepts_integers() {
        let decoded = decode_place_details(&json!({ "googleRating": 4 })).unwrap();
        assert_eq!(decoded.value.google_rating, Some(4.0));
        let text = decode_place_details(&json!({ "googleRating": "4.5" })).unwrap();
        assert_eq!(text.value.google_rating, None);
    }

    #[test]
    fn mistyped_amenities_become_unknown() {
        let decoded = decode_place_details(&json!({
            "takeout": "yes",
            "delivery": true,
            "userRatingCount": "many",
            "editorialSummary": 7
        }))
        .unwrap();
        assert_eq!(decoded.value.takeout, None);
        assert_eq!(decoded.value.delivery, Some(true));
        assert_eq!(decoded.value.user_rating_count, None);
        assert_eq!(decoded.value.editorial_summary, None);
        assert_eq!(decoded.defects.len(), 3);
    }

    #[test]
    fn review_rating_coercions() {
        assert_eq!(decode_review(&review_json(json!(4.0))).unwrap().value.rating, 4);
        assert_eq!(decode_review(&review_json(json!(4.6))).unwrap().value.rating, 4);
        assert_eq!(decode_review(&review_json(json!("five"))).unwrap().value.rating, 0);
        assert_eq!(decode_review(&review_json(json!(5))).unwrap().value.rating, 5);
    }

    #[test]
    fn review_without_rating_fails() {
        let mut value = review_json(json!(3));
        value.as_object_mut().unwrap().remove("rating");
        let err = decode_review(&value).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { ref path } if path == "rating"));
    }

    #[test]
    fn null_rating_defaults_and_keeps_other_reviews() {
        let decoded = decode_place_details(&json!({
            "reviews": [review_json(json!(5)), review_json(Value::Null)]
        }))
        .unwrap();
        let reviews = decoded.value.reviews.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[1].rating, 0);
        assert_eq!(decoded.defects.len(), 1);
        assert_eq!(decoded.defects[0].path, "reviews[1].rating");
        assert_eq!(
            decoded.defects[0].kind,
            DefectKind::Mismatched {
                expected: "integer",
                found: JsonType::Null
            }
        );
    }

    #[test]
    fn bad_review_empties_list_but_keeps_place() {
        let mut broken = review_json(json!(3));
        broken.as_object_mut().unwrap().remove("rating");
        let decoded = decode_place_details(&json!({
            "name": "places/abc",
            "reviews": [review_json(json!(5)), broken],
            "openNow": true
        }))
        .unwrap();
        assert_eq!(decoded.value.reviews, Some(Vec::new()));
        assert_eq!(decoded.value.open_now, Some(true));
        assert_eq!(decoded.defects.len(), 1);
        assert_eq!(decoded.defects[0].path, "reviews");
    }

    #[test]
    fn review_defects_carry_element_path() {
        let decoded = decode_response(&json!({
            "data": { "reviews": [review_json(json!(2.5))] }
        }))
        .unwrap();
        let reviews = decoded.value.data.reviews.as_ref().unwrap();
        assert_eq!(reviews[0].rating, 2);
        assert_eq!(decoded.defects[0].path, "data.reviews[0].rating");
    }

    #[test]
    fn reviews_of_wrong_type_default_to_empty() {
        let decoded = decode_place_details(&json!({ "reviews": { "0": {} } })).unwrap();
        assert_eq!(decoded.value.reviews, Some(Vec::new()));
        let absent = decode_place_details(&json!({ "reviews": null })).unwrap();
        assert_eq!(absent.value.reviews, None);
    }

    #[test]
    fn missing_data_is_structural() {
        let err = decode_response(&json!({ "cacheHit": true, "count": 1 })).unwrap_err();
        assert!(matches!(err, DecodeError::MissingObject { ref path } if path == "data"));
        assert!(err.is_structural());

        let err = decode_response(&json!({ "data": "nope" })).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject { found: JsonType::String, .. }));

        let err = decode_response(&json!([])).unwrap_err();
        assert!(err.is_structural());
    }

    #[test]
    fn mistyped_counters_default() {
        let decoded = decode_response(&json!({
            "data": {},
            "cacheHit": "true",
            "count": 2.5
        }))
        .unwrap();
        assert!(!decoded.value.cache_hit);
        assert_eq!(decoded.value.count, 0);
        assert_eq!(decoded.defects.len(), 2);
    }
}
