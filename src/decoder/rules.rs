//! Per-field missing, mismatch and coercion policy for the place details payload.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnMissing {
    /// Field becomes `None`.
    Absent,
    /// Field takes its type's default (`false`, `0`, empty).
    Default,
    /// The enclosing object fails to decode.
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnMismatch {
    Absent,
    Default,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coercion {
    None,
    /// `"2"` -> `2`
    DigitString,
    /// `4.7` -> `4`
    TruncateDecimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub key: &'static str,
    pub on_missing: OnMissing,
    pub on_mismatch: OnMismatch,
    pub coercion: Coercion,
}

impl FieldRule {
    pub const fn optional(key: &'static str) -> Self {
        Self {
            key,
            on_missing: OnMissing::Absent,
            on_mismatch: OnMismatch::Absent,
            coercion: Coercion::None,
        }
    }

    pub const fn defaulted(key: &'static str) -> Self {
        Self {
            key,
            on_missing: OnMissing::Default,
            on_mismatch: OnMismatch::Default,
            coercion: Coercion::None,
        }
    }

    pub const fn required(key: &'static str) -> Self {
        Self {
            key,
            on_missing: OnMissing::Fail,
            on_mismatch: OnMismatch::Fail,
            coercion: Coercion::None,
        }
    }

    pub const fn on_mismatch(self, on_mismatch: OnMismatch) -> Self {
        Self {
            on_mismatch,
            ..self
        }
    }

    pub const fn coerce(self, coercion: Coercion) -> Self {
        Self { coercion, ..self }
    }
}

pub mod envelope {
    use super::FieldRule;

    /// Only checked for presence; the object itself goes through `place`.
    pub const DATA: FieldRule = FieldRule::required("data");
    pub const CACHE_HIT: FieldRule = FieldRule::defaulted("cacheHit");
    pub const COUNT: FieldRule = FieldRule::defaulted("count");

    pub const ALL: [FieldRule; 3] = [DATA, CACHE_HIT, COUNT];
}

pub mod place {
    use super::{Coercion, FieldRule, OnMismatch};

    pub const ID: FieldRule = FieldRule::optional("id");
    pub const NAME: FieldRule = FieldRule::optional("name");
    pub const REVIEWS: FieldRule = FieldRule::optional("reviews").on_mismatch(OnMismatch::Default);
    pub const GOOGLE_RATING: FieldRule = FieldRule::optional("googleRating");
    pub const PRICE_LEVEL: FieldRule = FieldRule::optional("priceLevel").coerce(Coercion::DigitString);
    pub const USER_RATING_COUNT: FieldRule = FieldRule::optional("userRatingCount");
    pub const OPEN_NOW: FieldRule = FieldRule::optional("openNow");
    pub const PRIMARY_TYPE_DISPLAY_NAME: FieldRule = FieldRule::optional("primaryTypeDisplayName");
    pub const TAKEOUT: FieldRule = FieldRule::optional("takeout");
    pub const DELIVERY: FieldRule = FieldRule::optional("delivery");
    pub const DINE_IN: FieldRule = FieldRule::optional("dineIn");
    pub const EDITORIAL_SUMMARY: FieldRule = FieldRule::optional("editorialSummary");
    pub const OUTDOOR_SEATING: FieldRule = FieldRule::optional("outdoorSeating");
    pub const LIVE_MUSIC: FieldRule = FieldRule::optional("liveMusic");
    pub const MENU_FOR_CHILDREN: FieldRule = FieldRule::optional("menuForChildren");
    pub const SERVES_DESSERT: FieldRule = FieldRule::optional("servesDessert");
    pub const SERVES_COFFEE: FieldRule = FieldRule::optional("servesCoffee");
    pub const GOOD_FOR_CHILDREN: FieldRule = FieldRule::optional("goodForChildren");
    pub const GOOD_FOR_GROUPS: FieldRule = FieldRule::optional("goodForGroups");
    pub const ALLOWS_DOGS: FieldRule = FieldRule::optional("allowsDogs");
    pub const RESTROOM: FieldRule = FieldRule::optional("restroom");
    pub const ACCEPTS_CREDIT_CARDS: FieldRule = FieldRule::optional("acceptsCreditCards");
    pub const ACCEPTS_DEBIT_CARDS: FieldRule = FieldRule::optional("acceptsDebitCards");
    pub const ACCEPTS_CASH_ONLY: FieldRule = FieldRule::optional("acceptsCashOnly");
    pub const GENERATIVE_SUMMARY: FieldRule = FieldRule::optional("generativeSummary");
    pub const IS_FREE: FieldRule = FieldRule::optional("isFree");

    pub const ALL: [FieldRule; 26] = [
        ID,
        NAME,
        REVIEWS,
        GOOGLE_RATING,
        PRICE_LEVEL,
        USER_RATING_COUNT,
        OPEN_NOW,
        PRIMARY_TYPE_DISPLAY_NAME,
        TAKEOUT,
        DELIVERY,
        DINE_IN,
        EDITORIAL_SUMMARY,
        OUTDOOR_SEATING,
        LIVE_MUSIC,
        MENU_FOR_CHILDREN,
        SERVES_DESSERT,
        SERVES_COFFEE,
        GOOD_FOR_CHILDREN,
        GOOD_FOR_GROUPS,
        ALLOWS_DOGS,
        RESTROOM,
        ACCEPTS_CREDIT_CARDS,
        ACCEPTS_DEBIT_CARDS,
        ACCEPTS_CASH_ONLY,
        GENERATIVE_SUMMARY,
        IS_FREE,
    ];
}

pub mod review {
    use super::{Coercion, FieldRule, OnMismatch};

    pub const ID: FieldRule = FieldRule::required("id");
    pub const PLACE_ID: FieldRule = FieldRule::required("placeId");
    pub const RELATIVE_PUBLISH_TIME_DESCRIPTION: FieldRule =
        FieldRule::required("relativePublishTimeDescription");
    pub const TEXT: FieldRule = FieldRule::required("text");
    // Must be present, but anything unreadable becomes 0.
    pub const RATING: FieldRule = FieldRule::required("rating")
        .on_mismatch(OnMismatch::Default)
        .coerce(Coercion::TruncateDecimal);

    pub const ALL: [FieldRule; 5] = [ID, PLACE_ID, RELATIVE_PUBLISH_TIME_DESCRIPTION, RATING, TEXT];
}
