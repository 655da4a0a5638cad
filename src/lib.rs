pub mod decoder;
pub mod helpers;
pub mod models;
pub mod repositories;

pub use decoder::{Decoded, DecodeError, SoftDefect};
pub use models::category::CategoryEntry;
pub use models::place_details::{PlaceDetails, PlaceDetailsResponse};
pub use models::review::Review;
pub use repositories::category_codec::{CategoryCodec, CategoryTableError, COFFEE_KEY};
