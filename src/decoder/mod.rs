pub mod defect;
pub mod error;
pub mod place_details;
pub mod reader;
pub mod rules;

pub use defect::{Decoded, DefectKind, JsonType, SoftDefect};
pub use error::DecodeError;
pub use place_details::{decode_place_details, decode_response, decode_response_str, decode_review};
