pub mod category;
pub mod place_details;
pub mod review;
