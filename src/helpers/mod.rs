pub mod variation;
