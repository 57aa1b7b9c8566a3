pub mod date_range;
pub mod validation;

pub use date_range::{DateRange, DateRangeQuery};
