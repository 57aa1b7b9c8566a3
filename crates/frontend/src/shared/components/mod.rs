pub mod date_input;
pub mod error_state;
pub mod page_header;
pub mod stat_card;

pub use date_input::DateInput;
pub use error_state::ErrorState;
pub use page_header::PageHeader;
pub use stat_card::{CardTone, StatCard};
