pub mod summary;
pub mod ui;
