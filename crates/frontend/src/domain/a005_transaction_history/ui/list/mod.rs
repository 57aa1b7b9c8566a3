mod view;
pub mod view_model;

pub use view::TransactionHistoryList;
pub use view_model::TransactionHistoryListViewModel;
