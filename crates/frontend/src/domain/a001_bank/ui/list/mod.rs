mod view;
pub mod view_model;

pub use view::BankList;
pub use view_model::BankListViewModel;
