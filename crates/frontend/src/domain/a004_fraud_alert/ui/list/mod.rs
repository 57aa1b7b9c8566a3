mod view;
pub mod view_model;

pub use view::FraudAlertList;
pub use view_model::FraudAlertListViewModel;
