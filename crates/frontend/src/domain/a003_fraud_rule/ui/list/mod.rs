mod view;
pub mod view_model;

pub use view::FraudRuleList;
pub use view_model::FraudRuleListViewModel;
