mod view;
pub mod view_model;

pub use view::CommissionList;
pub use view_model::CommissionListViewModel;
