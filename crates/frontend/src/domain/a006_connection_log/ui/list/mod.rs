mod view;
pub mod view_model;

pub use view::ConnectionLogList;
pub use view_model::ConnectionLogListViewModel;
