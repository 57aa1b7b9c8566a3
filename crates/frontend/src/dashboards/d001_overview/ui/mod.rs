mod dashboard;
pub mod view_model;

pub use dashboard::OverviewDashboard;
pub use view_model::OverviewViewModel;
