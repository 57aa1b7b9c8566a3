mod view;

pub use view::{CommissionFormDialog, SegmentFormDialog};
