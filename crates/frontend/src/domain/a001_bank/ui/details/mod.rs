mod view;

pub use view::BankFormDialog;
