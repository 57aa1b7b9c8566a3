mod view;

pub use view::FraudRuleFormDialog;
