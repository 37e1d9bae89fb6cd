pub mod defaults;
pub mod field_rules;
pub mod rules;
pub mod themes;
pub mod types;
pub mod validate;
pub mod wizard;
