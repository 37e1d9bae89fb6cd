pub mod aggregate;
pub mod types;
