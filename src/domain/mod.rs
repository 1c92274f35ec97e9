pub mod filter;
pub mod grievance;
pub mod types;
