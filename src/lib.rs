pub mod api;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod export;
pub mod findings;
pub mod meal_plan;
pub mod parser;
pub mod questionnaire;
pub mod radar;
pub mod recommendations;
pub mod report;
pub mod session;
pub mod store;
pub mod types;

// Re-export main API
pub use api::*;
