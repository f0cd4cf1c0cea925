pub mod health;
pub mod questions;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use questions::list_questions;
