pub mod questions;

pub use questions::{QuestionListParams, QuestionResponse};
