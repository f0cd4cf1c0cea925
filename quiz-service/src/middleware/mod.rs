pub mod quiz_param;

pub use quiz_param::QuizId;
