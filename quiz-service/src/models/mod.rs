pub mod question;
pub mod quiz;

pub use question::Question;
pub use quiz::Quiz;
