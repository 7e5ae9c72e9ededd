pub mod question;
pub mod screen;
pub mod session;
pub mod topic;

pub use question::{Question, OPTION_COUNT, QUESTION_COUNT};
pub use screen::Screen;
pub use session::{QuestionSource, QuizSession};
pub use topic::Topic;
