pub mod quiz_controller;
pub mod view;

pub use quiz_controller::{QuizController, GENERATION_ERROR_MESSAGE};
pub use view::{resolve_view, ResultsSummary, View, DEFAULT_RESULTS_FEEDBACK, FEEDBACK_LOADING_LABEL};
