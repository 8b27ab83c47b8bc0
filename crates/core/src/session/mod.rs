//! Quiz session state machine and scoring.

mod quiz;
mod report;
mod view;

pub use quiz::{QuizPhase, QuizSession, SessionError};
pub use report::{Report, ReportItem, score};
pub use view::{ChoiceView, Progress, QuestionView};
