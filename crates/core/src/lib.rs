#![forbid(unsafe_code)]

pub mod model;
pub mod session;
pub mod time;

pub use session::{
    ChoiceView, Progress, QuestionView, QuizPhase, QuizSession, Report, ReportItem, SessionError,
};
pub use time::Clock;
