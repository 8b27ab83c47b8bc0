mod bank;
mod identity;
mod ids;
mod question;
mod theme;
mod topic;

pub use bank::{BankError, QuestionBank, QuestionBankDraft};
pub use identity::{IdentityError, UserIdentity};
pub use ids::QuestionId;
pub use question::{ChoiceIndex, Question, QuestionDraft, QuestionError};
pub use theme::{ParseThemeError, Theme};
pub use topic::{Topic, TopicDraft, TopicError};
