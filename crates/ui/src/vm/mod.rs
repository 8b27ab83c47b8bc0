mod identity_vm;
mod quiz_vm;
mod report_vm;
mod theme_vm;
mod time_fmt;
mod topic_vm;

pub use identity_vm::{IdentityBadgeVm, avatar_data_uri, avatar_svg};
pub use quiz_vm::{ChoiceVm, QuizIntent, QuizVm, start_quiz};
pub use report_vm::{FeedbackLineVm, ReportVm};
pub use theme_vm::{ThemeChoiceVm, loaded_theme, parse_theme_choice, theme_choices};
pub use topic_vm::{TopicCardVm, map_topic_cards};
