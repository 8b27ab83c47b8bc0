#![forbid(unsafe_code)]

pub mod app_services;
pub mod bank;
pub mod error;
pub mod identity_service;
pub mod quiz_service;
pub mod theme_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use bank::{default_bank, load_bank_from_path, load_bank_from_str};
pub use error::{
    AppServicesError, BankLoadError, IdentityServiceError, QuizServiceError, ThemeServiceError,
};
pub use identity_service::{IDENTITY_KEY, IdentityService};
pub use quiz_service::{ActiveQuiz, QuizService, TopicSummary};
pub use theme_service::{THEME_KEY, ThemeService};
