//! Question bank loading.
//!
//! The bank is authored as JSON (see `data/default_bank.json`) and validated
//! into an immutable `QuestionBank` once at startup.

use std::path::Path;

use quiz_core::model::{QuestionBank, QuestionBankDraft};

use crate::error::BankLoadError;

const DEFAULT_BANK_JSON: &str = include_str!("../data/default_bank.json");

/// The built-in bank: General, Web and Science.
///
/// # Errors
///
/// Returns `BankLoadError` only if the embedded JSON is broken.
pub fn default_bank() -> Result<QuestionBank, BankLoadError> {
    load_bank_from_str(DEFAULT_BANK_JSON)
}

/// Parse and validate a bank from JSON text.
///
/// # Errors
///
/// Returns `BankLoadError::Json` for malformed JSON and
/// `BankLoadError::Invalid` for content that fails validation.
pub fn load_bank_from_str(json: &str) -> Result<QuestionBank, BankLoadError> {
    let draft: QuestionBankDraft = serde_json::from_str(json)?;
    let bank = draft.validate()?;
    tracing::debug!(topics = bank.len(), "question bank loaded");
    Ok(bank)
}

/// Read, parse and validate a bank file.
///
/// # Errors
///
/// Returns `BankLoadError::Io` if the file cannot be read, otherwise see
/// [`load_bank_from_str`].
pub fn load_bank_from_path(path: impl AsRef<Path>) -> Result<QuestionBank, BankLoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| BankLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_bank_from_str(&json)
}
