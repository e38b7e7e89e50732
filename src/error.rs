use thiserror::Error;

// Ошибки словаря токенов. Классификация слов сама по себе никогда не падает.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unknown token label: {0:?}")]
    UnknownLabel(String),

    #[error("Keyword {0:?} listed more than once")]
    DuplicateKeyword(String),

    #[error("Token type {0} is not a keyword category")]
    NotAKeyword(&'static str),

    #[error("Keyword {spelling:?} must be spelled {expected:?}")]
    MisspelledKeyword {
        spelling: String,
        expected: &'static str,
    },

    #[error("Token type {0} does not exist in the baseline taxonomy")]
    NotInBaseline(&'static str),

    #[error("Unknown taxonomy version: {0:?}")]
    UnknownTaxonomy(String),
}

pub type Result<T> = std::result::Result<T, TokenError>;
