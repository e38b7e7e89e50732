// Словарь токенов языка Monkey: категории токенов в двух версиях таксономии
// и классификация слов на ключевые слова и идентификаторы.
// Сканер, парсер и интерпретатор строятся поверх этого крейта.

pub mod baseline;
pub mod config;
pub mod error;
pub mod extended;
pub mod keywords;
mod taxonomy;
pub mod token;
pub mod version;

pub use config::{ConfigError, FrontEndConfig};
pub use error::{Result, TokenError};
pub use extended::{TokenType, lookup_ident};
pub use keywords::KeywordTable;
pub use token::{Token, TokenKind};
pub use version::TaxonomyVersion;
