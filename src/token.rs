use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::extended::TokenType;
use crate::keywords::{self, KeywordTable};
use crate::version::TaxonomyVersion;

// Общий интерфейс обеих таксономий: сканер и парсер работают с любой из них.
pub trait TokenKind:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr<Err = TokenError> + 'static
{
    const IDENT: Self;
    const ILLEGAL: Self;
    const EOF: Self;
    const VERSION: TaxonomyVersion;

    fn all() -> &'static [Self];

    fn as_str(self) -> &'static str;

    // Написание ключевого слова в исходном тексте ("fn" для FUNCTION)
    fn keyword_spelling(self) -> Option<&'static str>;

    fn is_keyword(self) -> bool {
        self.keyword_spelling().is_some()
    }

    // Общая таблица ключевых слов этой таксономии
    fn keywords() -> &'static KeywordTable<Self>;
}

// Структура токена: категория и исходный текст
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token<T = TokenType> {
    pub token_type: T,
    pub lexeme: String,
}

impl<T: TokenKind> Token<T> {
    pub fn new(token_type: T, lexeme: impl Into<String>) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
        }
    }

    // Односимвольные операторы и разделители
    pub fn from_char(token_type: T, ch: char) -> Self {
        Token::new(token_type, ch.to_string())
    }

    // Слово, выделенное сканером: ключевое слово или идентификатор
    pub fn from_word(lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        let token_type = keywords::lookup_ident::<T>(&lexeme);
        Token { token_type, lexeme }
    }

    pub fn eof() -> Self {
        Token::new(T::EOF, "")
    }

    pub fn illegal(ch: char) -> Self {
        Token::from_char(T::ILLEGAL, ch)
    }

    pub fn is_keyword(&self) -> bool {
        self.token_type.is_keyword()
    }

    // Ключевое слово несёт ровно своё написание, идентификатор не совпадает ни с одним ключевым словом.
    pub fn is_well_formed(&self) -> bool {
        match self.token_type.keyword_spelling() {
            Some(spelling) => self.lexeme == spelling,
            None if self.token_type == T::IDENT => {
                !self.lexeme.is_empty() && !T::keywords().contains(&self.lexeme)
            }
            None => true,
        }
    }
}

impl<T: TokenKind> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.token_type, self.lexeme)
    }
}
