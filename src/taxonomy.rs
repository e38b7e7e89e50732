// Общее описание таксономии токенов. Обе версии языка разворачиваются из
// одного макроса, поэтому метки, предикаты и таблица ключевых слов
// не могут разойтись между версиями.
//
// Разворачивается в текущем модуле в:
// - `enum TokenType` с serde-именами в стиле констант (`NOT_EQ`, `LPAREN`),
// - `TokenType::ALL`, `as_str`, `keyword_spelling` и предикаты групп,
// - общую таблицу `KEYWORDS` и `lookup_ident`,
// - `Display`, `FromStr` и реализацию `TokenKind`,
// - псевдоним `Token`.
macro_rules! taxonomy {
    (
        version: $version:ident;
        special { $($special:ident => $special_label:literal),* $(,)? }
        literals { $($literal:ident => $literal_label:literal),* $(,)? }
        operators { $($operator:ident => $operator_label:literal),* $(,)? }
        delimiters {
            $($(#[$delimiter_meta:meta])* $delimiter:ident => $delimiter_label:literal),* $(,)?
        }
        keywords {
            $($keyword:ident => $keyword_label:literal : $keyword_spelling:literal),* $(,)?
        }
    ) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum TokenType {
            $($special,)*
            $($literal,)*
            $($operator,)*
            $($(#[$delimiter_meta])* $delimiter,)*
            $($keyword,)*
        }

        pub type Token = $crate::token::Token<TokenType>;

        static KEYWORDS: once_cell::sync::Lazy<$crate::keywords::KeywordTable<TokenType>> =
            once_cell::sync::Lazy::new(|| {
                $crate::keywords::KeywordTable::from_static(&[
                    $(($keyword_spelling, TokenType::$keyword),)*
                ])
            });

        impl TokenType {
            pub const ALL: &'static [TokenType] = &[
                $(TokenType::$special,)*
                $(TokenType::$literal,)*
                $(TokenType::$operator,)*
                $(TokenType::$delimiter,)*
                $(TokenType::$keyword,)*
            ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(TokenType::$special => $special_label,)*
                    $(TokenType::$literal => $literal_label,)*
                    $(TokenType::$operator => $operator_label,)*
                    $(TokenType::$delimiter => $delimiter_label,)*
                    $(TokenType::$keyword => $keyword_label,)*
                }
            }

            // Написание ключевого слова в исходном тексте
            pub fn keyword_spelling(self) -> Option<&'static str> {
                match self {
                    $(TokenType::$keyword => Some($keyword_spelling),)*
                    _ => None,
                }
            }

            pub fn is_keyword(self) -> bool {
                self.keyword_spelling().is_some()
            }

            pub fn is_operator(self) -> bool {
                matches!(self, $(TokenType::$operator)|*)
            }

            pub fn is_delimiter(self) -> bool {
                matches!(self, $(TokenType::$delimiter)|*)
            }

            pub fn is_ident_or_literal(self) -> bool {
                matches!(self, $(TokenType::$literal)|*)
            }

            pub fn keywords() -> &'static $crate::keywords::KeywordTable<TokenType> {
                &KEYWORDS
            }
        }

        pub fn lookup_ident(spelling: &str) -> TokenType {
            KEYWORDS.classify(spelling)
        }

        impl std::fmt::Display for TokenType {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for TokenType {
            type Err = $crate::error::TokenError;

            fn from_str(label: &str) -> Result<Self, Self::Err> {
                $crate::taxonomy::parse_label(TokenType::ALL, TokenType::as_str, label)
            }
        }

        impl $crate::token::TokenKind for TokenType {
            const IDENT: Self = TokenType::Ident;
            const ILLEGAL: Self = TokenType::Illegal;
            const EOF: Self = TokenType::Eof;
            const VERSION: $crate::version::TaxonomyVersion =
                $crate::version::TaxonomyVersion::$version;

            fn all() -> &'static [Self] {
                TokenType::ALL
            }

            fn as_str(self) -> &'static str {
                TokenType::as_str(self)
            }

            fn keyword_spelling(self) -> Option<&'static str> {
                TokenType::keyword_spelling(self)
            }

            fn keywords() -> &'static $crate::keywords::KeywordTable<Self> {
                &KEYWORDS
            }
        }
    };
}

pub(crate) use taxonomy;

use crate::error::TokenError;

// Обратное к `as_str`: поиск категории по её метке
pub(crate) fn parse_label<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    label: &str,
) -> Result<T, TokenError> {
    all.iter()
        .copied()
        .find(|&token_type| as_str(token_type) == label)
        .ok_or_else(|| TokenError::UnknownLabel(label.to_string()))
}
