use std::collections::HashMap;

use crate::error::{Result, TokenError};
use crate::token::TokenKind;

// Таблица зарезервированных слов: написание -> тип токена.
// После построения не изменяется, поэтому её можно читать из любого числа потоков.
#[derive(Debug, Clone)]
pub struct KeywordTable<T> {
    entries: HashMap<&'static str, T>,
}

impl<T: TokenKind> KeywordTable<T> {
    // Построение из фиксированного списка, зашитого в код.
    // Списки проверяются тестами на размер таблиц; повтор в релизной сборке
    // не ловится, и побеждает последняя запись.
    pub fn from_static(entries: &[(&'static str, T)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for &(spelling, token_type) in entries {
            let previous = map.insert(spelling, token_type);
            debug_assert!(previous.is_none(), "keyword {spelling:?} listed twice");
        }

        log::debug!(
            "built {} keyword table with {} entries",
            T::VERSION,
            map.len()
        );
        KeywordTable { entries: map }
    }

    // Построение с проверкой: для таблиц, которые сканер собирает сам.
    pub fn try_from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, T)>,
    {
        let mut map = HashMap::new();
        for (spelling, token_type) in entries {
            let Some(expected) = token_type.keyword_spelling() else {
                return Err(TokenError::NotAKeyword(token_type.as_str()));
            };
            // Ключевое слово всегда записывается ровно своим написанием
            if spelling != expected {
                return Err(TokenError::MisspelledKeyword {
                    spelling: spelling.to_string(),
                    expected,
                });
            }
            if map.insert(spelling, token_type).is_some() {
                return Err(TokenError::DuplicateKeyword(spelling.to_string()));
            }
        }

        Ok(KeywordTable { entries: map })
    }

    // Ключевое слово или идентификатор. Сравнение точное, с учётом регистра.
    pub fn classify(&self, spelling: &str) -> T {
        debug_assert!(!spelling.is_empty(), "scanner produced an empty lexeme");

        let token_type = self.get(spelling).unwrap_or(T::IDENT);
        log::trace!("classified {spelling:?} as {token_type}");
        token_type
    }

    pub fn get(&self, spelling: &str) -> Option<T> {
        self.entries.get(spelling).copied()
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Порядок обхода не определён
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, T)> + '_ {
        self.entries
            .iter()
            .map(|(&spelling, &token_type)| (spelling, token_type))
    }
}

// Классификация по общей таблице выбранной таксономии.
pub fn lookup_ident<T: TokenKind>(spelling: &str) -> T {
    T::keywords().classify(spelling)
}
