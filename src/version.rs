use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::token::TokenKind;
use crate::{baseline, extended};

// Версия таксономии, на которую нацелен конкретный фронтенд.
// Выбирается один раз; две версии не смешиваются в одном сканере.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyVersion {
    Baseline,
    #[default]
    Extended,
}

impl TaxonomyVersion {
    pub const ALL: [TaxonomyVersion; 2] = [TaxonomyVersion::Baseline, TaxonomyVersion::Extended];

    pub fn as_str(self) -> &'static str {
        match self {
            TaxonomyVersion::Baseline => "baseline",
            TaxonomyVersion::Extended => "extended",
        }
    }

    // Метки всех категорий, в порядке объявления
    pub fn labels(self) -> Vec<&'static str> {
        match self {
            TaxonomyVersion::Baseline => labels_of::<baseline::TokenType>(),
            TaxonomyVersion::Extended => labels_of::<extended::TokenType>(),
        }
    }

    // Зарезервированные слова, отсортированные
    pub fn keywords(self) -> Vec<&'static str> {
        match self {
            TaxonomyVersion::Baseline => keywords_of::<baseline::TokenType>(),
            TaxonomyVersion::Extended => keywords_of::<extended::TokenType>(),
        }
    }

    // Классификация, когда версия известна только во время выполнения
    pub fn classify_label(self, spelling: &str) -> &'static str {
        match self {
            TaxonomyVersion::Baseline => baseline::lookup_ident(spelling).as_str(),
            TaxonomyVersion::Extended => extended::lookup_ident(spelling).as_str(),
        }
    }
}

fn labels_of<T: TokenKind>() -> Vec<&'static str> {
    T::all().iter().copied().map(T::as_str).collect()
}

fn keywords_of<T: TokenKind>() -> Vec<&'static str> {
    let mut spellings: Vec<&'static str> =
        T::keywords().iter().map(|(spelling, _)| spelling).collect();
    spellings.sort_unstable();
    spellings
}

impl fmt::Display for TaxonomyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomyVersion {
    type Err = TokenError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        TaxonomyVersion::ALL
            .into_iter()
            .find(|version| version.as_str() == text)
            .ok_or_else(|| TokenError::UnknownTaxonomy(text.to_string()))
    }
}
