use std::collections::HashSet;
use std::thread;

use monkey_tokens::keywords::{self, KeywordTable};
use monkey_tokens::{TaxonomyVersion, Token, TokenKind, TokenType, baseline, extended};
use pretty_assertions::assert_eq;

const WORDS: &[&str] = &[
    "fn", "let", "if", "else", "return", "true", "false", "x", "foobar", "Fn", "LET", "iff",
    "_", "add", "five", "ten",
];

fn expected<T: TokenKind>(word: &str) -> T {
    T::all()
        .iter()
        .copied()
        .find(|token_type| token_type.keyword_spelling() == Some(word))
        .unwrap_or(T::IDENT)
}

#[test]
fn classify_matches_keyword_spellings_in_both_taxonomies() {
    for &word in WORDS {
        assert_eq!(baseline::lookup_ident(word), expected::<baseline::TokenType>(word), "{word}");
        assert_eq!(extended::lookup_ident(word), expected::<extended::TokenType>(word), "{word}");
    }
}

#[test]
fn generic_lookup_agrees_with_version_functions() {
    for &word in WORDS {
        assert_eq!(
            keywords::lookup_ident::<baseline::TokenType>(word),
            baseline::lookup_ident(word)
        );
        assert_eq!(keywords::lookup_ident::<TokenType>(word), monkey_tokens::lookup_ident(word));
    }
}

#[test]
fn classification_is_idempotent_and_closed() {
    let members: HashSet<TokenType> = TokenType::ALL.iter().copied().collect();

    for &word in WORDS {
        let first = extended::lookup_ident(word);
        for _ in 0..3 {
            assert_eq!(extended::lookup_ident(word), first);
        }
        assert!(members.contains(&first));
        assert!(first == TokenType::Ident || first.is_keyword());
    }
}

#[test]
fn concurrent_callers_see_the_same_answers() {
    let sequential: Vec<TokenType> = WORDS
        .iter()
        .map(|word| extended::lookup_ident(word))
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    WORDS
                        .iter()
                        .map(|word| extended::lookup_ident(word))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), sequential);
        }
    });
}

#[test]
fn shared_table_can_be_rebuilt_per_scanner() {
    let shared = TokenType::keywords();
    let rebuilt: KeywordTable<TokenType> = KeywordTable::try_from_entries(shared.iter()).unwrap();

    assert_eq!(rebuilt.len(), shared.len());
    for &word in WORDS {
        assert_eq!(rebuilt.classify(word), shared.classify(word));
    }
}

#[test]
fn token_stream_for_a_let_statement() {
    // let five = 5;
    let tokens: Vec<Token> = vec![
        Token::from_word("let"),
        Token::from_word("five"),
        Token::from_char(TokenType::Assign, '='),
        Token::new(TokenType::Int, "5"),
        Token::from_char(TokenType::Semicolon, ';'),
        Token::eof(),
    ];

    let types: Vec<TokenType> = tokens.iter().map(|token| token.token_type).collect();
    assert_eq!(
        types,
        vec![
            TokenType::Let,
            TokenType::Ident,
            TokenType::Assign,
            TokenType::Int,
            TokenType::Semicolon,
            TokenType::Eof,
        ]
    );
    assert!(tokens.iter().all(Token::is_well_formed));
}

#[test]
fn version_helpers_match_the_enumerations() {
    assert_eq!(TaxonomyVersion::Baseline.labels().len(), baseline::TokenType::ALL.len());
    assert_eq!(TaxonomyVersion::Extended.labels().len(), extended::TokenType::ALL.len());
    assert_eq!(<baseline::TokenType as TokenKind>::VERSION, TaxonomyVersion::Baseline);
    assert_eq!(<TokenType as TokenKind>::VERSION, TaxonomyVersion::Extended);
}
