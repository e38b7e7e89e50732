use crate::baseline;
use crate::error::TokenError;
use crate::taxonomy::taxonomy;
use crate::token;

// Расширенная таксономия: базовая плюс строки, двоеточие и квадратные скобки.
taxonomy! {
    version: Extended;
    special {
        Illegal => "ILLEGAL",
        Eof => "EOF",
    }
    literals {
        Ident => "IDENT",
        Int => "INT",
        String => "STRING",
    }
    operators {
        Assign => "=",
        Plus => "+",
        Minus => "-",
        Bang => "!",
        Asterisk => "*",
        Slash => "/",
        Lt => "<",
        Gt => ">",
        Eq => "==",
        NotEq => "!=",
    }
    delimiters {
        Comma => ",",
        Semicolon => ";",
        Colon => ":",
        #[serde(rename = "LPAREN")]
        LParen => "(",
        #[serde(rename = "RPAREN")]
        RParen => ")",
        #[serde(rename = "LBRACE")]
        LBrace => "{",
        #[serde(rename = "RBRACE")]
        RBrace => "}",
        #[serde(rename = "LBRACKET")]
        LBracket => "[",
        #[serde(rename = "RBRACKET")]
        RBracket => "]",
    }
    keywords {
        Function => "FUNCTION": "fn",
        Let => "LET": "let",
        If => "if": "if",
        Else => "else": "else",
        Return => "return": "return",
        True => "true": "true",
        False => "false": "false",
    }
}

// Каждая базовая категория есть и в расширенной таксономии
impl From<baseline::TokenType> for TokenType {
    fn from(token_type: baseline::TokenType) -> Self {
        use baseline::TokenType as Base;

        match token_type {
            Base::Illegal => TokenType::Illegal,
            Base::Eof => TokenType::Eof,
            Base::Ident => TokenType::Ident,
            Base::Int => TokenType::Int,
            Base::Assign => TokenType::Assign,
            Base::Plus => TokenType::Plus,
            Base::Minus => TokenType::Minus,
            Base::Bang => TokenType::Bang,
            Base::Asterisk => TokenType::Asterisk,
            Base::Slash => TokenType::Slash,
            Base::Lt => TokenType::Lt,
            Base::Gt => TokenType::Gt,
            Base::Eq => TokenType::Eq,
            Base::NotEq => TokenType::NotEq,
            Base::Comma => TokenType::Comma,
            Base::Semicolon => TokenType::Semicolon,
            Base::LParen => TokenType::LParen,
            Base::RParen => TokenType::RParen,
            Base::LBrace => TokenType::LBrace,
            Base::RBrace => TokenType::RBrace,
            Base::Function => TokenType::Function,
            Base::Let => TokenType::Let,
            Base::If => TokenType::If,
            Base::Else => TokenType::Else,
            Base::Return => TokenType::Return,
            Base::True => TokenType::True,
            Base::False => TokenType::False,
        }
    }
}

impl From<baseline::Token> for Token {
    fn from(token: baseline::Token) -> Self {
        token::Token::new(token.token_type.into(), token.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn reserved_words() {
        assert_eq!(lookup_ident("fn"), TokenType::Function);
        assert_eq!(lookup_ident("let"), TokenType::Let);
        assert_eq!(lookup_ident("if"), TokenType::If);
        assert_eq!(lookup_ident("return"), TokenType::Return);
        assert_eq!(lookup_ident("true"), TokenType::True);
        assert_eq!(lookup_ident("false"), TokenType::False);
        assert_eq!(lookup_ident("else"), TokenType::Else);
    }

    #[test]
    fn new_categories_never_come_from_classification() {
        for word in ["string", "STRING", "str", "colon", "list", "x"] {
            assert_eq!(lookup_ident(word), TokenType::Ident, "{word}");
        }
        for (_, token_type) in KEYWORDS.iter() {
            assert!(!matches!(
                token_type,
                TokenType::String
                    | TokenType::Colon
                    | TokenType::LBracket
                    | TokenType::RBracket
            ));
        }
    }

    #[test]
    fn superset_of_baseline() {
        assert_eq!(TokenType::ALL.len(), baseline::TokenType::ALL.len() + 4);

        for &base in baseline::TokenType::ALL {
            let widened = TokenType::from(base);
            assert_eq!(widened.as_str(), base.as_str());
            assert_eq!(baseline::TokenType::try_from(widened), Ok(base));
        }
    }

    #[test]
    fn labels_parse_back() {
        for &token_type in TokenType::ALL {
            assert_eq!(token_type.as_str().parse::<TokenType>(), Ok(token_type));
        }
        assert_eq!("]".parse::<TokenType>(), Ok(TokenType::RBracket));
        assert_eq!(
            "FN".parse::<TokenType>(),
            Err(TokenError::UnknownLabel("FN".into()))
        );
    }

    #[test]
    fn widening_a_token_keeps_its_lexeme() {
        let token: baseline::Token = token::Token::from_word("return");
        let widened = Token::from(token);

        assert_eq!(widened, token::Token::new(TokenType::Return, "return"));
    }
}
