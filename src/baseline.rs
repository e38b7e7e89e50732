use crate::error::TokenError;
use crate::extended;
use crate::taxonomy::taxonomy;

// Базовая таксономия: первая версия языка, без строк, двоеточия и квадратных скобок.
taxonomy! {
    version: Baseline;
    special {
        Illegal => "ILLEGAL",
        Eof => "EOF",
    }
    literals {
        Ident => "IDENT",
        Int => "INT",
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
        #[serde(rename = "LPAREN")]
        LParen => "(",
        #[serde(rename = "RPAREN")]
        RParen => ")",
        #[serde(rename = "LBRACE")]
        LBrace => "{",
        #[serde(rename = "RBRACE")]
        RBrace => "}",
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

// Сужение расширенной таксономии до базовой
impl TryFrom<extended::TokenType> for TokenType {
    type Error = TokenError;

    fn try_from(token_type: extended::TokenType) -> Result<Self, Self::Error> {
        use extended::TokenType as Ext;

        let narrowed = match token_type {
            Ext::Illegal => TokenType::Illegal,
            Ext::Eof => TokenType::Eof,
            Ext::Ident => TokenType::Ident,
            Ext::Int => TokenType::Int,
            Ext::Assign => TokenType::Assign,
            Ext::Plus => TokenType::Plus,
            Ext::Minus => TokenType::Minus,
            Ext::Bang => TokenType::Bang,
            Ext::Asterisk => TokenType::Asterisk,
            Ext::Slash => TokenType::Slash,
            Ext::Lt => TokenType::Lt,
            Ext::Gt => TokenType::Gt,
            Ext::Eq => TokenType::Eq,
            Ext::NotEq => TokenType::NotEq,
            Ext::Comma => TokenType::Comma,
            Ext::Semicolon => TokenType::Semicolon,
            Ext::LParen => TokenType::LParen,
            Ext::RParen => TokenType::RParen,
            Ext::LBrace => TokenType::LBrace,
            Ext::RBrace => TokenType::RBrace,
            Ext::Function => TokenType::Function,
            Ext::Let => TokenType::Let,
            Ext::If => TokenType::If,
            Ext::Else => TokenType::Else,
            Ext::Return => TokenType::Return,
            Ext::True => TokenType::True,
            Ext::False => TokenType::False,
            Ext::String | Ext::Colon | Ext::LBracket | Ext::RBracket => {
                return Err(TokenError::NotInBaseline(token_type.as_str()));
            }
        };

        Ok(narrowed)
    }
}
