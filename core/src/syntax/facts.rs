//! Token-kind facts: keyword recognition and operator precedence.
//!
//! Precedence numbers are shared by the prefix and infix tables; higher binds
//! tighter, zero means "not an operator in this position".

use super::token::TokenKind;

/// Classify a scanned word as a keyword or a plain identifier.
pub fn keyword_or_identifier(text: &str) -> TokenKind {
    match text {
        "true" => TokenKind::TrueKeyword,
        "false" => TokenKind::FalseKeyword,
        _ => TokenKind::Identifier,
    }
}

pub fn prefix_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Plus | TokenKind::Minus | TokenKind::Bang => 6,
        _ => 0,
    }
}

pub fn infix_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Star | TokenKind::Slash => 5,
        TokenKind::Plus | TokenKind::Minus => 4,
        TokenKind::EqualsEquals | TokenKind::BangEquals => 3,
        TokenKind::AmpersandAmpersand => 2,
        TokenKind::PipePipe => 1,
        _ => 0,
    }
}

/// All infix operator kinds, for property tests over the full cross product.
pub const INFIX_OPERATORS: &[TokenKind] = &[
    TokenKind::PipePipe,
    TokenKind::AmpersandAmpersand,
    TokenKind::EqualsEquals,
    TokenKind::BangEquals,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
];

/// All prefix operator kinds.
pub const PREFIX_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::Bang];

/// The source text of a fixed-spelling operator token.
pub fn operator_text(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Bang => "!",
        TokenKind::AmpersandAmpersand => "&&",
        TokenKind::PipePipe => "||",
        TokenKind::Equals => "=",
        TokenKind::EqualsEquals => "==",
        TokenKind::BangEquals => "!=",
        TokenKind::OpenParen => "(",
        TokenKind::CloseParen => ")",
        _ => "",
    }
}
