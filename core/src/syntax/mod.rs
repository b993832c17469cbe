//! Lexical and syntactic analysis.

pub mod facts;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod tree;

pub use lexer::Lexer;
pub use parser::parse;
pub use token::{Token, TokenKind};
pub use tree::{ExprSyntax, SourceFile, SyntaxTree};

#[cfg(test)]
mod lexer_test;


#[cfg(test)]
mod precedence_test;
