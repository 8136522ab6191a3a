pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns a lexer over the token kinds of the input.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. Input the
/// tokenizer does not recognize becomes a [`TokenKind::Symbol`] token, which the reader reports.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: kind.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}
