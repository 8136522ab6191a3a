pub mod error;

use error::{
    ExpectedEof,
    InvalidNumber,
    UnclosedBracket,
    UnexpectedEof,
    UnexpectedToken,
    UnknownCharacter,
    UnterminatedString,
};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use symex_core::Seq;
use symex_error::{Error, ErrorKind};

/// Removes the backslash from each escaped character in the contents of a string literal.
fn unescape(contents: &str) -> String {
    let mut unescaped = String::with_capacity(contents.len());
    let mut chars = contents.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.extend(chars.next()),
            c => unescaped.push(c),
        }
    }
    unescaped
}

/// Reads text in nested prefix notation, such as `[+, [number, 3], [variable, "x"]]`, into
/// [`Seq`] elements that remember where in the text they came from.
///
/// Lists are written with brackets and separated by commas; a trailing comma is allowed. Numbers,
/// double-quoted strings, names, and the symbols `+`, `*` and `-` are the other elements. Numbers
/// can also be spelled `inf`, `-inf` or `NaN`, and a backslash in a string escapes the next
/// character, such as `\"` or `\\`.
#[derive(Debug, Clone)]
pub struct Reader<'source> {
    /// The length of the source, used to point at its end.
    source_len: usize,

    /// The tokens that this reader is currently reading.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be read.
    cursor: usize,
}

impl<'source> Reader<'source> {
    /// Create a new reader for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source_len: source.len(),
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Returns a span pointing at the end of the source.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source if the cursor is at the
    /// end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Creates an error that points at the current token, or the end of the source if the cursor
    /// is at the end of the stream.
    fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Moves the cursor past any whitespace.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the kind of the next non-whitespace token without consuming it, or [`None`] at
    /// the end of the stream.
    fn peek_kind(&mut self) -> Option<TokenKind> {
        self.skip_whitespace();
        self.tokens.get(self.cursor).map(|token| token.kind)
    }

    /// Returns true if only whitespace remains.
    pub fn is_at_end(&mut self) -> bool {
        self.peek_kind().is_none()
    }

    /// Returns the next token to be read, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        let token = self.tokens
            .get(self.cursor)
            .cloned()
            .ok_or_else(|| self.error(UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Reads one element: a list with all its nested elements, or a single atom.
    pub fn read_seq(&mut self) -> Result<Seq, Error> {
        let token = self.next_token()?;
        let span = token.span.clone();

        match token.kind {
            TokenKind::OpenBracket => self.read_list(span),
            TokenKind::Number | TokenKind::NonFinite => {
                // a literal that overflows is rejected, but `inf` is spelled on purpose
                let value = token.lexeme
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite() || token.kind == TokenKind::NonFinite)
                    .ok_or_else(|| Error::new(vec![span.clone()], InvalidNumber {
                        lexeme: token.lexeme.to_string(),
                    }))?;
                Ok(Seq::number(value).with_span(span))
            },
            TokenKind::Str => {
                let contents = &token.lexeme[1..token.lexeme.len() - 1];
                Ok(Seq::string(unescape(contents)).with_span(span))
            },
            kind if kind.is_symbol() => Ok(Seq::symbol(token.lexeme).with_span(span)),
            TokenKind::UnterminatedStr => Err(Error::new(vec![span], UnterminatedString)),
            TokenKind::Symbol => Err(Error::new(vec![span], UnknownCharacter {
                character: token.lexeme.to_string(),
            })),
            found => Err(Error::new(vec![span], UnexpectedToken {
                expected: &[TokenKind::OpenBracket, TokenKind::Number, TokenKind::Str, TokenKind::Name],
                found,
            })),
        }
    }

    /// Creates an error pointing at an unclosed bracket and the end of the source.
    fn unclosed(&self, open: Range<usize>) -> Error {
        Error::new(vec![open, self.eof_span()], UnclosedBracket)
    }

    /// Reads the elements of a list up to and including its closing bracket. The opening bracket
    /// has already been consumed.
    fn read_list(&mut self, open: Range<usize>) -> Result<Seq, Error> {
        let mut items = Vec::new();

        loop {
            match self.peek_kind() {
                None => return Err(self.unclosed(open)),
                Some(TokenKind::CloseBracket) => break,
                Some(_) => items.push(self.read_seq()?),
            }

            match self.peek_kind() {
                None => return Err(self.unclosed(open)),
                Some(TokenKind::Comma) => self.cursor += 1,
                Some(TokenKind::CloseBracket) => break,
                Some(found) => return Err(self.error(UnexpectedToken {
                    expected: &[TokenKind::Comma, TokenKind::CloseBracket],
                    found,
                })),
            }
        }

        let close = self.next_token()?;
        Ok(Seq::list(items).with_span(open.start..close.span.end))
    }

    /// Reads exactly one element. All the input must be consumed; if not, an error is returned.
    pub fn read_full(&mut self) -> Result<Seq, Error> {
        let seq = self.read_seq()?;
        if self.is_at_end() {
            Ok(seq)
        } else {
            let rest = self.span().start..self.source_len;
            Err(Error::new(vec![rest], ExpectedEof))
        }
    }

    /// Reads every top-level element until the end of the input. The elements are separated by
    /// whitespace.
    pub fn read_all(&mut self) -> Result<Vec<Seq>, Error> {
        let mut seqs = Vec::new();
        while !self.is_at_end() {
            seqs.push(self.read_seq()?);
        }
        Ok(seqs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symex_core::{seq, SeqKind};

    /// Reads the source, then erases spans so the result can be compared with [`seq!`].
    fn read(source: &str) -> Result<Seq, Error> {
        fn erase(seq: Seq) -> Seq {
            match seq.kind {
                SeqKind::List(items) => Seq::list(items.into_iter().map(erase).collect()),
                kind => Seq::new(kind),
            }
        }

        Reader::new(source).read_full().map(erase)
    }

    #[test]
    fn atoms() {
        assert_eq!(Reader::new("3").read_full().unwrap(), Seq::number(3.0).with_span(0..1));
        assert_eq!(Reader::new(" -0.5 ").read_full().unwrap(), Seq::number(-0.5).with_span(1..5));
        assert_eq!(Reader::new("\"x y\"").read_full().unwrap(), Seq::string("x y").with_span(0..5));
        assert_eq!(Reader::new("cos").read_full().unwrap(), Seq::symbol("cos").with_span(0..3));
        assert_eq!(Reader::new("*").read_full().unwrap(), Seq::symbol("*").with_span(0..1));
    }

    #[test]
    fn nested_lists() {
        assert_eq!(
            read("[+, [number, 3], [variable, \"x\"]]").unwrap(),
            seq![+, [number, 3], [variable, "x"]],
        );
        assert_eq!(
            read("[-,[sin,[variable,t]]]").unwrap(),
            seq![-, [sin, [variable, t]]],
        );
    }

    #[test]
    fn empty_list_and_trailing_comma() {
        assert_eq!(read("[]").unwrap(), seq![]);
        assert_eq!(read("[ number , 1 , ]").unwrap(), seq![number, 1]);
    }

    #[test]
    fn list_spans() {
        let seq = Reader::new("[cos, [number, 2]]").read_full().unwrap();
        assert_eq!(seq.span, 0..18);
        let items = seq.as_list().unwrap();
        assert_eq!(items[0].span, 1..4);
        assert_eq!(items[1].span, 6..17);
    }

    #[test]
    fn read_all_elements() {
        let seqs = Reader::new("[number, 1] x\n[x, 4]").read_all().unwrap();
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[1].as_name(), Some("x"));
        assert_eq!(seqs[2].span, 14..20);

        assert!(Reader::new("   ").read_all().unwrap().is_empty());
    }

    #[test]
    fn unexpected_eof() {
        let err = Reader::new("").read_seq().unwrap_err();
        assert!(err.is::<UnexpectedEof>());
        assert_eq!(err.spans, vec![0..0]);
    }

    #[test]
    fn unclosed_bracket() {
        let err = Reader::new("[+, [number, 1]").read_full().unwrap_err();
        assert!(err.is::<UnclosedBracket>());
        assert_eq!(err.spans, vec![0..1, 15..15]);
    }

    #[test]
    fn missing_comma() {
        let err = Reader::new("[number 1]").read_full().unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedToken>(), Some(&UnexpectedToken {
            expected: &[TokenKind::Comma, TokenKind::CloseBracket],
            found: TokenKind::Number,
        }));
        assert_eq!(err.spans, vec![8..9]);
    }

    #[test]
    fn stray_close_bracket() {
        let err = Reader::new("]").read_full().unwrap_err();
        assert!(err.is::<UnexpectedToken>());
    }

    #[test]
    fn expected_eof() {
        let err = Reader::new("[number, 1] [number, 2]").read_full().unwrap_err();
        assert!(err.is::<ExpectedEof>());
        assert_eq!(err.spans, vec![12..23]);
    }

    #[test]
    fn unterminated_string() {
        let err = Reader::new("[variable, \"x]").read_full().unwrap_err();
        assert!(err.is::<UnterminatedString>());
        assert_eq!(err.spans, vec![11..14]);
    }

    #[test]
    fn invalid_number() {
        let err = Reader::new("1e999").read_full().unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidNumber>(), Some(&InvalidNumber {
            lexeme: "1e999".to_string(),
        }));

        let err = Reader::new("[number, 2e]").read_full().unwrap_err();
        assert!(err.is::<InvalidNumber>());
        assert_eq!(err.spans, vec![9..11]);
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(read("[number, inf]").unwrap(), seq![number, (f64::INFINITY)]);
        assert_eq!(read("[number, -inf]").unwrap(), seq![number, (f64::NEG_INFINITY)]);

        let seq = read("NaN").unwrap();
        assert!(matches!(seq.kind, SeqKind::Number(value) if value.is_nan()));

        // names that only start with a spelling are still names
        assert_eq!(read("info").unwrap(), Seq::symbol("info"));
    }

    #[test]
    fn escaped_strings() {
        assert_eq!(read(r#""a\"b""#).unwrap(), Seq::string("a\"b"));
        assert_eq!(read(r#""c:\\dir""#).unwrap(), Seq::string("c:\\dir"));
        assert_eq!(
            Reader::new(r#"[variable, "\""]"#).read_full().unwrap().span,
            0..16,
        );
    }

    #[test]
    fn unterminated_escaped_string() {
        let err = Reader::new(r#"[variable, "x\"]"#).read_full().unwrap_err();
        assert!(err.is::<UnterminatedString>());
        assert_eq!(err.spans, vec![11..16]);
    }

    #[test]
    fn unknown_character() {
        let err = Reader::new("[sin, $]").read_full().unwrap_err();
        assert!(err.is::<UnknownCharacter>());
        assert_eq!(err.spans, vec![6..7]);
    }
}
