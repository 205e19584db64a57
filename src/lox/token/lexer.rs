//! Encapsulates all behaviour necessary to properly lex Lox code.
//!
//! Lexing never stops at the first problem: every unexpected character and
//! every unterminated string is recorded as a [`LexingError`], and scanning
//! resumes right after it. A scan therefore always yields a complete token
//! list ending in [`TokenType::EndOfInput`], alongside all errors found.
//!
//! ```rust
//! use lox_scanner::lox::token::lexer::scan_tokens;
//!
//! let scanned = scan_tokens("var x = \"foo\" + 20;");
//! assert!(scanned.errors.is_empty());
//! assert_eq!(scanned.tokens.len(), 8);
//! ```
#![allow(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use core::iter::FusedIterator;
use core::str::FromStr;

use log::{debug, trace};
use thiserror::Error;

use crate::lox::token::cursor::SourceCursor;
use crate::lox::token::tokens::{Keyword, Token, TokenType};
use crate::lox::types::{Literal, Location, Span};

/// Errors that can happen during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[expect(
    clippy::exhaustive_enums,
    reason = "callers decide per kind whether an error is fatal, a new kind is a breaking change."
)]
pub enum LexingError {
    /// A character that does not start any token and is not whitespace.
    #[error("[line {}] Error: unexpected character `{}`", .span.start.line, .character.escape_debug())]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it occurred.
        span: Span,
    },
    /// A string was started but not terminated until the end of input/file.
    #[error("[line {}] Error: unterminated string", .span.start.line)]
    UnterminatedString {
        /// From the opening quote up to the end of input.
        span: Span,
    },
}

impl LexingError {
    /// Where in the source the error occurred.
    #[must_use]
    pub const fn span(&self) -> Span {
        match *self {
            LexingError::UnexpectedCharacter { span, .. } | LexingError::UnterminatedString { span } => span,
        }
    }

    /// The line the error was reported on. For unterminated strings this is
    /// the line of the opening quote.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span().start.line
    }
}

/// Everything a single scan produced.
#[derive(Debug, Clone, PartialEq, Default)]
#[expect(clippy::exhaustive_structs, reason = "a scan only ever produces tokens and errors.")]
pub struct ScanResult {
    /// All tokens in source order, always ending in [`TokenType::EndOfInput`].
    pub tokens: Vec<Token>,
    /// All recovered errors in source order.
    pub errors: Vec<LexingError>,
}

impl ScanResult {
    /// Whether any error was recorded during the scan.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Turns the scan into either the list of tokens, or all errors if any
    /// did occur. Use this if you cannot proceed with a list of tokens after
    /// lexing had any errors.
    ///
    /// # Errors
    ///
    /// All [`LexingErrors`](LexingError) of the scan, if there was at least one.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexingError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Scans the given Lox source code into its tokens and the errors found
/// along the way. Errors do not stop the scan.
pub fn scan_tokens<S: AsRef<str>>(source: S) -> ScanResult {
    let mut result = ScanResult::default();
    for item in Scanner::new(source.as_ref()) {
        match item {
            Ok(token) => result.tokens.push(token),
            Err(err) => {
                debug!("{err}");
                result.errors.push(err);
            }
        }
    }
    debug!(
        "scanned {} tokens with {} errors",
        result.tokens.len(),
        result.errors.len()
    );
    result
}

/// A single-use scanner over one source text, yielding tokens and errors
/// one at a time.
///
/// The last item is always the [`TokenType::EndOfInput`] token, after which
/// the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    /// Position inside the source.
    cursor: SourceCursor<'src>,
    /// Set once the end-of-input token was handed out.
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Scanner {
            cursor: SourceCursor::new(source),
            finished: false,
        }
    }

    /// Lexes the next token, skipping whitespace and comments.
    ///
    /// In case of an error, the characters stay consumed, so that lexing can
    /// continue past the error.
    fn next_token(&mut self) -> Result<Token, LexingError> {
        loop {
            let start = self.cursor.offset();
            let start_loc = self.cursor.location();

            let Some(c) = self.cursor.advance() else {
                return Ok(self.emit(TokenType::EndOfInput, start, start_loc));
            };

            let token_type = match c {
                // Grouping
                '{' => TokenType::LeftBrace,
                '}' => TokenType::RightBrace,
                '(' => TokenType::LeftParen,
                ')' => TokenType::RightParen,

                // Separators
                ',' => TokenType::Comma,
                '.' => TokenType::Dot,
                ';' => TokenType::Semi,

                // Arith Operators
                '+' => TokenType::Plus,
                '-' => TokenType::Minus,
                '*' => TokenType::Star,
                '%' => TokenType::Modulo,
                '/' if self.cursor.match_char('/') => {
                    let _: usize = self.cursor.advance_while(|c| c != '\n');
                    continue;
                }
                '/' => TokenType::Slash,

                // Boolean Operators
                '!' if self.cursor.match_char('=') => TokenType::NotEquals,
                '!' => TokenType::Not,
                '=' if self.cursor.match_char('=') => TokenType::DoubleEquals,
                '=' => TokenType::Assign,
                '>' if self.cursor.match_char('=') => TokenType::GreaterThanEqual,
                '>' => TokenType::GreaterThan,
                '<' if self.cursor.match_char('=') => TokenType::LessThanEqual,
                '<' => TokenType::LessThan,

                // Whitespace
                ' ' | '\t' | '\r' | '\n' => continue,

                // Literals
                '"' => self.string(start_loc)?,
                c if is_digit(c) => self.number(start),

                // Identifiers and Keywords
                c if is_alpha(c) => self.identifier(start),

                // ERROR
                character => {
                    return Err(LexingError::UnexpectedCharacter {
                        character,
                        span: Span::from(start_loc, self.cursor.location()),
                    });
                }
            };

            return Ok(self.emit(token_type, start, start_loc));
        }
    }

    /// Builds a token from the source consumed since `start`.
    fn emit(&self, token_type: TokenType, start: usize, start_loc: Location) -> Token {
        let token = Token {
            token_type,
            lexeme: self.cursor.slice_from(start).to_owned(),
            span: Span::from(start_loc, self.cursor.location()),
        };
        trace!("{token}");
        token
    }

    /// Lexes the rest of a string literal, the opening quote has already
    /// been consumed. Strings may span multiple lines.
    fn string(&mut self, start_loc: Location) -> Result<TokenType, LexingError> {
        let body_start = self.cursor.offset();
        let _: usize = self.cursor.advance_while(|c| c != '"');
        let body = self.cursor.slice_from(body_start).to_owned();

        if self.cursor.match_char('"') {
            Ok(TokenType::Literal(Literal::String(body)))
        } else {
            Err(LexingError::UnterminatedString {
                span: Span::from(start_loc, self.cursor.location()),
            })
        }
    }

    /// Lexes the rest of a number literal. A fractional part is only taken
    /// if at least one digit follows the dot.
    fn number(&mut self, start: usize) -> TokenType {
        let _: usize = self.cursor.advance_while(is_digit);
        if self.cursor.peek() == Some('.') && self.cursor.peek_next().is_some_and(is_digit) {
            let _: Option<char> = self.cursor.advance();
            let _: usize = self.cursor.advance_while(is_digit);
        }

        let value = f64::from_str(self.cursor.slice_from(start))
            .expect("digits with an optional fractional part always parse as f64");
        TokenType::Literal(Literal::Number(value))
    }

    /// Lexes the rest of an identifier and decides whether it is a keyword.
    fn identifier(&mut self, start: usize) -> TokenType {
        let _: usize = self.cursor.advance_while(is_alpha_num);
        match Keyword::lookup(self.cursor.slice_from(start)) {
            Some(kw) => TokenType::Keyword(kw),
            None => TokenType::Identifier,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        if matches!(item, Ok(ref token) if token.is_end()) {
            self.finished = true;
        }
        Some(item)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Is the character an ASCII digit?
#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Is the character in the ASCII alphabet, or an underscore?
#[inline]
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || (c == '_')
}

/// Is the character an alphanumeric ASCII character, or an underscore?
#[inline]
fn is_alpha_num(c: char) -> bool {
    c.is_ascii_alphanumeric() || (c == '_')
}

#[cfg(test)]
mod test {
    use super::{scan_tokens, LexingError, Scanner};
    use crate::lox::token::tokens::Keyword::*;
    use crate::lox::token::tokens::TokenType::{self, *};
    use crate::lox::types::Literal::*;
    use crate::lox::types::{Location, Span};

    fn tokenize_no_spans(source: impl AsRef<str>) -> Vec<TokenType> {
        scan_tokens(source)
            .into_result()
            .expect("Tokenizing failed")
            .into_iter()
            .map(|token| token.token_type)
            .collect()
    }

    fn lexemes(source: &str) -> Vec<std::string::String> {
        scan_tokens(source)
            .tokens
            .into_iter()
            .map(|token| token.lexeme)
            .collect()
    }

    #[test]
    fn simple_tokenizations() {
        assert_eq!(
            tokenize_no_spans("var foo = 20;"),
            vec![
                Keyword(Var),
                Identifier,
                Assign,
                Literal(Number(20.0)),
                Semi,
                EndOfInput,
            ]
        );
        assert_eq!(lexemes("var foo = 20;"), ["var", "foo", "=", "20", ";", ""]);
    }

    #[test]
    fn empty_source_is_just_end_of_input() {
        let scanned = scan_tokens("");
        assert!(!scanned.has_errors(), "nothing to complain about");
        assert_eq!(scanned.tokens.len(), 1);
        let eof = &scanned.tokens[0];
        assert_eq!(eof.token_type, EndOfInput);
        assert_eq!(eof.lexeme, "");
        assert_eq!(eof.line(), 1);
    }

    #[test]
    fn single_characters() {
        assert_eq!(
            tokenize_no_spans("{}(),.;+-*%/"),
            vec![
                LeftBrace, RightBrace, LeftParen, RightParen, Comma, Dot, Semi, Plus,
                Minus, Star, Modulo, Slash, EndOfInput,
            ]
        );
    }

    #[test]
    fn two_character_operators_are_one_token() {
        for (source, expected) in [
            ("!=", NotEquals),
            ("==", DoubleEquals),
            ("<=", LessThanEqual),
            (">=", GreaterThanEqual),
        ] {
            assert_eq!(tokenize_no_spans(source), vec![expected, EndOfInput], "{source}");
        }
    }

    #[test]
    fn one_character_operators_stand_alone() {
        assert_eq!(tokenize_no_spans("!"), vec![Not, EndOfInput]);
        assert_eq!(
            tokenize_no_spans("! = < >"),
            vec![Not, Assign, LessThan, GreaterThan, EndOfInput]
        );
        assert_eq!(
            tokenize_no_spans("!!="),
            vec![Not, NotEquals, EndOfInput]
        );
        assert_eq!(
            tokenize_no_spans("==="),
            vec![DoubleEquals, Assign, EndOfInput]
        );
        assert_eq!(
            tokenize_no_spans("<>="),
            vec![LessThan, GreaterThanEqual, EndOfInput]
        );
    }

    #[test]
    fn strings() {
        let scanned = scan_tokens("\"abc\"");
        assert!(!scanned.has_errors(), "string is terminated");
        assert_eq!(scanned.tokens.len(), 2);
        let string = &scanned.tokens[0];
        assert_eq!(string.token_type, Literal(String("abc".to_owned())));
        assert_eq!(string.lexeme, "\"abc\"");
        assert_eq!(string.literal(), Some(&String("abc".to_owned())));

        assert_eq!(
            tokenize_no_spans(r#""" "a\nb""#),
            vec![
                Literal(String(std::string::String::new())),
                Literal(String("a\\nb".to_owned())),
                EndOfInput,
            ]
        );
    }

    #[test]
    fn strings_may_span_lines() {
        let scanned = scan_tokens("\"one\ntwo\" x");
        assert!(!scanned.has_errors(), "string is terminated");
        let string = &scanned.tokens[0];
        assert_eq!(string.token_type, Literal(String("one\ntwo".to_owned())));
        assert_eq!(string.line(), 1);
        assert_eq!(scanned.tokens[1].line(), 2);
        assert_eq!(scanned.tokens[2].line(), 2);
    }

    #[test]
    fn unterminated_string() {
        let scanned = scan_tokens("\"abc");
        assert_eq!(scanned.tokens.len(), 1);
        assert_eq!(scanned.tokens[0].token_type, EndOfInput);
        assert_eq!(
            scanned.errors,
            vec![LexingError::UnterminatedString {
                span: Span::from(Location { line: 1, col: 1 }, Location { line: 1, col: 5 }),
            }]
        );
    }

    #[test]
    fn unterminated_string_reports_its_start_line() {
        let scanned = scan_tokens("x\n\"abc\ndef\n");
        assert_eq!(scanned.errors.len(), 1);
        assert_eq!(scanned.errors[0].line(), 2);
        let eof = scanned.tokens.last().expect("always an end token");
        assert_eq!(eof.token_type, EndOfInput);
        assert_eq!(eof.line(), 4);
    }

    #[test]
    fn numbers() {
        assert_eq!(
            tokenize_no_spans("123.45"),
            vec![Literal(Number(123.45)), EndOfInput]
        );
        assert_eq!(lexemes("007 1.50"), ["007", "1.50", ""]);
    }

    #[test]
    fn trailing_dot_is_not_part_of_a_number() {
        assert_eq!(
            tokenize_no_spans("123."),
            vec![Literal(Number(123.0)), Dot, EndOfInput]
        );
        assert_eq!(
            tokenize_no_spans("1.2.3"),
            vec![Literal(Number(1.2)), Dot, Literal(Number(3.0)), EndOfInput]
        );
        assert_eq!(
            tokenize_no_spans(".5"),
            vec![Dot, Literal(Number(5.0)), EndOfInput]
        );
        assert_eq!(
            tokenize_no_spans("4.foo"),
            vec![Literal(Number(4.0)), Dot, Identifier, EndOfInput]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(tokenize_no_spans("for"), vec![Keyword(For), EndOfInput]);
        assert_eq!(tokenize_no_spans("forward"), vec![Identifier, EndOfInput]);
        assert_eq!(lexemes("forward"), ["forward", ""]);
        assert_eq!(
            tokenize_no_spans("_x1 x_1 breaks break classy"),
            vec![Identifier, Identifier, Identifier, Keyword(Break), Identifier, EndOfInput]
        );
        assert_eq!(
            tokenize_no_spans("and class else false fun if nil or print return super this true while"),
            vec![
                Keyword(And), Keyword(Class), Keyword(Else), Keyword(False), Keyword(Fun),
                Keyword(If), Keyword(Nil), Keyword(Or), Keyword(Print), Keyword(Return),
                Keyword(Super), Keyword(This), Keyword(True), Keyword(While), EndOfInput,
            ]
        );
    }

    #[test]
    fn identifiers_do_not_start_with_digits() {
        assert_eq!(
            tokenize_no_spans("1abc"),
            vec![Literal(Number(1.0)), Identifier, EndOfInput]
        );
    }

    #[test]
    fn comments_produce_no_tokens() {
        let scanned = scan_tokens("// comment\n123");
        assert!(!scanned.has_errors(), "comments are fine");
        assert_eq!(scanned.tokens.len(), 2);
        assert_eq!(scanned.tokens[0].token_type, Literal(Number(123.0)));
        assert_eq!(scanned.tokens[0].line(), 2);
        assert_eq!(tokenize_no_spans("1 / 2 // @ \"no"), vec![
            Literal(Number(1.0)),
            Slash,
            Literal(Number(2.0)),
            EndOfInput,
        ]);
    }

    #[test]
    fn unexpected_character() {
        let scanned = scan_tokens("@");
        assert_eq!(scanned.tokens.len(), 1);
        assert_eq!(scanned.tokens[0].token_type, EndOfInput);
        assert_eq!(
            scanned.errors,
            vec![LexingError::UnexpectedCharacter {
                character: '@',
                span: Span::from(Location { line: 1, col: 1 }, Location { line: 1, col: 2 }),
            }]
        );
        assert_eq!(
            scanned.errors[0].to_string(),
            "[line 1] Error: unexpected character `@`"
        );
    }

    #[test]
    fn scanning_continues_after_errors() {
        let scanned = scan_tokens("a # b\n\u{0} \u{e9} \"c");
        let types: Vec<TokenType> = scanned.tokens.iter().map(|t| t.token_type.clone()).collect();
        assert_eq!(types, vec![Identifier, Identifier, EndOfInput]);
        let errors: Vec<(usize, std::string::String)> = scanned
            .errors
            .iter()
            .map(|err| (err.line(), err.to_string()))
            .collect();
        assert_eq!(
            errors,
            vec![
                (1, "[line 1] Error: unexpected character `#`".to_owned()),
                (2, "[line 2] Error: unexpected character `\\0`".to_owned()),
                (2, "[line 2] Error: unexpected character `\u{e9}`".to_owned()),
                (2, "[line 2] Error: unterminated string".to_owned()),
            ]
        );
    }

    #[test]
    fn carriage_returns_are_whitespace() {
        let scanned = scan_tokens("a\r\nb");
        assert!(!scanned.has_errors(), "\\r is whitespace");
        assert_eq!(scanned.tokens[1].line(), 2);
    }

    #[test]
    fn end_of_input_is_on_the_final_line() {
        let scanned = scan_tokens("a\nb\n\n");
        let eof = scanned.tokens.last().expect("always an end token");
        assert_eq!(eof.token_type, EndOfInput);
        assert_eq!(eof.line(), 4);
        assert_eq!(eof.lexeme, "");
    }

    #[test]
    fn spans_cover_the_lexeme() {
        let scanned = scan_tokens("  foo >=");
        assert_eq!(
            scanned.tokens[0].span,
            Span::from(Location { line: 1, col: 3 }, Location { line: 1, col: 6 })
        );
        assert_eq!(
            scanned.tokens[1].span,
            Span::from(Location { line: 1, col: 7 }, Location { line: 1, col: 9 })
        );
        assert_eq!(
            scanned.tokens[2].span,
            Span::empty(Location { line: 1, col: 9 })
        );
    }

    #[test]
    fn scanner_stops_after_end_of_input() {
        let mut scanner = Scanner::new("x");
        assert!(matches!(scanner.next(), Some(Ok(ref t)) if t.token_type == Identifier));
        assert!(matches!(scanner.next(), Some(Ok(ref t)) if t.is_end()));
        assert!(scanner.next().is_none(), "exhausted after end of input");
        assert!(scanner.next().is_none(), "stays exhausted");
    }

    #[test]
    fn scanner_yields_errors_in_order() {
        let items: Vec<bool> = Scanner::new("a ? b").map(|item| item.is_ok()).collect();
        assert_eq!(items, vec![true, false, true, true]);
    }

    #[test]
    fn independent_scans_are_identical() {
        let source = "fun f(a) { return a % 2 != 0; } // odd?\nprint f(3.5) @ \"x";
        assert_eq!(scan_tokens(source), scan_tokens(source));
    }

    #[test]
    fn into_result_rejects_any_error() {
        assert!(scan_tokens("1 + 2").into_result().is_ok(), "no errors");
        let errors = scan_tokens("1 $ 2 ~").into_result().expect_err("two errors");
        assert_eq!(errors.len(), 2);
    }
}
