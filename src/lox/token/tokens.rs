//! Data types representing tokens available in the Lox language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::lox::types::{Literal, Span};
use crate::lox::util::map;

/// Keywords in the Lox language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum Keyword {
    // Constants
    /// `"nil"`
    Nil,
    /// `"false"`
    False,
    /// `"true"`
    True,

    // Logical Operators
    /// `"and"`
    And,
    /// `"or"`
    Or,

    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"for"`
    For,
    /// `"while"`
    While,
    /// `"break"`
    Break,
    /// `"return"`
    Return,

    // Declarations
    /// `"class"`
    Class,
    /// `"fun"`
    Fun,
    /// `"var"`
    Var,

    // Others
    /// `"print"`
    Print,
    /// `"super"`
    Super,
    /// `"this"`
    This,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 17] = [
        Keyword::Nil,
        Keyword::False,
        Keyword::True,
        Keyword::And,
        Keyword::Or,
        Keyword::If,
        Keyword::Else,
        Keyword::For,
        Keyword::While,
        Keyword::Break,
        Keyword::Return,
        Keyword::Class,
        Keyword::Fun,
        Keyword::Var,
        Keyword::Print,
        Keyword::Super,
        Keyword::This,
    ];

    /// Extract the raw representation as it occurs in the source code.
    #[must_use]
    pub const fn to_raw(self) -> &'static str {
        match self {
            Keyword::Nil => "nil",
            Keyword::False => "false",
            Keyword::True => "true",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Break => "break",
            Keyword::Return => "return",
            Keyword::Class => "class",
            Keyword::Fun => "fun",
            Keyword::Var => "var",
            Keyword::Print => "print",
            Keyword::Super => "super",
            Keyword::This => "this",
        }
    }

    /// Exact-match lookup of a complete identifier lexeme.
    /// Returns [None] for anything that is not a reserved word,
    /// in which case the lexeme is an identifier.
    #[must_use]
    pub fn lookup(lexeme: &str) -> Option<Keyword> {
        KEYWORDS.get(lexeme).copied()
    }
}

/// Lookup table for keywords to distinguish them from identifiers.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "nil"    => Keyword::Nil,
        "false"  => Keyword::False,
        "true"   => Keyword::True,

        "and"    => Keyword::And,
        "or"     => Keyword::Or,

        "if"     => Keyword::If,
        "else"   => Keyword::Else,
        "for"    => Keyword::For,
        "while"  => Keyword::While,
        "break"  => Keyword::Break,
        "return" => Keyword::Return,

        "class"  => Keyword::Class,
        "fun"    => Keyword::Fun,
        "var"    => Keyword::Var,

        "print"  => Keyword::Print,
        "super"  => Keyword::Super,
        "this"   => Keyword::This,
    }
});

/// An enum covering all possible variations a token can take on.
///
/// Only [`TokenType::Literal`] carries a payload, so a number or string
/// value can never be attached to any other kind of token.
#[derive(Debug, Clone, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum TokenType {
    // Grouping
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,

    // Separators
    /// `","`
    Comma,
    /// `";"`
    Semi,
    /// `"."`
    Dot,

    // Arith Operators
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"*"`
    Star,
    /// `"/"`
    Slash,
    /// `"%"`
    Modulo,

    // Boolean Operators
    /// `"!"`
    Not,
    /// `"!="`
    NotEquals,
    /// `"="`
    Assign,
    /// `"=="`
    DoubleEquals,
    /// `">"`
    GreaterThan,
    /// `">="`
    GreaterThanEqual,
    /// `"<"`
    LessThan,
    /// `"<="`
    LessThanEqual,

    // Identifiers, Literals and Keywords
    /// A custom identifier, its name is the token's lexeme.
    Identifier,
    /// A string or number literal in the source code.
    Literal(Literal),
    /// A specific keyword
    Keyword(Keyword),

    /// End of Input, either end of line in REPL mode, or End of File in normal mode.
    EndOfInput,
}

impl TokenType {
    /// The upper-case name of this kind of token, as used in token dumps
    /// (`OSQUIGGLE`, `BANG_EQUAL`, `NUMBER`, `WHILE`, ...).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match *self {
            TokenType::LeftBrace => "OSQUIGGLE",
            TokenType::RightBrace => "CSQUIGGLE",
            TokenType::LeftParen => "OPAREN",
            TokenType::RightParen => "CPAREN",
            TokenType::Comma => "COMMA",
            TokenType::Semi => "SEMI",
            TokenType::Dot => "DOT",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Star => "STAR",
            TokenType::Slash => "SLASH",
            TokenType::Modulo => "MODULO",
            TokenType::Not => "BANG",
            TokenType::NotEquals => "BANG_EQUAL",
            TokenType::Assign => "EQUAL",
            TokenType::DoubleEquals => "EQUAL_EQUAL",
            TokenType::GreaterThan => "GREATER",
            TokenType::GreaterThanEqual => "GREATER_EQUAL",
            TokenType::LessThan => "LESS",
            TokenType::LessThanEqual => "LESS_EQUAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Literal(Literal::String(_)) => "STRING",
            TokenType::Literal(Literal::Number(_)) => "NUMBER",
            TokenType::Keyword(kw) => match kw {
                Keyword::Nil => "NIL",
                Keyword::False => "FALSE",
                Keyword::True => "TRUE",
                Keyword::And => "AND",
                Keyword::Or => "OR",
                Keyword::If => "IF",
                Keyword::Else => "ELSE",
                Keyword::For => "FOR",
                Keyword::While => "WHILE",
                Keyword::Break => "BREAK",
                Keyword::Return => "RETURN",
                Keyword::Class => "CLASS",
                Keyword::Fun => "FUN",
                Keyword::Var => "VAR",
                Keyword::Print => "PRINT",
                Keyword::Super => "SUPER",
                Keyword::This => "THIS",
            },
            TokenType::EndOfInput => "EOF",
        }
    }
}

/// A single lexical unit: its type, the exact source text it was
/// scanned from, and where that text is located.
#[derive(Debug, Clone, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "a token is exactly these three parts.")]
pub struct Token {
    /// Type of this token.
    pub token_type: TokenType,
    /// The exact source substring, empty only for [`TokenType::EndOfInput`].
    pub lexeme: String,
    /// Span the token takes up in source code.
    pub span: Span,
}

impl Token {
    /// The 1-indexed line on which the lexeme begins.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span.start.line
    }

    /// The literal payload, present only for string and number tokens.
    #[must_use]
    pub const fn literal(&self) -> Option<&Literal> {
        match self.token_type {
            TokenType::Literal(ref literal) => Some(literal),
            _ => None,
        }
    }

    /// Whether this is the synthetic end-of-input token.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.token_type, TokenType::EndOfInput)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{} {:?} @ {}>", self.token_type.name(), self.lexeme, self.span)
    }
}
