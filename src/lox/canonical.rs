//! Line-oriented rendering of tokens, one `KIND lexeme literal` triple per
//! token, as used when dumping a token stream for inspection or comparison.

use crate::lox::token::tokens::Token;

/// Renders a value in the canonical dump format.
pub trait CanonicalDisplay {
    /// The canonical single-line form of this value.
    fn canonical(&self) -> String;
}

impl CanonicalDisplay for Token {
    fn canonical(&self) -> String {
        let Token { ref token_type, ref lexeme, .. } = *self;
        match self.literal() {
            Some(literal) => format!("{} {lexeme} {literal}", token_type.name()),
            None => format!("{} {lexeme} null", token_type.name()),
        }
    }
}
