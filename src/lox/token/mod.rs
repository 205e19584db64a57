//! This is the Lexing or Tokenization module, split into three submodules.
//!
//! - [tokens] specifies the data types making up the tokens of the Lox language,
//!   including the reserved-word table.
//! - [cursor] gives positional, character-wise access to the source text.
//! - [lexer] contains the code for tokenizing source code, alongside with the error
//!   definitions that can occur during this phase.
pub mod cursor;
pub mod lexer;
pub mod tokens;
