//! # lox-scanner - The lexical front end of a Lox-family scripting language
//!
//! This crate turns raw source text into the ordered sequence of typed
//! tokens a parser consumes. It covers the full token alphabet of the
//! language: brackets, single- and double-character operators, string and
//! number literals, identifiers, the 17 reserved words, and a terminal
//! end-of-input marker.
//!
//! ## Behaviour
//!
//! - Operators are scanned with maximal munch: `!=`, `==`, `<=` and `>=` always
//!   win over their one-character prefix, `//` starts a line comment.
//! - String literals may span multiple lines and are taken verbatim, there
//!   are no escape sequences. Numbers are double-precision floats; a trailing
//!   dot without digits is not part of the number.
//! - Keywords are only recognized on complete identifiers, `forward` is an
//!   identifier, not `for` followed by `ward`.
//! - Scanning never aborts. Unexpected characters and unterminated strings are
//!   collected as [`LexingErrors`](lox::token::lexer::LexingError) while the
//!   scan carries on, and the result always ends in an end-of-input token.
//!
//! The entry points are [`scan_tokens`](lox::token::lexer::scan_tokens) for a
//! whole text and [`Scanner`](lox::token::lexer::Scanner) for token-by-token
//! iteration.
//!
//! ## Extensions
//!
//! - Every token carries a [`Span`](lox::types::Span) with line and column of
//!   both its ends, not just its starting line.
//! - The `lox-scanner` binary dumps token streams of files, and has a REPL
//!   that asks for a continuation line while a string literal is left open.
//!
//! The scanner itself performs no output. It emits [`log`] records, which
//! stay silent unless the embedding application installs a logger.
#![deny(
    warnings,
)]
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2024_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::alloc_instead_of_core,
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::default_numeric_fallback,
    clippy::deref_by_slicing,
    clippy::empty_structs_with_brackets,
    clippy::error_impl_error,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::exit,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::indexing_slicing,
    clippy::let_underscore_must_use,
    clippy::let_underscore_untyped,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::missing_assert_message,
    clippy::missing_docs_in_private_items,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::pattern_type_mismatch,
    clippy::rc_buffer,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::std_instead_of_core,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_slice,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::try_err,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::unreachable,
    clippy::unused_result_ok,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::verbose_file_reads,
)]
#![warn(unused)]
#![allow(
    edition_2024_expr_fragment_specifier,
    reason = "the macros expect the 2024 edition behaviour."
)]
pub mod lox;
