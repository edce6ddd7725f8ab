//! Thompson NFA compiler and matcher for a restricted regex syntax
//!
//! This library compiles a restricted regular-expression syntax into a
//! nondeterministic finite automaton and simulates that automaton over byte
//! strings. The supported surface is: literal printable ASCII bytes, `.`
//! (any byte), the postfix quantifiers `?`/`*`/`+`, `(`/`)` grouping, `|`
//! alternation, and `[...]` as a set of single-byte alternatives. Escapes,
//! class negation, class ranges, and capture extraction are unsupported;
//! `\` is reserved and currently ignored.
//!
//! ```
//! use renfa::{compile, Matcher};
//!
//! let nfa = compile(b"ab(a[bd]*|cd)?|xqwyz").unwrap();
//! let matcher = Matcher::new(&nfa);
//! assert!(matcher.full_match(b"abab"));
//! assert!(matcher.full_match(b"xqwyz"));
//! assert!(!matcher.full_match(b"abcccc"));
//! ```

pub mod compiler;
pub mod dot;
pub mod matcher;
pub mod nfa;

pub use compiler::{compile, Compiler};
pub use dot::describe;
pub use matcher::Matcher;
pub use nfa::{Label, Nfa, State, StateId};

use thiserror::Error;

/// The result of compiling a pattern.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation.
///
/// All variants are structural: the scan itself cannot fail on any byte, so
/// the only rejected inputs are unbalanced groups and unterminated classes.
/// A failed compile never leaks a partially built automaton; the compiler
/// owns all allocated states until it returns `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A `)` was found with no open group.
    #[error("unmatched `)` at byte {at}")]
    UnmatchedGroupClose { at: usize },
    /// The pattern ended with at least one group still open.
    #[error("unclosed group at end of pattern")]
    UnclosedGroup,
    /// A `[` class was not closed by `]` before the end of the pattern.
    #[error("unterminated character class starting at byte {at}")]
    UnterminatedClass { at: usize },
}
