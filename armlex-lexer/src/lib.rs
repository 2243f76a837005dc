//! Provide functional to convert ARM assembly source into a token stream.
//!
//! # `Lexer`
//!
//! The lexer walks the source once, consulting the rule table of the mode on
//! top of its `ModeStack`. At each position the first rule whose pattern
//! matches wins. When no rule matches, a single character is emitted as
//! `invalid`, so scanning always advances and never fails.
//!
//! The emitted tokens are contiguous: concatenating their text in order
//! gives back the input exactly.
//!
//! ```
//! use armlex_lexer::lex;
//! use armlex_token::Category;
//!
//! let tokens = lex("mov r0, #5");
//! let categories = tokens.iter().map(|t| t.category()).collect::<Vec<_>>();
//! assert_eq!(categories, [
//!     Category::Keyword,
//!     Category::Whitespace,
//!     Category::Identifier,
//!     Category::Delimiter,
//!     Category::Whitespace,
//!     Category::ImmediateDec,
//! ]);
//! ```

use std::collections::VecDeque;
use armlex_mnemonic::is_keyword;
use armlex_span::Span;
use armlex_token::{Category, Token};
use rules::{Action, OPERATORS};

pub use mode::{Mode, ModeStack};

mod mode;
mod pattern;
mod rules;

/// Scan the whole input and return its tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).lex()
}

/// Struct to construct the list of token.
///
/// `Lexer` is also an `Iterator` over the tokens, for hosts which want to
/// stop early.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    input: &'src str,
    position: usize,
    modes: ModeStack,
    pending: VecDeque<Token<'src>>,
}

impl<'src> Lexer<'src> {
    /// Construct `Lexer` starting in `Root` mode at the start of input.
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            position: 0,
            modes: ModeStack::new(),
            pending: VecDeque::new(),
        }
    }

    /// Construct list of token by consuming itself.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.input.len()))]
    pub fn lex(self) -> Vec<Token<'src>> {
        let tokens = self.collect::<Vec<_>>();
        tracing::debug!(count = tokens.len(), "scan complete");
        tokens
    }

    /// Return the mode the next token will be scanned in.
    pub fn mode(&self) -> Mode {
        self.modes.current()
    }
}

impl<'src> Lexer<'src> {
    /// Match one rule at the current position and queue its tokens.
    /// Return false at end of input.
    fn step(&mut self) -> bool {
        let input = self.input;
        let rest = &input[self.position..];
        let Some(first) = rest.chars().next() else {
            return false;
        };

        let mode = self.modes.current();
        let (len, action) = match rules::find(mode, rest) {
            Some(matched) => matched,
            None => (first.len_utf8(), Action::Emit(Category::Invalid)),
        };
        debug_assert!(len > 0, "zero-length match in {mode:?}");

        let text = &rest[..len];
        match action {
            Action::Emit(category) => self.emit(len, category),
            Action::Classify => {
                let category = if is_keyword(text) {
                    Category::Keyword
                } else {
                    Category::Identifier
                };
                self.emit(len, category);
            }
            Action::Operator => {
                let category = if OPERATORS.contains(&text) {
                    Category::OperatorSymbol
                } else {
                    Category::OperatorOther
                };
                self.emit(len, category);
            }
            Action::Bracket => {
                let category = match first {
                    '{' | '}' => Category::BracketCurly,
                    '[' | ']' => Category::BracketSquare,
                    _ => Category::BracketParenthesis,
                };
                self.emit(len, category);
            }
            Action::Quoted { quote, body } => {
                self.emit(1, quote);
                self.emit(len - 2, body);
                self.emit(1, quote);
            }
            Action::Push(category, next) => {
                self.emit(len, category);
                self.modes.push(next);
                tracing::trace!(mode = ?next, offset = self.position, "push mode");
            }
            Action::Pop(category) => {
                self.emit(len, category);
                let left = self.modes.pop();
                tracing::trace!(mode = ?left, offset = self.position, "pop mode");
            }
        }
        true
    }

    /// Queue a token covering the next `len` bytes and advance over them.
    fn emit(&mut self, len: usize, category: Category) {
        let input = self.input;
        let start = self.position;
        self.position += len;
        let text = &input[start..self.position];
        let span = Span::from_bounds(start, self.position);
        self.pending.push_back(Token::new(text, span, category));
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() && !self.step() {
            return None;
        }
        self.pending.pop_front()
    }
}
